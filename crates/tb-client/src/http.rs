//! Shared HTTP response helpers for the registry client.
//!
//! Centralizes status-code interpretation and body decoding so the resource
//! modules only build paths and bodies:
//! - **200 / 201** → success, body handed to a decoder.
//! - **Any other status** → body decoded as [`ServerError`]; an undecodable
//!   body becomes [`ClientError::ProtocolViolation`].

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, RegistryError, ServerError};

/// Check an HTTP response for a server-reported failure.
///
/// Returns the response unchanged on 200 or 201.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RegistryError> {
    let status = resp.status();
    if matches!(status, StatusCode::OK | StatusCode::CREATED) {
        return Ok(resp);
    }
    let body = resp.bytes().await?;
    Err(server_failure(status.as_u16(), &body))
}

/// Interpret the body of a non-success response.
pub fn server_failure(status: u16, body: &[u8]) -> RegistryError {
    match serde_json::from_slice::<ServerError>(body) {
        Ok(err) => {
            tracing::debug!(status, error_code = err.error_code, "registry returned an error");
            err.into()
        }
        Err(e) => {
            tracing::warn!(status, %e, "registry error body does not match the error contract");
            ClientError::ProtocolViolation {
                status,
                reason: format!("{e}; body: {}", String::from_utf8_lossy(body)),
            }
            .into()
        }
    }
}

/// Decode a JSON success body into `T`.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, RegistryError> {
    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| RegistryError::decode(e.into()))
}

/// Read a success body whose payload is a plain-text integer (affected rows).
pub async fn read_count(resp: reqwest::Response) -> Result<i64, RegistryError> {
    let body = resp.text().await?;
    parse_count(&body)
}

/// Read a success body verbatim.
pub async fn read_text(resp: reqwest::Response) -> Result<String, RegistryError> {
    Ok(resp.text().await?)
}

/// Read the raw bytes of a success body.
pub async fn read_bytes(resp: reqwest::Response) -> Result<Vec<u8>, RegistryError> {
    Ok(resp.bytes().await?.to_vec())
}

fn parse_count(body: &str) -> Result<i64, RegistryError> {
    let trimmed = body.trim();
    trimmed.parse::<i64>().map_err(|e| {
        ClientError::Parse(format!("expected an integer body, got {trimmed:?}: {e}")).into()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_ok_and_created() {
        assert!(check_response(mock_response(200, "")).await.is_ok());
        assert!(check_response(mock_response(201, "1")).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_other_success_codes_are_failures() {
        let err = check_response(mock_response(204, "")).await.unwrap_err();
        assert!(matches!(
            err.client_errors(),
            [ClientError::ProtocolViolation { status: 204, .. }]
        ));
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(404, r#"{"error_code":404,"message":"Subject Not Found"}"#);
        let err = check_response(resp).await.unwrap_err();
        let server = err.server_error().unwrap();
        assert_eq!(server.error_code, 404);
        assert_eq!(server.message, "Subject Not Found");
        assert!(err.client_errors().is_empty());
    }

    #[tokio::test]
    async fn check_response_malformed_error_body_is_recoverable() {
        let err = check_response(mock_response(500, "<html>oops</html>"))
            .await
            .unwrap_err();
        assert!(err.server_error().is_none());
        match err.client_errors() {
            [ClientError::ProtocolViolation { status, reason }] => {
                assert_eq!(*status, 500);
                assert!(reason.contains("<html>oops</html>"));
            }
            other => panic!("unexpected errors: {other:?}"),
        }
    }

    #[tokio::test]
    async fn read_count_trims_whitespace() {
        assert_eq!(read_count(mock_response(200, "1\n")).await.unwrap(), 1);
        assert_eq!(read_count(mock_response(200, "0")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn read_count_rejects_non_integer() {
        let err = read_count(mock_response(200, "one")).await.unwrap_err();
        assert!(matches!(err.client_errors(), [ClientError::Parse(_)]));
    }

    #[tokio::test]
    async fn read_json_maps_to_decode_error() {
        let err = read_json::<Vec<String>>(mock_response(200, r#"{"not":"a list"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err.client_errors(), [ClientError::Decode(_)]));
    }

    #[tokio::test]
    async fn read_text_is_verbatim() {
        assert_eq!(read_text(mock_response(200, "FULL")).await.unwrap(), "FULL");
    }
}
