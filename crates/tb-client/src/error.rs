//! Registry error types.
//!
//! A failed call is reported as one [`RegistryError`] that carries at most one
//! [`ServerError`] (decoded from a non-success response) and any number of
//! local [`ClientError`]s. The aggregate can only be built with at least one
//! cause.

use std::fmt;

use serde::{Deserialize, Serialize};
use tb_core::CoreError;
use thiserror::Error;

/// Error body returned by the server on any non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ServerError {
    pub error_code: i32,
    pub message: String,
}

/// Failures that originate on the client side of a call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Caller input rejected before any request was sent.
    #[error("{0}")]
    Validation(CoreError),

    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response whose JSON body broke the entity contract.
    #[error("decode error: {0}")]
    Decode(CoreError),

    /// A success response whose plain-text body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A non-success response whose body was not a valid error document.
    #[error("protocol violation (status {status}): {reason}")]
    ProtocolViolation { status: u16, reason: String },
}

/// Aggregate failure of one registry call.
#[derive(Debug)]
pub struct RegistryError {
    server: Option<ServerError>,
    client: Vec<ClientError>,
}

impl RegistryError {
    /// Combine a server error and local errors, or `None` if both are empty.
    #[must_use]
    pub fn from_parts(server: Option<ServerError>, client: Vec<ClientError>) -> Option<Self> {
        if server.is_none() && client.is_empty() {
            return None;
        }
        Some(Self { server, client })
    }

    #[must_use]
    pub const fn server_error(&self) -> Option<&ServerError> {
        self.server.as_ref()
    }

    #[must_use]
    pub fn client_errors(&self) -> &[ClientError] {
        &self.client
    }

    /// Server-reported error code, if the server answered.
    #[must_use]
    pub fn status_code(&self) -> Option<i32> {
        self.server.as_ref().map(|e| e.error_code)
    }

    /// Display messages: server message first, then each local error in
    /// occurrence order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.server
            .iter()
            .map(|e| e.message.clone())
            .chain(self.client.iter().map(ToString::to_string))
            .collect()
    }

    /// True when the call was rejected locally before reaching the network.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.server.is_none()
            && self
                .client
                .iter()
                .all(|e| matches!(e, ClientError::Validation(_)))
    }

    /// Wrap a caller-input failure.
    #[must_use]
    pub fn validation(err: CoreError) -> Self {
        ClientError::Validation(err).into()
    }

    /// Wrap a response decoding failure.
    #[must_use]
    pub fn decode(err: CoreError) -> Self {
        ClientError::Decode(err).into()
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.server {
            Some(server) => Some(server),
            None => self
                .client
                .first()
                .map(|e| e as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<ServerError> for RegistryError {
    fn from(err: ServerError) -> Self {
        Self {
            server: Some(err),
            client: Vec::new(),
        }
    }
}

impl From<ClientError> for RegistryError {
    fn from(err: ClientError) -> Self {
        Self {
            server: None,
            client: vec![err],
        }
    }
}

/// Caller input errors surfaced through `?` before a request is built.
impl From<CoreError> for RegistryError {
    fn from(err: CoreError) -> Self {
        Self::validation(err)
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err).into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn not_found() -> ServerError {
        ServerError {
            error_code: 404,
            message: "Subject Not Found".to_string(),
        }
    }

    #[test]
    fn empty_aggregate_cannot_be_built() {
        assert!(RegistryError::from_parts(None, Vec::new()).is_none());
    }

    #[test]
    fn messages_put_server_first() {
        let err = RegistryError::from_parts(
            Some(not_found()),
            vec![
                ClientError::Parse("bad count".to_string()),
                ClientError::Validation(CoreError::MissingSelector),
            ],
        )
        .unwrap();

        assert_eq!(
            err.messages(),
            vec![
                "Subject Not Found".to_string(),
                "parse error: bad count".to_string(),
                "id or subject should be specified".to_string(),
            ]
        );
        assert_eq!(
            err.to_string(),
            "Subject Not Found\nparse error: bad count\nid or subject should be specified"
        );
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn validation_only_errors_are_flagged() {
        let err = RegistryError::validation(CoreError::InvalidFormat("x".to_string()));
        assert!(err.is_validation());
        assert!(err.server_error().is_none());

        let err = RegistryError::from(not_found());
        assert!(!err.is_validation());

        let err = RegistryError::decode(CoreError::MissingField("id"));
        assert!(!err.is_validation());
    }

    #[test]
    fn source_prefers_server_error() {
        use std::error::Error as _;

        let err = RegistryError::from(not_found());
        assert_eq!(err.source().unwrap().to_string(), "Subject Not Found");

        let err = RegistryError::from(ClientError::Parse("x".to_string()));
        assert_eq!(err.source().unwrap().to_string(), "parse error: x");
    }

    #[test]
    fn server_error_wire_shape() {
        let err: ServerError =
            serde_json::from_str(r#"{"error_code":404,"message":"Subject Not Found"}"#).unwrap();
        assert_eq!(err, not_found());
    }
}
