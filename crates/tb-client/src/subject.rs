//! Subject operations.

use reqwest::header::CONTENT_TYPE;
use tb_core::Subject;

use crate::http::{check_response, read_count, read_json};
use crate::{RegistryClient, RegistryError, segment};

const TEXT_PLAIN: &str = "text/plain";

impl RegistryClient {
    /// `POST /subjects/{name}` with an optional plain-text description.
    ///
    /// Returns the affected-row count reported by the server.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not an integer.
    pub async fn create_subject(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<i64, RegistryError> {
        let request = with_description(self.post(&subject_path(name)), description);
        let resp = check_response(request.send().await?).await?;
        read_count(resp).await
    }

    /// `GET /subjects/{name}`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not a subject document.
    pub async fn get_subject(&self, name: &str) -> Result<Subject, RegistryError> {
        let resp = check_response(self.get(&subject_path(name)).send().await?).await?;
        read_json(resp).await
    }

    /// `GET /subjects`: names of every subject.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not a JSON array of strings.
    pub async fn list_subjects(&self) -> Result<Vec<String>, RegistryError> {
        let resp = check_response(self.get("/subjects").send().await?).await?;
        read_json(resp).await
    }

    /// `PUT /subjects/{name}` replacing the description.
    ///
    /// Returns the number of updated rows, normally 1.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not an integer.
    pub async fn update_description(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<i64, RegistryError> {
        let request = with_description(self.put(&subject_path(name)), description);
        let resp = check_response(request.send().await?).await?;
        read_count(resp).await
    }

    /// `DELETE /subjects/{name}`.
    ///
    /// Returns the number of deleted rows, normally 1.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not an integer.
    pub async fn delete_subject(&self, name: &str) -> Result<i64, RegistryError> {
        let resp = check_response(self.delete(&subject_path(name)).send().await?).await?;
        read_count(resp).await
    }
}

fn subject_path(name: &str) -> String {
    format!("/subjects/{}", segment(name))
}

/// An empty description sends no body at all.
fn with_description(
    request: reqwest::RequestBuilder,
    description: Option<&str>,
) -> reqwest::RequestBuilder {
    let request = request.header(CONTENT_TYPE, TEXT_PLAIN);
    match description.filter(|d| !d.is_empty()) {
        Some(description) => request.body(description.to_string()),
        None => request,
    }
}
