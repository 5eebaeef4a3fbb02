//! Schema registration, lookup, fetch and compatibility operations.
//!
//! Definitions are opaque to the client. They are posted verbatim as the
//! request body with `Content-Type: application/json`, since the server
//! expects the definition document itself rather than a wrapper object.

use reqwest::header::CONTENT_TYPE;
use tb_core::{Compatibility, Schema, SchemaId, SchemaTarget, SemVer, VersionSelector};

use crate::http::{check_response, read_bytes, read_json};
use crate::{RegistryClient, RegistryError, segment};

const APPLICATION_JSON: &str = "application/json";

impl RegistryClient {
    /// `POST /subjects/{subject}/versions`: register a new schema.
    ///
    /// The server assigns the ID and semantic version.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects the
    /// definition, or the body lacks a strict integer `id`.
    pub async fn register_schema(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<SchemaId, RegistryError> {
        let path = format!("/subjects/{}/versions", segment(subject));
        let bytes = self.post_definition(&path, definition).await?;
        SchemaId::decode(&bytes).map_err(RegistryError::decode)
    }

    /// `POST /subjects/{subject}/schema/lookup`: the latest schema whose
    /// definition matches.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, nothing matches, or the
    /// body is not a valid schema.
    pub async fn lookup_schema(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Schema, RegistryError> {
        let path = format!("/subjects/{}/schema/lookup", segment(subject));
        let bytes = self.post_definition(&path, definition).await?;
        Schema::decode(&bytes).map_err(RegistryError::decode)
    }

    /// `POST /subjects/{subject}/schema/lookupAll`: every schema whose
    /// definition matches.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails or any element of the
    /// body is not a valid schema.
    pub async fn lookup_all_schemas(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Vec<Schema>, RegistryError> {
        let path = format!("/subjects/{}/schema/lookupAll", segment(subject));
        let bytes = self.post_definition(&path, definition).await?;
        Schema::decode_list(&bytes).map_err(RegistryError::decode)
    }

    /// `GET /schemas/ids/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the ID is unknown, or
    /// the body is not a valid schema.
    pub async fn get_schema_by_id(&self, id: i64) -> Result<Schema, RegistryError> {
        self.get_schema_at(&format!("/schemas/ids/{id}")).await
    }

    /// `GET /subjects/{subject}/versions/{selector}`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, no schema matches the
    /// selector, or the body is not a valid schema.
    pub async fn get_schema(
        &self,
        subject: &str,
        selector: &VersionSelector,
    ) -> Result<Schema, RegistryError> {
        self.get_schema_at(&version_path(subject, selector)).await
    }

    /// Latest schema under `subject`.
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::get_schema`].
    pub async fn get_latest_schema(&self, subject: &str) -> Result<Schema, RegistryError> {
        self.get_schema(subject, &VersionSelector::Latest).await
    }

    /// Latest schema under `subject` with the given major version.
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::get_schema`].
    pub async fn get_schema_by_major_version(
        &self,
        subject: &str,
        major: u64,
    ) -> Result<Schema, RegistryError> {
        self.get_schema(subject, &VersionSelector::Major(major)).await
    }

    /// Schema under `subject` with exactly `version`.
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::get_schema`].
    pub async fn get_schema_by_semver(
        &self,
        subject: &str,
        version: SemVer,
    ) -> Result<Schema, RegistryError> {
        self.get_schema(subject, &VersionSelector::Exact(version)).await
    }

    /// Fetch a schema addressed by a resolved [`SchemaTarget`].
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::get_schema_by_id`] and
    /// [`RegistryClient::get_schema`].
    pub async fn fetch_schema(&self, target: &SchemaTarget) -> Result<Schema, RegistryError> {
        match target {
            SchemaTarget::ById(id) => self.get_schema_by_id(*id).await,
            SchemaTarget::BySubject { subject, selector } => {
                self.get_schema(subject, selector).await
            }
        }
    }

    /// `GET /subjects/{subject}/versions`: every version, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the body is not an
    /// array of strings, or any element breaks the version grammar.
    pub async fn list_versions(&self, subject: &str) -> Result<Vec<SemVer>, RegistryError> {
        let path = format!("/subjects/{}/versions", segment(subject));
        let resp = check_response(self.get(&path).send().await?).await?;
        let versions: Vec<String> = read_json(resp).await?;
        versions
            .iter()
            .map(|v| SemVer::parse(v).map_err(RegistryError::decode))
            .collect()
    }

    /// `POST /compatibility/subjects/{subject}/versions/{selector}`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not a compatibility verdict.
    pub async fn check_compatibility(
        &self,
        subject: &str,
        selector: &VersionSelector,
        definition: &str,
    ) -> Result<Compatibility, RegistryError> {
        let path = format!("/compatibility{}", version_path(subject, selector));
        let bytes = self.post_definition(&path, definition).await?;
        serde_json::from_slice(&bytes).map_err(|e| RegistryError::decode(e.into()))
    }

    /// Compatibility against the latest schema.
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::check_compatibility`].
    pub async fn check_compatibility_with_latest(
        &self,
        subject: &str,
        definition: &str,
    ) -> Result<Compatibility, RegistryError> {
        self.check_compatibility(subject, &VersionSelector::Latest, definition)
            .await
    }

    /// Compatibility against the latest schema of one major version.
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::check_compatibility`].
    pub async fn check_compatibility_with_major_version(
        &self,
        subject: &str,
        major: u64,
        definition: &str,
    ) -> Result<Compatibility, RegistryError> {
        self.check_compatibility(subject, &VersionSelector::Major(major), definition)
            .await
    }

    /// Compatibility against one exact version.
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::check_compatibility`].
    pub async fn check_compatibility_with_semver(
        &self,
        subject: &str,
        version: SemVer,
        definition: &str,
    ) -> Result<Compatibility, RegistryError> {
        self.check_compatibility(subject, &VersionSelector::Exact(version), definition)
            .await
    }

    async fn get_schema_at(&self, path: &str) -> Result<Schema, RegistryError> {
        let resp = check_response(self.get(path).send().await?).await?;
        let bytes = read_bytes(resp).await?;
        Schema::decode(&bytes).map_err(RegistryError::decode)
    }

    async fn post_definition(&self, path: &str, definition: &str) -> Result<Vec<u8>, RegistryError> {
        let request = self
            .post(path)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(definition.to_string());
        let resp = check_response(request.send().await?).await?;
        read_bytes(resp).await
    }
}

fn version_path(subject: &str, selector: &VersionSelector) -> String {
    format!("/subjects/{}/versions/{selector}", segment(subject))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn version_path_uses_selector_segment() {
        assert_eq!(
            version_path("person", &VersionSelector::Latest),
            "/subjects/person/versions/latest"
        );
        assert_eq!(
            version_path("person", &VersionSelector::Major(2)),
            "/subjects/person/versions/v2"
        );
        assert_eq!(
            version_path("person", &VersionSelector::Exact(SemVer::new(1, 2, 1))),
            "/subjects/person/versions/v1.2.1"
        );
    }
}
