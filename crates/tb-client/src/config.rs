//! Subject config operations.

use reqwest::header::CONTENT_TYPE;
use tb_core::{Config, Property};

use crate::http::{check_response, read_count, read_json, read_text};
use crate::{RegistryClient, RegistryError, segment};

impl RegistryClient {
    /// `PUT /config/{subject}` with the whole config as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not an integer.
    pub async fn set_config(&self, subject: &str, config: &Config) -> Result<i64, RegistryError> {
        let resp = check_response(self.put(&config_path(subject)).json(config).send().await?).await?;
        read_count(resp).await
    }

    /// `GET /config/{subject}`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not a config document.
    pub async fn get_config(&self, subject: &str) -> Result<Config, RegistryError> {
        let resp = check_response(self.get(&config_path(subject)).send().await?).await?;
        read_json(resp).await
    }

    /// `DELETE /config/{subject}`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not an integer.
    pub async fn delete_config(&self, subject: &str) -> Result<i64, RegistryError> {
        let resp = check_response(self.delete(&config_path(subject)).send().await?).await?;
        read_count(resp).await
    }

    /// `PUT /config/{subject}/properties/{property}` with a plain-text value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not an integer.
    pub async fn set_property(
        &self,
        subject: &str,
        property: Property,
        value: &str,
    ) -> Result<i64, RegistryError> {
        let request = self
            .put(&property_path(subject, property))
            .header(CONTENT_TYPE, "text/plain")
            .body(value.to_string());
        let resp = check_response(request.send().await?).await?;
        read_count(resp).await
    }

    /// `GET /config/{subject}/properties/{property}`: the raw value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails or the server rejects it.
    pub async fn get_property(
        &self,
        subject: &str,
        property: Property,
    ) -> Result<String, RegistryError> {
        let resp = check_response(self.get(&property_path(subject, property)).send().await?).await?;
        read_text(resp).await
    }

    /// `DELETE /config/{subject}/properties/{property}`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the server rejects it,
    /// or the body is not an integer.
    pub async fn delete_property(
        &self,
        subject: &str,
        property: Property,
    ) -> Result<i64, RegistryError> {
        let resp =
            check_response(self.delete(&property_path(subject, property)).send().await?).await?;
        read_count(resp).await
    }
}

fn config_path(subject: &str) -> String {
    format!("/config/{}", segment(subject))
}

fn property_path(subject: &str, property: Property) -> String {
    format!("/config/{}/properties/{property}", segment(subject))
}
