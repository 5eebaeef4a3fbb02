use serde::Serialize;
use tb_client::RegistryClient;
use tb_core::Property;

use super::config_rows;
use crate::cli::GlobalFlags;
use crate::output::{output_message, output_rows};

#[derive(Debug, Serialize)]
struct PropertyValue<'a> {
    property: Property,
    value: &'a str,
}

pub async fn run(
    subject: &str,
    property: Option<Property>,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(property) = property {
        let value = client.get_property(subject, property).await?;
        let response = PropertyValue {
            property,
            value: &value,
        };
        return output_message(&response, flags.format, || value.clone());
    }

    let config = client.get_config(subject).await?;
    output_rows(&config, flags.format, &["PROPERTY", "VALUE"], || {
        config_rows(&config)
    })
}
