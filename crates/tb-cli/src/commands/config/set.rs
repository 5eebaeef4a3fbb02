use anyhow::Context;
use serde::Serialize;
use tb_client::RegistryClient;
use tb_core::{Config, Property};

use super::config_rows;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::value_or_from_path;
use crate::output::{output_message, output_rows};

#[derive(Debug, Serialize)]
struct PropertySet<'a> {
    subject: &'a str,
    property: Property,
    value: &'a str,
}

pub async fn run(
    subject: &str,
    values: &[String],
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match values {
        [document] => {
            let content = value_or_from_path(document)?;
            let config: Config =
                serde_json::from_str(&content).context("config must be a JSON object")?;
            client.set_config(subject, &config).await?;
            if flags.format == OutputFormat::Table {
                println!("Config is set to the subject `{subject}` as follows,");
            }
            output_rows(&config, flags.format, &["PROPERTY", "VALUE"], || {
                config_rows(&config)
            })
        }
        [property, value] => {
            let property: Property = property.parse()?;
            client.set_property(subject, property, value).await?;
            let response = PropertySet {
                subject,
                property,
                value,
            };
            output_message(&response, flags.format, || {
                format!(
                    "Property `{property}` is set to the subject `{subject}` with value `{value}`"
                )
            })
        }
        _ => anyhow::bail!("expected either a config document or a property and its value"),
    }
}
