#[path = "config/delete.rs"]
mod delete;
#[path = "config/get.rs"]
mod get;
#[path = "config/set.rs"]
mod set;

use tb_client::RegistryClient;
use tb_core::{Config, Property};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConfigCommands;
use crate::commands::shared::input::require_subject;

/// Handle `tb config`.
pub async fn handle(
    action: &ConfigCommands,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Get { subject, property } => {
            let property = parse_property(property.as_deref())?;
            get::run(require_subject(subject)?, property, client, flags).await
        }
        ConfigCommands::Set { subject, values } => {
            set::run(require_subject(subject)?, values, client, flags).await
        }
        ConfigCommands::Delete { subject, property } => {
            let property = parse_property(property.as_deref())?;
            delete::run(require_subject(subject)?, property, client, flags).await
        }
    }
}

fn parse_property(raw: Option<&str>) -> anyhow::Result<Option<Property>> {
    raw.map(str::parse::<Property>)
        .transpose()
        .map_err(anyhow::Error::from)
}

/// `PROPERTY | VALUE` rows for every known property.
fn config_rows(config: &Config) -> Vec<Vec<String>> {
    Property::ALL
        .iter()
        .map(|property| vec![property.to_string(), config.get(*property).to_string()])
        .collect()
}
