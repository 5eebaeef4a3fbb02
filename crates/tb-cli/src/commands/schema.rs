#[path = "schema/create.rs"]
mod create;
#[path = "schema/get.rs"]
mod get;
#[path = "schema/lookup.rs"]
mod lookup;
#[path = "schema/versions.rs"]
mod versions;

use serde::Serialize;
use tb_client::RegistryClient;
use tb_core::{Schema, SemVer};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SchemaCommands;
use crate::commands::shared::input::require_subject;

/// Identity of a schema without its definition.
#[derive(Debug, Serialize)]
struct SchemaMeta<'a> {
    id: i64,
    subject: &'a str,
    version: SemVer,
}

impl<'a> From<&'a Schema> for SchemaMeta<'a> {
    fn from(schema: &'a Schema) -> Self {
        Self {
            id: schema.id,
            subject: &schema.subject,
            version: schema.version,
        }
    }
}

/// Handle `tb schema`.
pub async fn handle(
    action: &SchemaCommands,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SchemaCommands::Create {
            subject,
            definition,
        } => create::run(require_subject(subject)?, definition, client, flags).await,
        SchemaCommands::Get(args) => get::run(args, client, flags).await,
        SchemaCommands::Versions { subject } => {
            versions::run(require_subject(subject)?, client, flags).await
        }
        SchemaCommands::Lookup {
            subject,
            all,
            definition,
        } => lookup::run(require_subject(subject)?, *all, definition, client, flags).await,
    }
}
