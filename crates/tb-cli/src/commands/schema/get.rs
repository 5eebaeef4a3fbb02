use tb_client::{RegistryClient, RegistryError};
use tb_core::{Schema, resolve_target};

use crate::cli::subcommands::SchemaGetArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

pub async fn run(
    args: &SchemaGetArgs,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = resolve_target(args.id, args.subject.as_deref(), args.version.as_deref())
        .map_err(RegistryError::validation)?;
    tracing::debug!(?target, "resolved schema target");

    let schema = client.fetch_schema(&target).await?;
    if flags.format == OutputFormat::Table {
        println!("{}", pretty_definition(&schema));
        return Ok(());
    }
    output(&schema, flags.format)
}

/// The definition re-indented when it is JSON, verbatim otherwise.
fn pretty_definition(schema: &Schema) -> String {
    serde_json::from_str::<serde_json::Value>(&schema.definition)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| schema.definition.clone())
}
