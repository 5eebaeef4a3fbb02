use tb_client::RegistryClient;

use super::SchemaMeta;
use crate::cli::GlobalFlags;
use crate::commands::shared::input::value_or_from_path;
use crate::output::output_rows;

pub async fn run(
    subject: &str,
    all: bool,
    definition: &str,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let definition = value_or_from_path(definition)?;
    let schemas = if all {
        client.lookup_all_schemas(subject, &definition).await?
    } else {
        vec![client.lookup_schema(subject, &definition).await?]
    };

    let metas = schemas.iter().map(SchemaMeta::from).collect::<Vec<_>>();
    output_rows(&metas, flags.format, &["ID", "SUBJECT", "VERSION"], || {
        metas
            .iter()
            .map(|meta| {
                vec![
                    meta.id.to_string(),
                    meta.subject.to_string(),
                    meta.version.to_string(),
                ]
            })
            .collect()
    })
}
