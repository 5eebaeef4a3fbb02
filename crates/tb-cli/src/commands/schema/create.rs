use tb_client::RegistryClient;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::value_or_from_path;
use crate::output::output_message;

pub async fn run(
    subject: &str,
    definition: &str,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let definition = value_or_from_path(definition)?;
    let id = client.register_schema(subject, &definition).await?;
    output_message(&id, flags.format, || {
        format!("Schema is registered successfully with ID `{}`", id.id)
    })
}
