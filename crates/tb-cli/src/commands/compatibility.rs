#[path = "compatibility/check.rs"]
mod check;

use tb_client::RegistryClient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompatibilityCommands;
use crate::commands::shared::input::require_subject;

/// Handle `tb compatibility`.
pub async fn handle(
    action: &CompatibilityCommands,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompatibilityCommands::Check {
            subject,
            version,
            definition,
        } => {
            check::run(
                require_subject(subject)?,
                version.as_deref(),
                definition,
                client,
                flags,
            )
            .await
        }
    }
}
