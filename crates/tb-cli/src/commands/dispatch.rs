use tb_client::RegistryClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: &Commands,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Subject { action } => commands::subject::handle(action, client, flags).await,
        Commands::Config { action } => commands::config::handle(action, client, flags).await,
        Commands::Schema { action } => commands::schema::handle(action, client, flags).await,
        Commands::Compatibility { action } => {
            commands::compatibility::handle(action, client, flags).await
        }
    }
}
