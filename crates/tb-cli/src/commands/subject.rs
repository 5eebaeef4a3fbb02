#[path = "subject/create.rs"]
mod create;
#[path = "subject/delete.rs"]
mod delete;
#[path = "subject/get.rs"]
mod get;
#[path = "subject/list.rs"]
mod list;
#[path = "subject/update.rs"]
mod update;

use serde::Serialize;
use tb_client::RegistryClient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubjectCommands;

/// Affected-row count reported by a subject mutation.
#[derive(Debug, Serialize)]
struct SubjectChange<'a> {
    subject: &'a str,
    rows: i64,
}

/// Handle `tb subject`.
pub async fn handle(
    action: &SubjectCommands,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubjectCommands::Create { name, description } => {
            create::run(name, description.as_deref(), client, flags).await
        }
        SubjectCommands::Get { name } => get::run(name, client, flags).await,
        SubjectCommands::List => list::run(client, flags).await,
        SubjectCommands::Update { name, description } => {
            update::run(name, description.as_deref(), client, flags).await
        }
        SubjectCommands::Delete { name } => delete::run(name, client, flags).await,
    }
}
