use tb_client::RegistryClient;

use super::SubjectChange;
use crate::cli::GlobalFlags;
use crate::output::output_message;

pub async fn run(name: &str, client: &RegistryClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = client.delete_subject(name).await?;
    let change = SubjectChange {
        subject: name,
        rows,
    };
    output_message(&change, flags.format, || {
        if rows == 0 {
            format!("Subject `{name}` was not deleted.")
        } else {
            format!("Subject `{name}` is deleted.")
        }
    })
}
