use tb_client::RegistryClient;

use super::SubjectChange;
use crate::cli::GlobalFlags;
use crate::output::output_message;

pub async fn run(
    name: &str,
    description: Option<&str>,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let rows = client.update_description(name, description).await?;
    let change = SubjectChange {
        subject: name,
        rows,
    };
    output_message(&change, flags.format, || {
        if rows == 0 {
            format!("Subject `{name}` was not updated.")
        } else {
            format!("The description for subject `{name}` is updated.")
        }
    })
}
