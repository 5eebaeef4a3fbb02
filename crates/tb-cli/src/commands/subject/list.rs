use tb_client::RegistryClient;

use crate::cli::GlobalFlags;
use crate::output::output_rows;

pub async fn run(client: &RegistryClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let subjects = client.list_subjects().await?;
    output_rows(&subjects, flags.format, &["SUBJECT"], || {
        subjects.iter().map(|name| vec![name.clone()]).collect()
    })
}
