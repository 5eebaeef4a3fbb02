use tb_client::RegistryClient;

use crate::cli::GlobalFlags;
use crate::output::output_rows;

pub async fn run(subject: &str, client: &RegistryClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let versions = client.list_versions(subject).await?;
    output_rows(&versions, flags.format, &["VERSION"], || {
        versions.iter().map(|v| vec![v.to_string()]).collect()
    })
}
