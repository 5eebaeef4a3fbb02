use tb_client::RegistryClient;

use crate::cli::GlobalFlags;
use crate::output::output_rows;

pub async fn run(name: &str, client: &RegistryClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let subject = client.get_subject(name).await?;
    output_rows(&subject, flags.format, &["SUBJECT", "DESCRIPTION"], || {
        vec![vec![
            subject.name.clone(),
            subject.description.clone().unwrap_or_default(),
        ]]
    })
}
