use serde::Serialize;
use tb_client::RegistryClient;
use tb_core::Property;

use crate::cli::GlobalFlags;
use crate::output::output_message;

#[derive(Debug, Serialize)]
struct ConfigDeleted<'a> {
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<Property>,
    rows: i64,
}

pub async fn run(
    subject: &str,
    property: Option<Property>,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let rows = match property {
        Some(property) => client.delete_property(subject, property).await?,
        None => client.delete_config(subject).await?,
    };

    let response = ConfigDeleted {
        subject,
        property,
        rows,
    };
    output_message(&response, flags.format, || match property {
        Some(property) => {
            format!("Config `{property}` of the subject `{subject}` is deleted successfully.")
        }
        None => format!("Config of the subject `{subject}` is deleted successfully."),
    })
}
