use tb_client::{RegistryClient, RegistryError};
use tb_core::{Compatibility, VersionSelector};

use crate::cli::GlobalFlags;
use crate::commands::shared::input::value_or_from_path;
use crate::output::output_message;

pub async fn run(
    subject: &str,
    version: Option<&str>,
    definition: &str,
    client: &RegistryClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let selector = VersionSelector::parse(version).map_err(RegistryError::validation)?;
    let definition = value_or_from_path(definition)?;

    let verdict = client
        .check_compatibility(subject, &selector, &definition)
        .await?;
    output_message(&verdict, flags.format, || verdict_line(verdict).to_string())
}

const fn verdict_line(verdict: Compatibility) -> &'static str {
    if verdict.is_compatible {
        "Compatible"
    } else {
        "Incompatible"
    }
}

#[cfg(test)]
mod tests {
    use tb_core::Compatibility;

    use super::verdict_line;

    #[test]
    fn verdict_lines() {
        assert_eq!(
            verdict_line(Compatibility {
                is_compatible: true
            }),
            "Compatible"
        );
        assert_eq!(
            verdict_line(Compatibility {
                is_compatible: false
            }),
            "Incompatible"
        );
    }
}
