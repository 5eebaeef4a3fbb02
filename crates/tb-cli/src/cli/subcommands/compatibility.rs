use clap::Subcommand;

/// Compatibility commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompatibilityCommands {
    /// Check whether a definition is compatible with an existing schema.
    Check {
        #[arg(long)]
        subject: String,
        /// Major (`v1`) or semantic (`v1.0.0`) version; latest when omitted
        #[arg(long)]
        version: Option<String>,
        #[arg(value_name = "@PATH|DEFINITION")]
        definition: String,
    },
}
