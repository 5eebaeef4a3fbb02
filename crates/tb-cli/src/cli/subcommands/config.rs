use clap::Subcommand;

/// Subject config commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the config of a subject, or one property of it.
    Get {
        #[arg(long)]
        subject: String,
        property: Option<String>,
    },
    /// Set the whole config (`@path` or JSON), or one property (`<property> <value>`).
    Set {
        #[arg(long)]
        subject: String,
        #[arg(required = true, num_args = 1..=2, value_name = "@PATH|JSON|PROPERTY VALUE")]
        values: Vec<String>,
    },
    /// Delete the config of a subject, or one property of it.
    Delete {
        #[arg(long)]
        subject: String,
        property: Option<String>,
    },
}
