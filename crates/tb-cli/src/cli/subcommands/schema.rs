use clap::{Args, Subcommand};

/// Schema commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SchemaCommands {
    /// Register a new schema; the server assigns its ID and version.
    Create {
        #[arg(long)]
        subject: String,
        /// Definition, or `@path` to read it from a file
        #[arg(value_name = "@PATH|DEFINITION")]
        definition: String,
    },
    /// Retrieve a schema by ID, or by subject and version.
    Get(SchemaGetArgs),
    /// List every version under a subject.
    Versions {
        #[arg(long)]
        subject: String,
    },
    /// Look up ID and version of schemas matching a definition.
    Lookup {
        #[arg(long)]
        subject: String,
        /// Show every matching schema instead of the latest one
        #[arg(long)]
        all: bool,
        #[arg(value_name = "@PATH|DEFINITION")]
        definition: String,
    },
}

/// Arguments for `tb schema get`. `--id` takes precedence over `--subject`.
#[derive(Clone, Debug, Args)]
pub struct SchemaGetArgs {
    #[arg(long)]
    pub id: Option<i64>,
    #[arg(long)]
    pub subject: Option<String>,
    /// Major (`v1`) or semantic (`v1.0.0`) version; latest when omitted
    #[arg(long)]
    pub version: Option<String>,
}
