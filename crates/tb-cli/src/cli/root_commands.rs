use clap::Subcommand;

use crate::cli::subcommands::{
    CompatibilityCommands, ConfigCommands, SchemaCommands, SubjectCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Manage subjects.
    Subject {
        #[command(subcommand)]
        action: SubjectCommands,
    },
    /// Manage the config of a subject.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Manage and look up schemas under a subject.
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Check schema compatibility.
    Compatibility {
        #[command(subcommand)]
        action: CompatibilityCommands,
    },
}
