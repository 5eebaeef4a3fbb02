use clap::Subcommand;

/// Subject commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubjectCommands {
    /// Create a subject. Schemas evolve under a subject.
    Create {
        name: String,
        /// Description for the subject
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show a subject and its description.
    Get { name: String },
    /// List all subject names.
    List,
    /// Update the description of a subject.
    Update {
        name: String,
        /// New description (omitted clears it)
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a subject. Fails while schemas remain under it.
    Delete { name: String },
}
