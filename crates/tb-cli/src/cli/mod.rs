use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tb` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tb",
    version,
    about = "typebook client CLI",
    long_about = "tb is a typebook CLI to interact with a typebook server."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Address of the typebook server (overrides TYPEBOOK_URL and config files)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            url: self.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{
        CompatibilityCommands, ConfigCommands, SchemaCommands, SubjectCommands,
    };
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "tb",
            "--url",
            "registry:8888",
            "--format",
            "json",
            "--verbose",
            "subject",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.url.as_deref(), Some("registry:8888"));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Subject {
                action: SubjectCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tb", "subject", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["tb", "subject", "list"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.url.is_none());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tb", "--format", "xml", "subject", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subject_create_takes_description() {
        let cli = Cli::try_parse_from(["tb", "subject", "create", "person", "-d", "people"])
            .expect("cli should parse");

        let Commands::Subject {
            action: SubjectCommands::Create { name, description },
        } = cli.command
        else {
            panic!("expected subject create");
        };
        assert_eq!(name, "person");
        assert_eq!(description.as_deref(), Some("people"));
    }

    #[test]
    fn schema_get_defaults() {
        let cli = Cli::try_parse_from(["tb", "schema", "get", "--subject", "person"])
            .expect("cli should parse");

        let Commands::Schema {
            action: SchemaCommands::Get(args),
        } = cli.command
        else {
            panic!("expected schema get");
        };
        assert_eq!(args.id, None);
        assert_eq!(args.subject.as_deref(), Some("person"));
        assert_eq!(args.version, None);
    }

    #[test]
    fn schema_lookup_all_flag() {
        let cli = Cli::try_parse_from([
            "tb", "schema", "lookup", "--subject", "person", "--all", "@person.avsc",
        ])
        .expect("cli should parse");

        let Commands::Schema {
            action: SchemaCommands::Lookup { subject, all, definition },
        } = cli.command
        else {
            panic!("expected schema lookup");
        };
        assert_eq!(subject, "person");
        assert!(all);
        assert_eq!(definition, "@person.avsc");
    }

    #[test]
    fn config_set_accepts_one_or_two_values() {
        let whole = Cli::try_parse_from([
            "tb",
            "config",
            "set",
            "--subject",
            "person",
            r#"{"compatibility":"full"}"#,
        ])
        .expect("cli should parse");
        let Commands::Config {
            action: ConfigCommands::Set { values, .. },
        } = whole.command
        else {
            panic!("expected config set");
        };
        assert_eq!(values.len(), 1);

        let property = Cli::try_parse_from([
            "tb",
            "config",
            "set",
            "--subject",
            "person",
            "compatibility",
            "backward",
        ])
        .expect("cli should parse");
        let Commands::Config {
            action: ConfigCommands::Set { values, .. },
        } = property.command
        else {
            panic!("expected config set");
        };
        assert_eq!(values, vec!["compatibility", "backward"]);

        let too_many = Cli::try_parse_from([
            "tb", "config", "set", "--subject", "person", "a", "b", "c",
        ]);
        assert!(too_many.is_err());
    }

    #[test]
    fn compatibility_check_requires_subject() {
        let missing = Cli::try_parse_from(["tb", "compatibility", "check", "{}"]);
        assert!(missing.is_err());

        let cli = Cli::try_parse_from([
            "tb",
            "compatibility",
            "check",
            "--subject",
            "person",
            "--version",
            "v1",
            "{}",
        ])
        .expect("cli should parse");
        let Commands::Compatibility {
            action: CompatibilityCommands::Check { version, .. },
        } = cli.command
        else {
            panic!("expected compatibility check");
        };
        assert_eq!(version.as_deref(), Some("v1"));
    }
}
