use clap::Parser;
use tb_client::RegistryError;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        for message in error_messages(&error) {
            eprintln!("tb error: {message}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = bootstrap::load_config(&flags)?;
    let client = bootstrap::build_client(&config)?;

    commands::dispatch::dispatch(&cli.command, &client, &flags).await
}

/// Every message carried by `error`, server message first for registry
/// failures.
fn error_messages(error: &anyhow::Error) -> Vec<String> {
    match error.downcast_ref::<RegistryError>() {
        Some(registry) => registry.messages(),
        None => vec![format!("{error:#}")],
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TYPEBOOK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
