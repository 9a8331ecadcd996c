use clap::Parser;
use logsift::config::Config;
use logsift::report::{write_command_results, write_normalized};
use logsift::source::{ingest, Source};
use logsift::Collection;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logsift", about = "Classify mixed-format log lines and query them")]
struct Cli {
    /// Log files to ingest, in order. Reads stdin when none are given.
    files: Vec<PathBuf>,

    /// Command to run against the ingested entries (repeatable).
    #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
    commands: Vec<String>,

    /// Print every entry as `[YYYY-MM-DD HH:MM:SS] LEVEL: message` instead of running commands.
    #[arg(long)]
    normalize: bool,

    /// Configuration file to use instead of ~/.config/logsift/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (RUST_LOG overrides the filter).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logsift::install_panic_hook();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("logsift debug log started");
    }

    let config = Config::load(cli.config.as_deref())?;

    let mut collection = Collection::new();
    let ingested = ingest(&mut collection, &Source::from_paths(&cli.files), &config.ingest)?;
    tracing::debug!(ingested, "ingestion finished");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.normalize {
        write_normalized(&mut out, &collection)?;
    } else {
        let commands = if cli.commands.is_empty() {
            &config.query.default_commands
        } else {
            &cli.commands
        };
        write_command_results(&mut out, &collection, commands, config.query.echo_commands)?;
    }

    out.flush()?;
    Ok(())
}
