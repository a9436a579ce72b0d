mod commands;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use tlctl::cli::{Cli, Commands, ConfigCommands};
use tlctl::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), &cli.command)?;

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;

    match cli.command {
        Commands::Play(args) => commands::play::handle(&config, &args),
        Commands::Script {
            script,
            controls,
            trace,
        } => commands::script::handle(&config, &controls, &script, trace),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "tlctl", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Install the log subscriber.
///
/// With `--log-file`, logs go to that file at `RUST_LOG` (default
/// `tlctl=debug`). Otherwise warnings go to stderr, except for `play`,
/// which owns the terminal and stays silent.
fn init_logging(log_file: Option<&Path>, command: &Commands) -> Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tlctl=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if !matches!(command, Commands::Play(_)) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
