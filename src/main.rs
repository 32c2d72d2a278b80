use clap::Parser;
use eyre::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;

use cli::{Cli, Commands};
use drh_target::config::{Config, LogLevel};

/// Open `<data_local_dir>/drh/logs/drh.log` for appending
fn open_log_file() -> Result<(PathBuf, fs::File)> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("drh")
        .join("logs");

    fs::create_dir_all(&log_dir).context(format!("Failed to create log directory {}", log_dir.display()))?;

    let log_file = log_dir.join("drh.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .context(format!("Failed to open log file {}", log_file.display()))?;

    Ok((log_file, file))
}

fn setup_logging(log_level: &LogLevel, verbose: bool) {
    // RUST_LOG env var takes precedence, then --verbose, then config log_level
    let mut builder = env_logger::Builder::new();
    let from_env = std::env::var("RUST_LOG").is_ok();

    if from_env {
        builder.parse_default_env();
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log_level.to_level_filter());
    }

    // stdout carries the message stream, so logs go to a file or, failing that, stderr
    match open_log_file() {
        Ok((log_file, file)) => {
            builder.target(env_logger::Target::Pipe(Box::new(file))).init();
            info!("Logging initialized, writing to: {}", log_file.display());
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr).init();
            warn!("{:#}; logging to stderr", e);
        }
    }

    info!(
        "Log level: {} (from {})",
        if verbose && !from_env { "debug" } else { log_level.as_filter() },
        if from_env {
            "RUST_LOG env"
        } else if verbose {
            "--verbose"
        } else {
            "config"
        }
    );
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Schema {
            stream,
            schema,
            key_property,
            table,
        } => commands::schema::run(&stream, schema.as_deref(), key_property, table.as_deref(), &config),
        Commands::Record { stream, record } => commands::record::run(&stream, record.as_deref()),
        Commands::State { value } => commands::state::run(value.as_deref()),
        Commands::Schemas => commands::schemas::run(&config),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config.log_level, cli.verbose);

    info!("Starting drh with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
