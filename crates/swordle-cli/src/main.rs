//! swordle CLI
//!
//! Command-line interface for swordle - daily Bible reading streaks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use swordle_core::{Config, ReadingDay, Tracker};

mod commands;
mod logging;
mod output;
mod scripture;

use commands::Session;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "swordle")]
#[command(about = "swordle - read a chapter a day and keep your streak")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat this day (YYYY-MM-DD) as today
    #[arg(long, global = true, value_name = "DATE", value_parser = parse_day)]
    date: Option<ReadingDay>,

    /// Don't fetch the daily scripture; use the last known chapter
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's chapter and whether it was read (default)
    Today,
    /// Mark today's chapter as read
    Read {
        /// Open the chapter in the browser
        #[arg(short, long)]
        open: bool,
    },
    /// Show streak statistics
    #[command(alias = "statistics")]
    Stats,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, scripture_url, fetch_timeout_secs, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn parse_day(value: &str) -> Result<ReadingDay, String> {
    ReadingDay::parse(value).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the tracker
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    logging::init(&config);

    let mut tracker = Tracker::open_with_config(&config).map_err(|e| {
        if let Some(hint) = e.recovery_suggestion() {
            output.message(hint);
        }
        anyhow::Error::new(e).context("Failed to open streak database")
    })?;

    let session = Session {
        config,
        day: cli.date.unwrap_or_else(ReadingDay::local_today),
        offline: cli.offline,
    };

    match cli.command.unwrap_or(Commands::Today) {
        Commands::Today => commands::today::show(&mut tracker, &session, &output).await,
        Commands::Read { open } => {
            commands::read::mark(&mut tracker, &session, open, &output).await
        }
        Commands::Stats => commands::stats::show(&tracker, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}
