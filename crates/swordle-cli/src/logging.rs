//! Logging setup
//!
//! Logging is off unless SWORDLE_LOG is set to a level (e.g. `debug`).
//! Output goes to `config.log_file` when configured, otherwise stderr.

use std::fs::OpenOptions;

use tracing::info;
use tracing_subscriber::EnvFilter;

use swordle_core::Config;

/// Environment variable holding the log level
const LOG_ENV: &str = "SWORDLE_LOG";

/// Initialize logging if SWORDLE_LOG is set
pub fn init(config: &Config) {
    let Ok(log_level) = std::env::var(LOG_ENV) else {
        return;
    };

    let env_filter = EnvFilter::new(filter_directives(&log_level));

    match config.log_file {
        Some(ref log_path) => {
            let log_file = match OpenOptions::new().create(true).append(true).open(log_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
                    return;
                }
            };

            // Ignore error if already initialized
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(log_file)
                .try_init();

            info!("Logging to {:?}", log_path);
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

fn filter_directives(log_level: &str) -> String {
    let level = log_level.trim();
    let level = if level.is_empty() { "info" } else { level };
    format!("swordle_core={},swordle_cli={}", level, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(
            filter_directives("debug"),
            "swordle_core=debug,swordle_cli=debug"
        );
        assert_eq!(filter_directives(" "), "swordle_core=info,swordle_cli=info");
    }
}
