//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use swordle_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "scripture_url": config.scripture_url,
                    "fetch_timeout_secs": config.fetch_timeout_secs,
                    "log_file": config.log_file
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir:           {}", config.data_dir.display());
            println!("  scripture_url:      {}", config.scripture_url);
            println!("  fetch_timeout_secs: {}", config.fetch_timeout_secs);
            println!(
                "  log_file:           {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    apply(&mut config, &key, &value)?;

    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    config
        .save_to_path(&save_path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

/// Apply a single `key = value` change
fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data_dir" => {
            config.data_dir = value.into();
        }
        "scripture_url" => {
            if value.is_empty() {
                bail!("scripture_url cannot be empty");
            }
            config.scripture_url = value.to_string();
        }
        "fetch_timeout_secs" => {
            config.fetch_timeout_secs = value
                .parse()
                .context("Invalid value for fetch_timeout_secs. Use a whole number of seconds.")?;
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.into())
            };
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, scripture_url, fetch_timeout_secs, log_file",
                key
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_known_keys() {
        let mut config = Config::default();

        apply(&mut config, "data_dir", "/tmp/swordle").unwrap();
        apply(&mut config, "scripture_url", "http://localhost/dt").unwrap();
        apply(&mut config, "fetch_timeout_secs", "3").unwrap();
        apply(&mut config, "log_file", "/tmp/swordle.log").unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/swordle"));
        assert_eq!(config.scripture_url, "http://localhost/dt");
        assert_eq!(config.fetch_timeout_secs, 3);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/swordle.log")));

        apply(&mut config, "log_file", "none").unwrap();
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut config = Config::default();

        assert!(apply(&mut config, "fetch_timeout_secs", "soon").is_err());
        assert!(apply(&mut config, "scripture_url", "").is_err());

        let err = apply(&mut config, "sync_url", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }
}
