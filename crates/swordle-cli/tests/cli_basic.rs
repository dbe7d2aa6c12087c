//! Basic CLI end-to-end tests.
//!
//! Each test runs the built `swordle` binary against its own temporary data
//! directory, in offline mode so no network is needed.

use std::path::Path;
use std::process::Command;

use swordle_core::{Config, Tracker};
use tempfile::TempDir;

/// Run the CLI with an isolated config and data dir; returns (stdout, stderr, code)
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_swordle"))
        .args(args)
        .env("SWORDLE_CONFIG", home.join("config.toml"))
        .env("SWORDLE_DATA_DIR", home.join("data"))
        .env_remove("SWORDLE_SCRIPTURE_URL")
        .env_remove("SWORDLE_FETCH_TIMEOUT")
        .env_remove("SWORDLE_LOG")
        .env_remove("SWORDLE_LOG_FILE")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Store a known chapter, as if an earlier run had fetched it
fn seed_chapter(home: &Path, scripture: &str) {
    let config = Config {
        data_dir: home.join("data"),
        ..Config::default()
    };
    let mut tracker = Tracker::open_with_config(&config).unwrap();
    tracker.refresh_book_and_chapter(Some(scripture));
}

fn stats_json(home: &Path) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(home, &["stats", "--json"]);
    assert_eq!(code, 0, "stats failed: {}", stderr);
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn test_stats_fresh_install() {
    let home = TempDir::new().unwrap();

    let stats = stats_json(home.path());
    assert_eq!(stats["streak"], 0);
    assert_eq!(stats["max_streak"], 0);
    assert_eq!(stats["total"], 0);
    assert!(stats["last_read"].is_null());
}

#[test]
fn test_read_without_chapter_fails() {
    let home = TempDir::new().unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["read", "--offline", "--date", "2024-01-10"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("No chapter available"));
}

#[test]
fn test_read_builds_streak_and_counts_once_per_day() {
    let home = TempDir::new().unwrap();
    seed_chapter(home.path(), "Genesis 1:1");

    for date in ["2024-01-09", "2024-01-10", "2024-01-10"] {
        let (_, stderr, code) =
            run_cli(home.path(), &["read", "--offline", "--quiet", "--date", date]);
        assert_eq!(code, 0, "read failed: {}", stderr);
    }

    let stats = stats_json(home.path());
    assert_eq!(stats["streak"], 2);
    assert_eq!(stats["max_streak"], 2);
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["last_read"], "2024-01-10");
    assert_eq!(stats["book_and_chapter"], "Genesis 1");
}

#[test]
fn test_read_json_reports_repeat() {
    let home = TempDir::new().unwrap();
    seed_chapter(home.path(), "Psalms 23:1");

    let args = ["read", "--offline", "--json", "--date", "2024-01-10"];
    let (first, _, _) = run_cli(home.path(), &args);
    let (second, _, _) = run_cli(home.path(), &args);

    let first: serde_json::Value = serde_json::from_str(&first).unwrap();
    let second: serde_json::Value = serde_json::from_str(&second).unwrap();

    assert_eq!(first["recorded"], true);
    assert_eq!(second["recorded"], false);
    assert_eq!(second["statistics"]["total"], 1);
    assert!(first["link"].as_str().unwrap().contains("bible=19023001"));
}

#[test]
fn test_today_offline() {
    let home = TempDir::new().unwrap();
    seed_chapter(home.path(), "John 3:16");

    let (stdout, _, code) = run_cli(
        home.path(),
        &["today", "--offline", "--json", "--date", "2024-01-10"],
    );
    assert_eq!(code, 0);

    let today: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(today["date"], "2024-01-10");
    assert_eq!(today["book_and_chapter"], "John 3");
    assert_eq!(today["status"], "not_read_today");
}

#[test]
fn test_invalid_date_rejected() {
    let home = TempDir::new().unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["stats", "--date", "10/01/2024"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("YYYY-MM-DD"));
}

#[test]
fn test_config_set_and_show() {
    let home = TempDir::new().unwrap();

    let (_, stderr, code) = run_cli(
        home.path(),
        &["config", "set", "fetch_timeout_secs", "4"],
    );
    assert_eq!(code, 0, "config set failed: {}", stderr);
    assert!(home.path().join("config.toml").exists());

    let (stdout, _, code) = run_cli(home.path(), &["config", "show", "--json"]);
    assert_eq!(code, 0);
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["fetch_timeout_secs"], 4);
}

#[test]
fn test_config_set_unknown_key() {
    let home = TempDir::new().unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "sync_url", "x"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown configuration key"));
}
