//! Daily scripture lookup
//!
//! Fetches the day's scripture reference (e.g. "Genesis 1:1") from the
//! configured service. Any failure degrades to "no scripture"; the caller then
//! falls back to the last persisted chapter.

use std::time::Duration;

use anyhow::{bail, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use swordle_core::{Config, ReadingDay};

/// Record returned by the daily scripture service
///
/// The service also sends `comment`, `dailyText`, `date` and `success`; they
/// are not used. Only an absent or blank `scripture` counts as no data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailyScripture {
    /// "Book Chapter:Verse"
    pub scripture: String,
    /// Verse text
    pub text: String,
}

/// Fetch today's scripture (async)
///
/// Returns `None` on any failure (graceful degradation).
pub async fn fetch_scripture(config: &Config, day: &ReadingDay) -> Option<DailyScripture> {
    let url = scripture_url(&config.scripture_url, day);
    match fetch_scripture_inner(&url, config.fetch_timeout_secs).await {
        Ok(daily) => {
            debug!("Daily scripture for {}: {}", day.date_key(), daily.scripture);
            Some(daily)
        }
        Err(e) => {
            warn!("No daily scripture from {}: {:#}", url, e);
            None
        }
    }
}

/// Inner fetch function that can fail
async fn fetch_scripture_inner(url: &str, timeout_secs: u64) -> Result<DailyScripture> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("swordle/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        bail!("HTTP {}", response.status());
    }

    let body = response.text().await?;
    parse_scripture(&body)
}

/// Lookup URL for a day: `{base}/{YYYY-MM-DD}`
fn scripture_url(base: &str, day: &ReadingDay) -> String {
    format!("{}/{}", base.trim_end_matches('/'), day.date_key())
}

/// Decode a response body, rejecting answers without a scripture reference
fn parse_scripture(body: &str) -> Result<DailyScripture> {
    let mut data: DailyScripture = serde_json::from_str(body)?;

    data.scripture = data.scripture.trim().to_string();
    if data.scripture.is_empty() {
        bail!("response has no scripture");
    }

    Ok(data)
}
