//! Data models for swordle
//!
//! - `ReadingDay` - the calendar day a decision is made on (and the day before it)
//! - `StreakState` - the four counters the streak engine updates
//! - `Statistics` - everything the front end shows about a reader

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used for persisted dates and the scripture lookup
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The day a read decision is made on
///
/// `yesterday` is always derived from `today`, so the two can never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingDay {
    today: NaiveDate,
    yesterday: NaiveDate,
}

impl ReadingDay {
    /// Build a reading day from the given calendar date
    pub fn new(today: NaiveDate) -> Self {
        // Only NaiveDate::MIN has no predecessor
        let yesterday = today.pred_opt().unwrap_or(today);
        Self { today, yesterday }
    }

    /// The current day in the local time zone
    pub fn local_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Parse a `YYYY-MM-DD` date
    pub fn parse(date: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map(Self::new)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn yesterday(&self) -> NaiveDate {
        self.yesterday
    }

    /// `today` formatted as `YYYY-MM-DD`
    pub fn date_key(&self) -> String {
        self.today.format(DATE_FORMAT).to_string()
    }
}

/// Persisted streak counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive days read, ending at `last_read`
    pub streak: u32,
    /// Highest streak ever reached
    pub max_streak: u32,
    /// Number of days a chapter was marked read
    pub total: u32,
    /// Last day a chapter was marked read
    pub last_read: Option<NaiveDate>,
}

/// Snapshot of a reader's progress, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub streak: u32,
    pub max_streak: u32,
    pub total: u32,
    pub last_read: Option<NaiveDate>,
    /// Last known "Book Chapter" reference (empty when never seen)
    pub book_and_chapter: String,
}

impl Statistics {
    pub fn new(state: StreakState, book_and_chapter: String) -> Self {
        Self {
            streak: state.streak,
            max_streak: state.max_streak,
            total: state.total,
            last_read: state.last_read,
            book_and_chapter,
        }
    }
}
