//! Typed streak slots
//!
//! `StreakStore` wraps a [`KeyValueStore`] and exposes named slots with
//! parse-or-default reads. Values are stored as JSON text. Reads never fail:
//! a missing slot, a value that does not decode as the requested type, or a
//! backend error all yield the caller's default. Writes never report errors
//! to the caller; backend failures are logged and dropped.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{StreakState, DATE_FORMAT};
use crate::storage::kv::KeyValueStore;

/// Slot names
pub mod keys {
    pub const STREAK: &str = "swordle-streak";
    pub const MAX_STREAK: &str = "swordle-maxStreak";
    pub const TOTAL: &str = "swordle-total";
    pub const LAST_READ: &str = "swordle-lastRead";
    pub const BOOK_AND_CHAPTER: &str = "swordle-bookAndChapter";
}

/// Typed access to the persisted streak slots
pub struct StreakStore<S> {
    backend: S,
}

impl<S: KeyValueStore> StreakStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read a slot, falling back to `default` when it is missing or malformed
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!("Failed to read slot {}: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                debug!("Ignoring malformed value {:?} in slot {}: {}", raw, key, e);
                default
            }
        }
    }

    /// Overwrite a slot
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to encode value for slot {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.backend.set_raw(key, &raw) {
            warn!("Failed to write slot {}: {}", key, e);
        }
    }

    pub fn streak(&self) -> u32 {
        self.get(keys::STREAK, 0)
    }

    pub fn set_streak(&mut self, streak: u32) {
        self.set(keys::STREAK, &streak);
    }

    pub fn max_streak(&self) -> u32 {
        self.get(keys::MAX_STREAK, 0)
    }

    pub fn set_max_streak(&mut self, max_streak: u32) {
        self.set(keys::MAX_STREAK, &max_streak);
    }

    pub fn total(&self) -> u32 {
        self.get(keys::TOTAL, 0)
    }

    pub fn set_total(&mut self, total: u32) {
        self.set(keys::TOTAL, &total);
    }

    /// Last read date; an empty or unparseable value means "never"
    pub fn last_read(&self) -> Option<NaiveDate> {
        let raw: String = self.get(keys::LAST_READ, String::new());
        if raw.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                debug!("Ignoring malformed last read date {:?}: {}", raw, e);
                None
            }
        }
    }

    pub fn set_last_read(&mut self, date: NaiveDate) {
        let formatted = date.format(DATE_FORMAT).to_string();
        self.set(keys::LAST_READ, formatted.as_str());
    }

    pub fn book_and_chapter(&self) -> String {
        self.get(keys::BOOK_AND_CHAPTER, String::new())
    }

    pub fn set_book_and_chapter(&mut self, book_and_chapter: &str) {
        self.set(keys::BOOK_AND_CHAPTER, book_and_chapter);
    }

    /// Read all four engine slots
    pub fn load_state(&self) -> StreakState {
        StreakState {
            streak: self.streak(),
            max_streak: self.max_streak(),
            total: self.total(),
            last_read: self.last_read(),
        }
    }
}
