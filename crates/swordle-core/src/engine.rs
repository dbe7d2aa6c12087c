//! Streak engine
//!
//! Pure functions deciding how a "mark as read" event changes the streak
//! counters. Nothing here touches storage.
//!
//! Per calendar day a reader is either `NotReadToday` or `ReadToday`. The
//! only transition is `NotReadToday -> ReadToday`, taken once via
//! [`record_read`]. The next day resets the status implicitly because
//! `last_read` no longer equals `today`.

use serde::Serialize;

use crate::models::{ReadingDay, StreakState};

/// Whether today's chapter has already been marked read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadStatus {
    NotReadToday,
    ReadToday,
}

impl ReadStatus {
    pub fn is_read(self) -> bool {
        self == ReadStatus::ReadToday
    }
}

/// Result of a guarded mark-read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The read was counted; carries the new state
    Recorded(StreakState),
    /// Today was already counted; nothing changed
    AlreadyRead,
}

/// Exact date comparison of `last_read` against today
pub fn read_status(day: &ReadingDay, state: &StreakState) -> ReadStatus {
    if state.last_read == Some(day.today()) {
        ReadStatus::ReadToday
    } else {
        ReadStatus::NotReadToday
    }
}

/// Count a read for `day`, unconditionally
///
/// Callers that can be triggered more than once a day should go through
/// [`record_read`] instead.
pub fn mark_read(day: &ReadingDay, state: &StreakState) -> StreakState {
    let total = state.total.saturating_add(1);
    let read_yesterday = state.last_read == Some(day.yesterday());

    let streak = if read_yesterday {
        state.streak.saturating_add(1)
    } else {
        1
    };

    StreakState {
        streak,
        max_streak: state.max_streak.max(streak),
        total,
        last_read: Some(day.today()),
    }
}

/// Count a read for `day` unless one was already counted today
pub fn record_read(day: &ReadingDay, state: &StreakState) -> MarkOutcome {
    match read_status(day, state) {
        ReadStatus::ReadToday => MarkOutcome::AlreadyRead,
        ReadStatus::NotReadToday => MarkOutcome::Recorded(mark_read(day, state)),
    }
}

/// Extract "Book Chapter" from a "Book Chapter:Verse" scripture reference
pub fn book_and_chapter_from_scripture(scripture: &str) -> Option<&str> {
    let book_and_chapter = scripture.split(':').next()?.trim();
    if book_and_chapter.is_empty() {
        None
    } else {
        Some(book_and_chapter)
    }
}

/// Pick the chapter to offer: the fresh scripture when present, else the
/// persisted one
pub fn resolve_book_and_chapter(scripture: Option<&str>, persisted: &str) -> Option<String> {
    if let Some(fresh) = scripture.and_then(book_and_chapter_from_scripture) {
        return Some(fresh.to_string());
    }

    let persisted = persisted.trim();
    if persisted.is_empty() {
        None
    } else {
        Some(persisted.to_string())
    }
}
