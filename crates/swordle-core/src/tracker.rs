//! Reading tracker
//!
//! The `Tracker` ties the streak slots to the streak engine. It is the
//! entry point front ends use:
//!
//! ```ignore
//! let mut tracker = Tracker::open_with_config(&config)?;
//! let day = ReadingDay::local_today();
//!
//! let chapter = tracker.refresh_book_and_chapter(scripture.as_deref());
//! if chapter.is_some() {
//!     tracker.mark_read(&day);
//! }
//! ```

use tracing::{debug, info};

use crate::config::Config;
use crate::engine::{self, MarkOutcome, ReadStatus};
use crate::models::{ReadingDay, Statistics, StreakState};
use crate::storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageResult, StreakStore,
};

/// Streak tracking over a key-value backend
pub struct Tracker<S> {
    store: StreakStore<S>,
}

impl Tracker<SqliteKeyValueStore> {
    /// Open the tracker with a specific configuration
    pub fn open_with_config(config: &Config) -> StorageResult<Self> {
        let backend = SqliteKeyValueStore::open(config)?;
        Ok(Self::new(backend))
    }
}

impl Tracker<MemoryKeyValueStore> {
    /// A tracker that forgets everything when dropped
    pub fn in_memory() -> Self {
        Self::new(MemoryKeyValueStore::new())
    }
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn new(backend: S) -> Self {
        Self {
            store: StreakStore::new(backend),
        }
    }

    /// Current persisted counters
    pub fn state(&self) -> StreakState {
        self.store.load_state()
    }

    /// Whether `day` has already been counted
    pub fn status(&self, day: &ReadingDay) -> ReadStatus {
        engine::read_status(day, &self.state())
    }

    /// Count today's read, at most once per day
    ///
    /// Slots are written one by one; an interruption part-way through can
    /// leave them partially updated.
    pub fn mark_read(&mut self, day: &ReadingDay) -> MarkOutcome {
        let current = self.state();
        let outcome = engine::record_read(day, &current);

        match outcome {
            MarkOutcome::Recorded(next) => {
                self.store.set_total(next.total);
                self.store.set_last_read(day.today());
                self.store.set_streak(next.streak);
                if next.max_streak != current.max_streak {
                    self.store.set_max_streak(next.max_streak);
                }
                info!(
                    "Recorded read for {} (streak {}, total {})",
                    day.date_key(),
                    next.streak,
                    next.total
                );
            }
            MarkOutcome::AlreadyRead => {
                debug!("Already read on {}, nothing to record", day.date_key());
            }
        }

        outcome
    }

    /// Persisted "Book Chapter" (empty when never seen)
    pub fn book_and_chapter(&self) -> String {
        self.store.book_and_chapter()
    }

    /// Fold a freshly fetched scripture reference into the persisted chapter
    ///
    /// The slot is only written when the derived chapter differs from the
    /// stored one. Returns the chapter to offer, if any.
    pub fn refresh_book_and_chapter(&mut self, scripture: Option<&str>) -> Option<String> {
        let persisted = self.store.book_and_chapter();

        if let Some(fresh) = scripture.and_then(engine::book_and_chapter_from_scripture) {
            if fresh != persisted {
                debug!("Daily chapter changed from {:?} to {:?}", persisted, fresh);
                self.store.set_book_and_chapter(fresh);
            }
        }

        engine::resolve_book_and_chapter(scripture, &persisted)
    }

    /// Snapshot for display
    pub fn statistics(&self) -> Statistics {
        Statistics::new(self.state(), self.book_and_chapter())
    }
}
