//! swordle Core Library
//!
//! This crate provides the core functionality for swordle, a daily Bible
//! reading tracker: streak counting and the durable slots it is stored in.
//!
//! # Architecture
//!
//! - **Engine**: pure functions computing the next streak state
//! - **Storage**: typed, parse-or-default slots over a key-value backend
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut tracker = Tracker::open_with_config(&config)?;
//! let day = ReadingDay::local_today();
//!
//! if tracker.refresh_book_and_chapter(Some("Genesis 1:1")).is_some() {
//!     tracker.mark_read(&day);
//! }
//! let stats = tracker.statistics();
//! ```
//!
//! # Modules
//!
//! - `tracker`: Streak tracking entry point (main entry point)
//! - `engine`: Mark-read transition and chapter derivation
//! - `models`: Reading day, streak state, statistics
//! - `storage`: Key-value backends and typed slots
//! - `books`: Book index and chapter links
//! - `config`: Application configuration

pub mod books;
pub mod config;
pub mod engine;
pub mod models;
pub mod storage;
pub mod tracker;

pub use books::{book_index, chapter_link};
pub use config::Config;
pub use engine::{MarkOutcome, ReadStatus};
pub use models::{ReadingDay, Statistics, StreakState};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StreakStore,
};
pub use tracker::Tracker;
