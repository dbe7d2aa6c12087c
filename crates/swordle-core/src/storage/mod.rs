//! Storage layer
//!
//! Durable named slots for the streak counters.
//!
//! ## Layers
//!
//! - **`KeyValueStore`**: raw string get/set, implemented for SQLite and memory
//! - **`StreakStore`**: typed parse-or-default slots on top of any backend
//!
//! Slots are written independently; there is no transaction spanning several
//! keys.

pub mod error;
pub mod kv;
pub mod schema;
pub mod slots;

pub use error::{StorageError, StorageResult};
pub use kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use schema::{init_schema, needs_init, SCHEMA_VERSION};
pub use slots::{keys, StreakStore};
