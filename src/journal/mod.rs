//! Journal Module
//!
//! The core of the service: the authoritative entry store with undoable
//! deletion, change notification, a cached search layer, statistics, and
//! validation.

mod cache;
mod clock;
mod entry;
mod import;
mod search;
mod stats;
mod storage;
mod store;
mod validate;


// Re-export public types
pub use cache::LruCache;
pub use clock::{Clock, SystemClock};
pub use entry::{Entry, EntryDraft, EntryId, EntryPatch};
pub use search::SearchEngine;
pub use stats::JournalStats;
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use store::{JournalEvent, JournalStore, SubscriberId};
pub use validate::{
    validate_entry, CONTENT_MAX_LEN, CONTENT_MIN_LEN, TOPIC_MAX_LEN, TOPIC_MIN_LEN,
};

#[cfg(test)]
pub(crate) use clock::testing;
