//! Click history for outbound tool links.
//!
//! Newest-first, capped at [`MAX_ENTRIES`], deduplicated by url: clicking a
//! tool again moves it to the front instead of piling up duplicates. Stored
//! as a JSON array under one key; anything unparseable reads back as empty.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::KeyValueBackend;

pub const STORAGE_KEY: &str = "toolClickHistory";

/// Upper bound on stored entries; the oldest is evicted past this.
pub const MAX_ENTRIES: usize = 10;

/// One recorded click on an outbound tool link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    pub url: String,
    pub icon: String,
    /// ISO 8601 instant of the click.
    pub timestamp: String,
}

/// Prepend `entry`, dropping any older entry with the same url and
/// truncating to [`MAX_ENTRIES`].
pub fn push_entry(mut entries: Vec<HistoryEntry>, entry: HistoryEntry) -> Vec<HistoryEntry> {
    entries.retain(|e| e.url != entry.url);
    entries.insert(0, entry);
    entries.truncate(MAX_ENTRIES);
    entries
}

/// Typed persistence service for the click-history list.
#[derive(Clone, Copy, Debug)]
pub struct HistoryStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> HistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the stored list, newest first. Missing or corrupt data reads as
    /// empty rather than erroring.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.backend
            .get(STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Record a click and persist the updated list.
    pub fn record(&self, entry: HistoryEntry) {
        let entries = push_entry(self.list(), entry);
        if let Ok(raw) = serde_json::to_string(&entries) {
            self.backend.set(STORAGE_KEY, &raw);
        }
    }

    /// The "clear history" action: drop the stored list entirely.
    pub fn clear(&self) {
        self.backend.remove(STORAGE_KEY);
    }
}
