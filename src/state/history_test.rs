use super::*;
use crate::util::storage::MemoryStorage;

fn entry(name: &str, url: &str) -> HistoryEntry {
    HistoryEntry {
        name: name.to_owned(),
        url: url.to_owned(),
        icon: "fas fa-robot".to_owned(),
        timestamp: "2025-06-01T12:00:00.000Z".to_owned(),
    }
}

// =============================================================
// push_entry
// =============================================================

#[test]
fn newest_entry_is_first() {
    let entries = push_entry(vec![entry("A", "https://a")], entry("B", "https://b"));
    assert_eq!(entries[0].name, "B");
    assert_eq!(entries[1].name, "A");
}

#[test]
fn duplicate_url_replaces_older_entry() {
    let entries = push_entry(
        vec![entry("A", "https://a"), entry("B", "https://b")],
        entry("A again", "https://a"),
    );
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "A again");
    assert_eq!(entries[1].name, "B");
}

#[test]
fn eleven_distinct_clicks_keep_the_ten_most_recent() {
    let mut entries = Vec::new();
    for i in 0..11 {
        entries = push_entry(entries, entry(&format!("tool-{i}"), &format!("https://t/{i}")));
    }
    assert_eq!(entries.len(), MAX_ENTRIES);
    assert_eq!(entries[0].name, "tool-10");
    // tool-0 was the oldest and is gone.
    assert!(entries.iter().all(|e| e.name != "tool-0"));
}

#[test]
fn dedup_does_not_shrink_below_cap() {
    let mut entries = Vec::new();
    for i in 0..10 {
        entries = push_entry(entries, entry(&format!("tool-{i}"), &format!("https://t/{i}")));
    }
    // Re-click an existing tool: still 10 entries, re-clicked one in front.
    entries = push_entry(entries, entry("tool-3", "https://t/3"));
    assert_eq!(entries.len(), MAX_ENTRIES);
    assert_eq!(entries[0].url, "https://t/3");
}

// =============================================================
// HistoryStore
// =============================================================

#[test]
fn empty_storage_lists_nothing() {
    let storage = MemoryStorage::new();
    assert!(HistoryStore::new(&storage).list().is_empty());
}

#[test]
fn record_then_list_round_trips() {
    let storage = MemoryStorage::new();
    let store = HistoryStore::new(&storage);
    store.record(entry("ChatGPT", "https://chat.openai.com"));
    store.record(entry("Claude", "https://claude.ai"));

    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Claude");
    assert_eq!(listed[1].name, "ChatGPT");
}

#[test]
fn corrupt_stored_json_reads_as_empty() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "not json {");
    assert!(HistoryStore::new(&storage).list().is_empty());
}

#[test]
fn clear_removes_the_stored_list() {
    let storage = MemoryStorage::new();
    let store = HistoryStore::new(&storage);
    store.record(entry("A", "https://a"));
    store.clear();
    assert!(store.list().is_empty());
    assert_eq!(storage.get(STORAGE_KEY), None);
}

#[test]
fn store_never_grows_beyond_cap() {
    let storage = MemoryStorage::new();
    let store = HistoryStore::new(&storage);
    for i in 0..25 {
        store.record(entry(&format!("tool-{i}"), &format!("https://t/{i}")));
    }
    assert_eq!(store.list().len(), MAX_ENTRIES);
}
