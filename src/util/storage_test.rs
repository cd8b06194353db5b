use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::new();
    storage.set("token", "abc123");
    assert_eq!(storage.get("token"), Some("abc123".to_owned()));
}

#[test]
fn memory_storage_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("nope"), None);
}

#[test]
fn memory_storage_set_replaces_previous_value() {
    let storage = MemoryStorage::new();
    storage.set("k", "one");
    storage.set("k", "two");
    assert_eq!(storage.get("k"), Some("two".to_owned()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_deletes_only_that_key() {
    let storage = MemoryStorage::new();
    storage.set("a", "1");
    storage.set("b", "2");
    storage.remove("a");
    assert_eq!(storage.get("a"), None);
    assert_eq!(storage.get("b"), Some("2".to_owned()));
}

#[test]
fn memory_storage_clear_all_empties_everything() {
    let storage = MemoryStorage::new();
    storage.set("a", "1");
    storage.set("b", "2");
    storage.clear_all();
    assert!(storage.is_empty());
}

// =============================================================
// BrowserStorage (no browser in native tests)
// =============================================================

#[test]
fn browser_storage_degrades_to_none_without_a_browser() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
}
