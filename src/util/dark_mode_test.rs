use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// read_preference
// =============================================================

#[test]
fn stored_true_wins() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "true");
    assert!(read_preference(&storage));
}

#[test]
fn stored_false_wins() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "false");
    assert!(!read_preference(&storage));
}

#[test]
fn no_preference_falls_back_to_system_default() {
    // Native tests have no media query; the fallback is light mode.
    let storage = MemoryStorage::new();
    assert!(!read_preference(&storage));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_and_persists() {
    let storage = MemoryStorage::new();
    assert!(toggle(&storage, false));
    assert_eq!(storage.get(STORAGE_KEY), Some("true".to_owned()));

    assert!(!toggle(&storage, true));
    assert_eq!(storage.get(STORAGE_KEY), Some("false".to_owned()));
}

#[test]
fn toggle_round_trips_through_read_preference() {
    let storage = MemoryStorage::new();
    let on = toggle(&storage, false);
    assert_eq!(read_preference(&storage), on);
}
