use super::*;
use crate::util::storage::MemoryStorage;

fn session() -> Session {
    Session {
        token: "tok-1".to_owned(),
        email: "user@example.com".to_owned(),
        username: Some("user".to_owned()),
    }
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn save_then_load_round_trips() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session());
    assert_eq!(store.load(), Some(session()));
}

#[test]
fn save_without_username_loads_without_username() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    let mut s = session();
    s.username = None;
    store.save(&s);
    assert_eq!(store.load(), Some(s));
}

#[test]
fn save_drops_stale_username() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session());

    let mut s = session();
    s.username = None;
    store.save(&s);
    assert_eq!(store.load().unwrap().username, None);
}

// =============================================================
// All-or-nothing invariant
// =============================================================

#[test]
fn empty_storage_is_logged_out() {
    let storage = MemoryStorage::new();
    assert_eq!(SessionStore::new(&storage).load(), None);
}

#[test]
fn flag_without_token_is_logged_out() {
    let storage = MemoryStorage::new();
    storage.set(KEY_IS_LOGGED_IN, "true");
    storage.set(KEY_EMAIL, "user@example.com");
    assert_eq!(SessionStore::new(&storage).load(), None);
}

#[test]
fn token_without_flag_is_logged_out() {
    let storage = MemoryStorage::new();
    storage.set(KEY_TOKEN, "tok-1");
    storage.set(KEY_EMAIL, "user@example.com");
    assert_eq!(SessionStore::new(&storage).load(), None);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_wipes_all_storage() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session());
    storage.set("darkMode", "true");

    store.clear();
    assert_eq!(store.load(), None);
    assert!(storage.is_empty());
}
