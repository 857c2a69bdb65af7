use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let store = MemoryStorage::new();
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
}

#[test]
fn memory_storage_missing_key_is_none() {
    assert_eq!(MemoryStorage::new().get_item("missing"), None);
}

#[test]
fn set_item_overwrites() {
    let store = MemoryStorage::with_items([("k", "old")]);
    store.set_item("k", "new").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("new"));
}

#[test]
fn clear_drops_everything() {
    let store = MemoryStorage::with_items([("a", "1"), ("b", "2")]);
    store.clear();
    assert_eq!(store.get_item("a"), None);
    assert_eq!(store.get_item("b"), None);
}

#[test]
fn reference_delegates_to_store() {
    fn write(store: impl KeyValueStore) {
        store.set_item("k", "v").unwrap();
    }
    let store = MemoryStorage::new();
    write(&store);
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
}

#[test]
fn storage_error_names_key() {
    let err = StorageError { key: "userId".into(), message: "QuotaExceededError".into() };
    assert_eq!(err.to_string(), "storage write failed for 'userId': QuotaExceededError");
}
