use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    assert_eq!(storage.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set("k", "one");
    storage.set("k", "two");
    assert_eq!(storage.get("k").as_deref(), Some("two"));
}

#[test]
fn memory_storage_remove_clears_key() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    storage.remove("k");
    assert!(storage.get("k").is_none());
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("absent");
    assert!(storage.is_empty());
}

#[test]
fn borrowed_storage_delegates() {
    let storage = MemoryStorage::new();
    let by_ref = &storage;
    by_ref.set("k", "v");
    assert_eq!(storage.get("k").as_deref(), Some("v"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_browser() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert!(storage.get("k").is_none());
    storage.remove("k");
}
