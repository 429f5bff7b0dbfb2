//! Tests for the `testing` feature's internal-map accessor

use mock_storage_adapter::prelude::*;
use mock_storage_adapter::storage::testing::{storage_map, with_storage_map};

#[test]
fn test_facade_writes_are_inspectable() {
    let storage = MockStorageAdapter::new();
    storage.initialize_sync(AdapterOptions::named("inspect")).unwrap();
    storage.set_item_as_sync("numbers", &[1, 2, 3]).unwrap();
    storage.set_item_sync("flag", StorageValue::from(false)).unwrap();

    let map = storage_map(&storage);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_index(0).map(|(k, _)| k.as_str()), Some("numbers"));
    assert_eq!(map["flag"], StorageValue::from(false));
}

#[test]
fn test_snapshot_is_detached() {
    let storage = MockStorageAdapter::new();
    storage.set_item_sync("a", StorageValue::from(1)).unwrap();

    let mut snapshot = storage_map(&storage);
    snapshot.clear();

    assert_eq!(storage.size_sync().unwrap(), 1);
}

#[test]
fn test_seeding_through_accessor() {
    let storage = MockStorageAdapter::new();
    let previous = with_storage_map(&storage, |map| {
        map.insert("seed".to_string(), StorageValue::from("x"))
    });
    assert_eq!(previous, None);
    assert_eq!(storage.key_sync(0).unwrap().as_deref(), Some("seed"));
}
