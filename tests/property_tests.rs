//! Property-based tests for the mock storage adapter
//!
//! Properties tested:
//! - Round-trip with copy independence
//! - Insertion-order key iteration
//! - Idempotent removal
//! - Deletion latch finality

use mock_storage_adapter::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_value() -> impl Strategy<Value = StorageValue> {
    let leaf = prop_oneof![
        Just(StorageValue::Null),
        any::<bool>().prop_map(StorageValue::from),
        (-1.0e9f64..1.0e9).prop_map(StorageValue::from),
        "[a-z0-9]{0,12}".prop_map(StorageValue::from),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(StorageValue::from),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(StorageValue::from),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|fields| fields.into_iter().collect::<StorageValue>()),
        ]
    })
}

fn distinct_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..24).prop_map(|keys| {
        let mut seen = HashSet::new();
        keys.into_iter().filter(|k| seen.insert(k.clone())).collect()
    })
}

/// Change `value` in place, reaching into containers rather than replacing them
fn mutate_in_place(value: &mut StorageValue) {
    if let Some(items) = value.as_list_mut() {
        items.push(StorageValue::from("appended"));
    } else if let Some(fields) = value.as_map_mut() {
        fields.insert("_appended".to_string(), StorageValue::Null);
    } else if let StorageValue::Blob(bytes) = value {
        bytes.push(0xff);
    } else {
        *value = StorageValue::List(Vec::new());
    }
}

proptest! {
    #[test]
    fn test_round_trip_is_independent_copy(key in "[a-z]{1,10}", value in arb_value()) {
        let storage = MockStorageAdapter::new();
        let mut original = value.clone();
        storage.set_item_sync(&key, value.clone()).unwrap();

        // mutating the caller's value after storing never reaches the stored copy
        mutate_in_place(&mut original);
        prop_assert_ne!(&original, &value);
        prop_assert_eq!(storage.get_item_sync(&key).unwrap(), Some(value.clone()));

        // nor does mutating a value handed out by get_item
        let mut loaded = storage.get_item_sync(&key).unwrap().unwrap();
        prop_assert_eq!(&loaded, &value);
        mutate_in_place(&mut loaded);
        prop_assert_ne!(&loaded, &value);
        prop_assert_eq!(storage.get_item_sync(&key).unwrap(), Some(value));
    }
}

proptest! {
    #[test]
    fn test_keys_follow_first_insertion(keys in distinct_keys(), moved in any::<prop::sample::Index>()) {
        let storage = MockStorageAdapter::new();
        for key in &keys {
            storage.set_item_sync(key, StorageValue::Null).unwrap();
        }

        prop_assert_eq!(storage.size_sync().unwrap(), keys.len());
        for (i, key) in keys.iter().enumerate() {
            let at = storage.key_sync(i).unwrap();
            prop_assert_eq!(at.as_ref(), Some(key));
        }
        prop_assert_eq!(storage.key_sync(keys.len()).unwrap(), None);

        // remove + re-insert moves a key to the end
        let target = moved.get(&keys).clone();
        storage.remove_item_sync(&target).unwrap();
        storage.set_item_sync(&target, StorageValue::from(1)).unwrap();
        prop_assert_eq!(storage.key_sync(keys.len() - 1).unwrap(), Some(target));
    }
}

proptest! {
    #[test]
    fn test_remove_absent_is_idempotent(keys in distinct_keys(), absent in "[A-Z]{1,8}") {
        let storage = MockStorageAdapter::new();
        for key in &keys {
            storage.set_item_sync(key, StorageValue::from(key.as_str())).unwrap();
        }
        for _ in 0..3 {
            storage.remove_item_sync(&absent).unwrap();
            prop_assert_eq!(storage.size_sync().unwrap(), keys.len());
        }
    }
}

proptest! {
    #[test]
    fn test_latch_is_final(keys in distinct_keys(), attempts in 1usize..20) {
        let storage = MockStorageAdapter::new();
        for key in &keys {
            storage.set_item_sync(key, StorageValue::Null).unwrap();
        }
        storage.delete_storage_sync().unwrap();

        for i in 0..attempts {
            let key = &keys[i % keys.len()];
            prop_assert_eq!(storage.get_item_sync(key), Err(StorageError::Deleted));
            prop_assert_eq!(storage.set_item_sync(key, StorageValue::Null), Err(StorageError::Deleted));
            prop_assert_eq!(storage.key_sync(i), Err(StorageError::Deleted));
            prop_assert_eq!(storage.size_sync(), Err(StorageError::Deleted));
        }
        prop_assert!(storage.is_deleted());
    }
}
