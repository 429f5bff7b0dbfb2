//! Test support: direct access to a mock adapter's internal map
//!
//! These helpers bypass the adapter contract, including the deletion latch.
//! They exist so test suites can verify what a storage facade actually wrote.
//! Compiled for this crate's own tests and behind the `testing` feature.

use crate::storage::memory_adapter::MockStorageAdapter;
use crate::storage::value::StorageValue;
use indexmap::IndexMap;

/// Snapshot of the adapter's entries in insertion order
pub fn storage_map(adapter: &MockStorageAdapter) -> IndexMap<String, StorageValue> {
    adapter.with_entries_mut(|entries| entries.clone())
}

/// Run `f` against the adapter's live entry map
pub fn with_storage_map<R>(
    adapter: &MockStorageAdapter,
    f: impl FnOnce(&mut IndexMap<String, StorageValue>) -> R,
) -> R {
    adapter.with_entries_mut(f)
}
