//! In-memory mock storage adapter
//!
//! `MockStorageAdapter` backs the adapter contract with an insertion-ordered map
//! owned by the instance. It behaves as a two-state machine:
//!
//! - **Live**: the initial state; every operation succeeds.
//! - **Deleted**: entered through `delete_storage`. Terminal. Every guarded
//!   operation fails with [`StorageError::Deleted`].
//!
//! The deferred forms sleep for a simulated latency before running the
//! operation. The latch is checked when the timer fires, so a storage deleted
//! while an operation is pending rejects that operation.

use crate::error::{Result, StorageError, StorageResult};
use crate::storage::adapter::{AdapterOptions, StorageAdapterSync};
use crate::storage::constants::DEFAULT_STORAGE_NAME;
use crate::storage::delay::{Delay, MockConfig};
use crate::storage::value::StorageValue;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(feature = "async")]
use crate::storage::adapter::StorageAdapter;

const UNNAMED: &str = "<uninitialized>";

#[derive(Debug, Default)]
struct AdapterState {
    name: Option<String>,
    deleted: bool,
    entries: IndexMap<String, StorageValue>,
}

impl AdapterState {
    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

/// In-memory storage adapter with a deletion latch and simulated latency
///
/// Clones are handles to the same storage; separately constructed adapters
/// never share data.
#[derive(Debug, Clone)]
pub struct MockStorageAdapter {
    state: Arc<RwLock<AdapterState>>,
    delay: Delay,
}

impl Default for MockStorageAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStorageAdapter {
    /// Create an empty, unnamed adapter with the default latency range
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    /// Create an empty, unnamed adapter
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(AdapterState::default())),
            delay: config.delay,
        }
    }

    /// Name assigned by `initialize`, if it has run
    pub fn name(&self) -> Option<String> {
        self.read_state().name.clone()
    }

    /// Whether the deletion latch is set
    pub fn is_deleted(&self) -> bool {
        self.read_state().deleted
    }

    /// Latency applied by the deferred forms
    pub fn delay(&self) -> Delay {
        self.delay
    }

    /// Store any serializable value under `key`
    pub fn set_item_as_sync<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let value = StorageValue::from_serializable(value)?;
        self.set_item_sync(key, value)?;
        Ok(())
    }

    /// Load the value under `key` as `T`
    pub fn get_item_as_sync<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_item_sync(key)? {
            Some(value) => Ok(Some(value.deserialize_into()?)),
            None => Ok(None),
        }
    }

    // Every critical section leaves the map consistent, so a poisoned lock
    // still guards valid data.
    fn read_state(&self) -> RwLockReadGuard<'_, AdapterState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AdapterState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn live(&self, operation: &str) -> StorageResult<RwLockReadGuard<'_, AdapterState>> {
        let state = self.read_state();
        if state.deleted {
            tracing::debug!(storage = state.label(), operation, "rejected: storage deleted");
            return Err(StorageError::Deleted);
        }
        Ok(state)
    }

    fn live_mut(&self, operation: &str) -> StorageResult<RwLockWriteGuard<'_, AdapterState>> {
        let state = self.write_state();
        if state.deleted {
            tracing::debug!(storage = state.label(), operation, "rejected: storage deleted");
            return Err(StorageError::Deleted);
        }
        Ok(state)
    }

    /// Direct access to the entry map, bypassing the latch
    #[cfg(any(test, feature = "testing"))]
    pub(crate) fn with_entries_mut<R>(
        &self,
        f: impl FnOnce(&mut IndexMap<String, StorageValue>) -> R,
    ) -> R {
        f(&mut self.write_state().entries)
    }
}

impl StorageAdapterSync for MockStorageAdapter {
    fn initialize_sync(&self, options: AdapterOptions) -> StorageResult<()> {
        let name = options
            .name
            .unwrap_or_else(|| DEFAULT_STORAGE_NAME.to_string());
        tracing::debug!(storage = %name, "initialized mock storage");
        self.write_state().name = Some(name);
        Ok(())
    }

    fn get_item_sync(&self, key: &str) -> StorageResult<Option<StorageValue>> {
        let state = self.live("get_item")?;
        tracing::trace!(storage = state.label(), key, "get_item");
        Ok(state.entries.get(key).cloned())
    }

    fn set_item_sync(&self, key: &str, value: StorageValue) -> StorageResult<()> {
        let mut state = self.live_mut("set_item")?;
        tracing::trace!(storage = state.label(), key, kind = value.kind(), "set_item");
        state.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item_sync(&self, key: &str) -> StorageResult<()> {
        let mut state = self.live_mut("remove_item")?;
        tracing::trace!(storage = state.label(), key, "remove_item");
        state.entries.shift_remove(key);
        Ok(())
    }

    fn clear_sync(&self) -> StorageResult<()> {
        let mut state = self.live_mut("clear")?;
        tracing::debug!(storage = state.label(), entries = state.entries.len(), "clear");
        state.entries.clear();
        Ok(())
    }

    fn size_sync(&self) -> StorageResult<usize> {
        Ok(self.live("size")?.entries.len())
    }

    fn key_sync(&self, index: usize) -> StorageResult<Option<String>> {
        let state = self.live("key")?;
        Ok(state.entries.get_index(index).map(|(key, _)| key.clone()))
    }

    fn delete_storage_sync(&self) -> StorageResult<()> {
        let mut state = self.write_state();
        if state.deleted {
            return Ok(());
        }
        tracing::debug!(storage = state.label(), entries = state.entries.len(), "delete_storage");
        state.entries.clear();
        state.deleted = true;
        Ok(())
    }
}

#[cfg(feature = "async")]
impl MockStorageAdapter {
    /// Run `operation` after a simulated latency
    ///
    /// The adapter's configured delay is used unless `delay` overrides it. When
    /// the timer fires and the storage has been deleted in the meantime, the
    /// result is [`StorageError::Deleted`] and `operation` never runs.
    pub async fn wait<T, F>(&self, delay: Option<Delay>, operation: F) -> StorageResult<T>
    where
        F: FnOnce() -> StorageResult<T>,
    {
        self.sleep(delay).await;
        if self.is_deleted() {
            tracing::debug!("deferred operation settled after delete_storage");
            return Err(StorageError::Deleted);
        }
        operation()
    }

    async fn sleep(&self, delay: Option<Delay>) {
        let duration = delay.unwrap_or(self.delay).sample();
        tracing::trace!(delay_ms = duration.as_millis() as u64, "simulated latency");
        tokio::time::sleep(duration).await;
    }

    /// Store any serializable value under `key`
    pub async fn set_item_as<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let value = StorageValue::from_serializable(value)?;
        self.set_item(key, value).await?;
        Ok(())
    }

    /// Load the value under `key` as `T`
    pub async fn get_item_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_item(key).await? {
            Some(value) => Ok(Some(value.deserialize_into()?)),
            None => Ok(None),
        }
    }
}

#[cfg(feature = "async")]
impl StorageAdapter for MockStorageAdapter {
    async fn initialize(&self, options: AdapterOptions) -> StorageResult<()> {
        self.sleep(None).await;
        self.initialize_sync(options)
    }

    async fn get_item(&self, key: &str) -> StorageResult<Option<StorageValue>> {
        self.wait(None, || self.get_item_sync(key)).await
    }

    async fn set_item(&self, key: &str, value: StorageValue) -> StorageResult<()> {
        self.wait(None, || self.set_item_sync(key, value)).await
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.wait(None, || self.remove_item_sync(key)).await
    }

    async fn clear(&self) -> StorageResult<()> {
        self.wait(None, || self.clear_sync()).await
    }

    async fn size(&self) -> StorageResult<usize> {
        self.wait(None, || self.size_sync()).await
    }

    async fn key(&self, index: usize) -> StorageResult<Option<String>> {
        self.wait(None, || self.key_sync(index)).await
    }

    async fn delete_storage(&self) -> StorageResult<()> {
        self.sleep(None).await;
        self.delete_storage_sync()
    }
}
