//! Storage adapter traits and types
//!
//! These are the narrow plugin contracts a storage facade drives. Every backend
//! provides the immediate form ([`StorageAdapterSync`]) and, with the `async`
//! feature, the deferred form ([`StorageAdapter`]).

use crate::error::StorageResult;
use crate::storage::value::StorageValue;

/// Options passed to `initialize`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterOptions {
    /// Storage identifier; the shared default name is used when absent
    pub name: Option<String>,
}

impl AdapterOptions {
    /// Options carrying an explicit storage name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Synchronous storage adapter trait
pub trait StorageAdapterSync: Send + Sync {
    /// Prepare the backend and assign its name
    fn initialize_sync(&self, options: AdapterOptions) -> StorageResult<()>;

    /// Retrieve a copy of the value stored under `key`
    fn get_item_sync(&self, key: &str) -> StorageResult<Option<StorageValue>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item_sync(&self, key: &str, value: StorageValue) -> StorageResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item_sync(&self, key: &str) -> StorageResult<()>;

    /// Remove every entry
    fn clear_sync(&self) -> StorageResult<()>;

    /// Number of stored entries
    fn size_sync(&self) -> StorageResult<usize>;

    /// Key at `index` in insertion order
    fn key_sync(&self, index: usize) -> StorageResult<Option<String>>;

    /// Drop all data and make the storage unusable
    fn delete_storage_sync(&self) -> StorageResult<()>;
}

/// Asynchronous storage adapter trait
#[cfg(feature = "async")]
pub trait StorageAdapter: Send + Sync {
    /// Prepare the backend and assign its name
    fn initialize(&self, options: AdapterOptions) -> impl std::future::Future<Output = StorageResult<()>> + Send;

    /// Retrieve a copy of the value stored under `key`
    fn get_item(&self, key: &str) -> impl std::future::Future<Output = StorageResult<Option<StorageValue>>> + Send;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: StorageValue) -> impl std::future::Future<Output = StorageResult<()>> + Send;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> impl std::future::Future<Output = StorageResult<()>> + Send;

    /// Remove every entry
    fn clear(&self) -> impl std::future::Future<Output = StorageResult<()>> + Send;

    /// Number of stored entries
    fn size(&self) -> impl std::future::Future<Output = StorageResult<usize>> + Send;

    /// Key at `index` in insertion order
    fn key(&self, index: usize) -> impl std::future::Future<Output = StorageResult<Option<String>>> + Send;

    /// Drop all data and make the storage unusable
    fn delete_storage(&self) -> impl std::future::Future<Output = StorageResult<()>> + Send;
}
