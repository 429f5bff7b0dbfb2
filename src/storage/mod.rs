//! Storage module for the mock backend adapter
//!
//! This module provides the plugin contract a key-value storage facade drives,
//! and an in-memory implementation of it:
//! - **Adapter traits** - immediate ([`StorageAdapterSync`]) and deferred
//!   ([`StorageAdapter`], requires the `async` feature) call conventions
//! - **Mock adapter** - [`MockStorageAdapter`], an insertion-ordered map with a
//!   deletion latch and simulated latency
//! - **Value model** - [`StorageValue`], the structurally-clonable data subset
//!
//! # Examples
//!
//! ```rust
//! use mock_storage_adapter::storage::{
//!     AdapterOptions, MockStorageAdapter, StorageAdapterSync, StorageValue,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = MockStorageAdapter::new();
//! storage.initialize_sync(AdapterOptions::named("settings"))?;
//!
//! storage.set_item_sync("theme", StorageValue::from("dark"))?;
//! assert_eq!(storage.get_item_sync("theme")?, Some(StorageValue::from("dark")));
//! assert_eq!(storage.key_sync(0)?.as_deref(), Some("theme"));
//!
//! storage.delete_storage_sync()?;
//! assert!(storage.size_sync().is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Deferred form
//!
//! ```rust
//! use mock_storage_adapter::storage::{
//!     Delay, MockConfig, MockStorageAdapter, StorageAdapter, StorageValue,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = MockStorageAdapter::with_config(MockConfig::with_delay(Delay::fixed(1)));
//!
//!     storage.set_item("count", StorageValue::from(3)).await?;
//!     assert_eq!(storage.size().await?, 1);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod delay;
pub mod memory_adapter;
pub mod value;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use adapter::{AdapterOptions, StorageAdapterSync};
pub use delay::{Delay, MockConfig};
pub use memory_adapter::MockStorageAdapter;
pub use value::StorageValue;

#[cfg(feature = "async")]
pub use adapter::StorageAdapter;

/// Storage constants
pub mod constants {
    //! Defaults shared by every adapter instance

    /// Name used by `initialize` when no name is given
    pub const DEFAULT_STORAGE_NAME: &str = "storage-facade";

    /// Lower bound of the default simulated latency, in milliseconds
    pub const DEFAULT_DELAY_MIN_MS: u64 = 10;

    /// Upper bound of the default simulated latency, in milliseconds
    pub const DEFAULT_DELAY_MAX_MS: u64 = 100;
}
