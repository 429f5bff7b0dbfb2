//! # Mock Storage Adapter
//!
//! An in-memory backend adapter for pluggable key-value storage facades. It
//! implements the narrow backend contract (initialize, get/set/remove/clear,
//! size, key-by-index, delete-storage) so code built on a storage facade can be
//! tested without a real persistent backend.
//!
//! ## Features
//!
//! - **Storage Module**: adapter traits, the mock adapter and its value model
//! - **Deletion latch**: once a storage is deleted every later operation fails
//! - **Simulated latency**: deferred operations settle after a random or fixed delay
//!
//! ## Optional Features
//!
//! - `async`: deferred adapter form backed by `tokio` timers (default)
//! - `testing`: test-only access to an adapter's internal map
//!
//! ## Example
//!
//! ```rust
//! use mock_storage_adapter::prelude::*;
//!
//! let storage = MockStorageAdapter::new();
//! storage.initialize_sync(AdapterOptions::default())?;
//! storage.set_item_sync("value", StorageValue::from(30))?;
//! assert_eq!(storage.get_item_sync("value")?, Some(StorageValue::from(30)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

// Core modules
pub mod error;
pub mod storage;

// Utility modules
pub mod utils;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::error::{Error, Result, StorageError, StorageResult};
    pub use crate::storage::{
        AdapterOptions, Delay, MockConfig, MockStorageAdapter, StorageAdapterSync, StorageValue,
    };

    #[cfg(feature = "async")]
    pub use crate::storage::StorageAdapter;
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
