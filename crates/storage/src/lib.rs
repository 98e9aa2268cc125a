//! `luxfinds-storage` — key/value persistence seam for the cart.
//!
//! A synchronous, profile-scoped string store: the Rust counterpart of the
//! browser's `localStorage`. The cart treats this as an injected dependency;
//! it never implements persistence itself.

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage path error: {0}")]
    Path(String),
}

/// Result type used across the storage layer.
pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous key/value store holding one string value per key.
///
/// Mirrors the `localStorage` contract: `get`/`set`/`remove`, no iteration,
/// no expiry. `get` on an absent key is `Ok(None)`; `remove` of an absent key
/// succeeds.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
