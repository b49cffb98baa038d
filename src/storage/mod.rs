//! Durable key-value storage backends.
//!
//! The store persists through the [`KeyValueStorage`] trait: an opaque
//! string-keyed, string-valued durable store. Two implementations are
//! provided:
//! - [`FileStorage`]: a YAML document on disk, the durable backend for real
//!   sessions
//! - [`MemoryStorage`]: an in-process map for tests and ephemeral sessions
//!
//! Tests can also mock the trait directly to assert write-through behavior
//! without touching a real backend.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// An opaque durable string-keyed store.
///
/// Values survive across sessions for durable implementations. `get` of a
/// missing key is `Ok(None)`, not an error.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the entry under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
