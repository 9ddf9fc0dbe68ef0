//! Synchronous string key/value storage port.
//!
//! Everything the site makes durable goes through [`KeyValueStorage`]. The browser
//! build plugs `window.localStorage` in here; native builds and tests use the
//! in-memory or filesystem backends.
use crate::error::StoreError;

pub mod filesystem;
pub mod memory;

/// Trait for storage backend implementations
pub trait KeyValueStorage: Send + Sync {
    /// Raw string stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite `key` with `value`. A failed write must leave the previous value intact.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// Short backend name for startup logs.
    fn describe(&self) -> String;
}
