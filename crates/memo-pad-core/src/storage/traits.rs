//! Storage Layer - Core Traits
//!
//! Abstract string key-value store. The browser's `localStorage` is one
//! implementation, an in-memory map is another.

use crate::domain::DomainResult;

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;
}
