//! In-Memory Key-Value Store

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult};

/// Map-backed store. Clones share the same map, so a test can keep a
/// handle and inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| DomainError::Storage(format!("memory store poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
