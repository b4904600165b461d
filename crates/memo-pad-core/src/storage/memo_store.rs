//! Memo Store
//!
//! Persists the whole memo collection as one JSON array under a single key.
//! Every save rewrites the full array.

use super::traits::KeyValueStore;
use crate::config::PadConfig;
use crate::domain::{DomainResult, Memo};

pub struct MemoStore<S> {
    backend: S,
    key: String,
    title_prefix: String,
}

impl<S: KeyValueStore> MemoStore<S> {
    pub fn new(backend: S, config: &PadConfig) -> Self {
        Self {
            backend,
            key: config.storage_key.clone(),
            title_prefix: config.title_prefix.clone(),
        }
    }

    /// Load the collection; absent or malformed data yields an empty list
    pub fn load(&self) -> Vec<Memo> {
        match self.try_load() {
            Ok(memos) => memos,
            Err(e) => {
                log::warn!("[Store] Ignoring unreadable data under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Load the collection, surfacing backend and parse errors
    pub fn try_load(&self) -> DomainResult<Vec<Memo>> {
        match self.backend.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize and write the full collection
    pub fn save(&self, memos: &[Memo]) -> DomainResult<()> {
        let json = serde_json::to_string(memos)?;
        self.backend.set_item(&self.key, &json)?;
        log::debug!("[Store] Saved {} memos under '{}'", memos.len(), self.key);
        Ok(())
    }

    /// New memo with a placeholder title numbered after `existing` memos
    pub fn create_memo(&self, existing: usize, now_ms: i64) -> Memo {
        Memo::new(format!("{} {}", self.title_prefix, existing + 1), now_ms)
    }
}
