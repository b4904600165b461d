//! Pad Configuration
//!
//! Every field has a default, so partial JSON overrides are accepted.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PadConfig {
    /// Local storage key holding the memo array
    pub storage_key: String,
    /// Placeholder title prefix, numbered by list position
    pub title_prefix: String,
    /// Memos created when the store is empty
    pub seed_count: usize,
    /// Extension of downloaded files
    pub export_extension: String,
    /// Content type of downloaded files
    pub export_mime: String,
    /// Alert shown when deleting the last memo
    pub delete_last_message: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            storage_key: "memos".to_string(),
            title_prefix: "newMemo".to_string(),
            seed_count: 2,
            export_extension: "md".to_string(),
            export_mime: "text/markdown;charset=utf-8".to_string(),
            delete_last_message: "This memo cannot be deleted: at least one memo must remain."
                .to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PadConfig {
    /// Parse and validate a JSON override document
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: PadConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.storage_key.is_empty() {
            return Err(DomainError::InvalidState("storageKey must not be empty".to_string()));
        }
        if self.seed_count == 0 {
            return Err(DomainError::InvalidState("seedCount must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
