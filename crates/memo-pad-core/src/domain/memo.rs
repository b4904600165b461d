//! Memo Entity
//!
//! A titled, timestamped note with a markdown body.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single memo
///
/// Field names serialize in camelCase (`createdAt`, `updatedAt`) to stay
/// compatible with data already sitting in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    /// Unique identifier (UUID v4 for new memos, legacy ids kept as-is)
    pub id: String,
    /// Title shown in the memo list
    pub title: String,
    /// Markdown source
    pub body: String,
    /// Creation time, epoch milliseconds
    pub created_at: i64,
    /// Last save time, epoch milliseconds
    pub updated_at: i64,
}

impl Memo {
    /// Create an empty memo stamped with `now_ms`
    pub fn new(title: impl Into<String>, now_ms: i64) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            body: String::new(),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Overwrite title and body, bumping `updated_at`
    pub fn apply_edit(&mut self, title: &str, body: &str, now_ms: i64) {
        self.title = title.to_string();
        self.body = body.to_string();
        self.updated_at = now_ms;
    }

    /// Replace the id with a freshly generated one
    pub fn regenerate_id(&mut self) {
        self.id = new_id();
    }

    /// Download file name: `<title>.<extension>`
    pub fn export_file_name(&self, extension: &str) -> String {
        let stem: String = self
            .title
            .trim()
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        let stem = if stem.is_empty() { "untitled".to_string() } else { stem };
        format!("{}.{}", stem, extension.trim_start_matches('.'))
    }
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A memo packaged for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub mime: String,
    pub contents: String,
}
