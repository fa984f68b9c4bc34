use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

pub const LEGACY_DRAFT_NAME: &str = "Initial Draft";

/// A persisted document unit.
///
/// The field layout is the on-disk format: the whole collection is stored as a
/// JSON array of `{id, name, content, updated}` records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: String,
    pub name: String,
    /// HTML fragment, exactly as the editing surface serialized it.
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub updated: i64,
}

impl Draft {
    pub fn new(name: String, content: String) -> Self {
        Self {
            id: new_draft_id(),
            name,
            content,
            updated: now_millis(),
        }
    }

    /// Replaces the content and refreshes the timestamp.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.touch();
    }

    /// Refreshes `updated`. Never moves it backwards, even if the clock does.
    pub fn touch(&mut self) {
        self.updated = self.updated.max(now_millis());
    }
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Ids are time-ordered so two drafts created in the same millisecond still differ.
pub fn new_draft_id() -> String {
    Uuid::now_v7().to_string()
}

/// Default name for the n-th draft (1-based).
pub fn default_draft_name(sequence: usize) -> String {
    format!("Untitled Draft {}", sequence)
}

/// Derives a draft name from an imported file name by dropping the last extension.
///
/// Returns `None` when nothing is left (e.g. `.md`).
pub fn draft_name_from_filename(file_name: &str) -> Option<String> {
    let path = Path::new(file_name);
    let base = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    // Path treats ".md" as a dotfile without extension; the whole name is the extension here
    let stem = match path.extension() {
        Some(_) => path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
        None if base.starts_with('.') => String::new(),
        None => base,
    };

    let stem = stem.trim();
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
