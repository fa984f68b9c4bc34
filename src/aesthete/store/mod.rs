//! # Storage Layer
//!
//! The persistent store is a flat, synchronous key-value map of strings, the same shape
//! as the browser storage the draft format was first written to. Structured values
//! (the draft collection) are JSON-encoded into a single key; scalars are stored as
//! plain strings.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON object in `storage.json`,
//!   rewritten atomically on every write.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with write-failure
//!   simulation.
//!
//! All methods take `&self`. Aesthete is single-threaded, so the in-memory store uses
//! `RefCell`, and the draft repository can own the store while settings and goal
//! tracking borrow it.
//!
//! ## Key Layout
//!
//! ```text
//! aesthete_drafts           JSON array of {id, name, content, updated}
//! aesthete_active_draft_id  plain id string
//! aesthete_draft            legacy single-draft content (consumed once)
//! aesthete_theme            light | sepia | dark
//! aesthete_font_size        numeric string (px)
//! aesthete_line_height      numeric string
//! aesthete_goal             numeric string, absent when no goal is set
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod fs;
pub mod memory;

pub mod keys {
    pub const DRAFTS: &str = "aesthete_drafts";
    pub const ACTIVE_DRAFT_ID: &str = "aesthete_active_draft_id";
    pub const LEGACY_DRAFT: &str = "aesthete_draft";
    pub const THEME: &str = "aesthete_theme";
    pub const FONT_SIZE: &str = "aesthete_font_size";
    pub const LINE_HEIGHT: &str = "aesthete_line_height";
    pub const WORD_GOAL: &str = "aesthete_goal";
}

/// Abstract interface for durable key-value storage.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads and decodes a JSON value stored under `key`.
pub fn load_json<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn save_json<S: KeyValueStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;
    use crate::error::AestheteError;

    #[test]
    fn json_helpers_roundtrip() {
        let store = InMemoryStore::new();
        save_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        let loaded: Option<Vec<i32>> = load_json(&store, "numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn load_json_missing_key_is_none() {
        let store = InMemoryStore::new();
        let loaded: Option<Vec<i32>> = load_json(&store, "nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_json_reports_corrupt_values() {
        let store = InMemoryStore::new();
        store.set("broken", "[1, 2").unwrap();
        let loaded: Result<Option<Vec<i32>>> = load_json(&store, "broken");
        assert!(matches!(loaded, Err(AestheteError::Serialization(_))));
    }
}
