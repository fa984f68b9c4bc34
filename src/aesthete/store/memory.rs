use super::KeyValueStore;
use crate::error::{AestheteError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set`/`remove` fail, as a full or disabled store would.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(AestheteError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Draft;
    use crate::store::{keys, save_json};

    /// Builder for a store pre-seeded with persisted state.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        drafts: Vec<Draft>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                drafts: Vec::new(),
            }
        }

        /// Adds a draft with a fixed id and timestamp.
        pub fn with_draft(mut self, id: &str, name: &str, content: &str, updated: i64) -> Self {
            self.drafts.push(Draft {
                id: id.to_string(),
                name: name.to_string(),
                content: content.to_string(),
                updated,
            });
            self
        }

        /// Adds `count` drafts with ids `d1..dN`, oldest first.
        pub fn with_drafts(mut self, count: usize) -> Self {
            for i in 1..=count {
                self = self.with_draft(
                    &format!("d{}", i),
                    &format!("Draft {}", i),
                    &format!("Content for draft {}", i),
                    1_000 * i as i64,
                );
            }
            self
        }

        pub fn with_active(self, id: &str) -> Self {
            self.store.set(keys::ACTIVE_DRAFT_ID, id).unwrap();
            self
        }

        pub fn with_legacy(self, content: &str) -> Self {
            self.store.set(keys::LEGACY_DRAFT, content).unwrap();
            self
        }

        pub fn with_goal(self, goal: &str) -> Self {
            self.store.set(keys::WORD_GOAL, goal).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            if !self.drafts.is_empty() {
                save_json(&self.store, keys::DRAFTS, &self.drafts).unwrap();
            }
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = InMemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn remove_missing_is_ok() {
        let store = InMemoryStore::new();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn simulated_write_errors_leave_data_untouched() {
        let store = InMemoryStore::new();
        store.set("k", "v").unwrap();
        store.set_simulate_write_error(true);
        assert!(store.set("k", "other").is_err());
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
