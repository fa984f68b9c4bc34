//! # Draft Repository
//!
//! The single owner of draft state: the ordered draft collection, the active-draft
//! pointer and the store they are persisted to. Nothing else mutates drafts.
//!
//! ## Persistence Contract
//!
//! Every mutating operation ends by writing the *entire* collection as one JSON array,
//! plus the active pointer when it changed. There are no incremental writes. Draft
//! documents are small and operations are user-paced, so a full overwrite keeps the
//! stored state trivially consistent with memory.
//!
//! A failed write never fails the operation. The in-memory state keeps the edit, a
//! warning is logged, and the message is queued for the caller (see
//! [`DraftRepository::take_warnings`]). Failed *reads* at load time are errors: the
//! repository never overwrites data it could not read.
//!
//! ## Surface Synchronization
//!
//! Exactly one draft is mirrored into the editing surface. Whenever the active draft
//! changes, the surface's current HTML is first captured into the outgoing draft and
//! then the incoming draft's content is loaded.

use crate::error::{AestheteError, Result};
use crate::model::{default_draft_name, Draft, LEGACY_DRAFT_NAME};
use crate::store::{keys, load_json, save_json, KeyValueStore};
use crate::surface::EditingSurface;
use tracing::{debug, info, warn};

/// What `initialize` had to do to reach a consistent state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub migrated_legacy: bool,
    pub created_default: bool,
    pub repaired_pointer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted {
        draft: Draft,
        /// Set when the deleted draft was active.
        reassigned_to: Option<String>,
    },
    Cancelled,
}

pub struct DraftRepository<S: KeyValueStore> {
    store: S,
    drafts: Vec<Draft>,
    active_id: Option<String>,
    warnings: Vec<String>,
}

impl<S: KeyValueStore> DraftRepository<S> {
    /// Reads the persisted collection and pointer. Call [`initialize`](Self::initialize)
    /// before using the repository.
    pub fn load(store: S) -> Result<Self> {
        let drafts: Vec<Draft> = load_json(&store, keys::DRAFTS)?.unwrap_or_default();
        let active_id = store
            .get(keys::ACTIVE_DRAFT_ID)?
            .filter(|id| !id.is_empty());

        debug!(drafts = drafts.len(), active = ?active_id, "loaded draft collection");

        Ok(Self {
            store,
            drafts,
            active_id,
            warnings: Vec::new(),
        })
    }

    /// Brings the repository into a consistent state and loads the active draft into
    /// the surface.
    ///
    /// 1. A non-empty legacy draft becomes "Initial Draft" if no drafts exist yet.
    /// 2. An empty collection gets a fresh default draft.
    /// 3. A missing or stale pointer is moved to the first draft.
    pub fn initialize<E: EditingSurface>(&mut self, surface: &mut E) -> Result<InitReport> {
        let mut report = InitReport::default();

        if self.drafts.is_empty() {
            let legacy = self
                .store
                .get(keys::LEGACY_DRAFT)?
                .filter(|content| !content.is_empty());

            if let Some(content) = legacy {
                let draft = Draft::new(LEGACY_DRAFT_NAME.to_string(), content);
                info!(id = %draft.id, "migrating legacy draft");
                self.active_id = Some(draft.id.clone());
                self.drafts.push(draft);

                // The legacy copy is only dropped once the migrated draft is stored
                if self.persist(true) {
                    if let Err(e) = self.store.remove(keys::LEGACY_DRAFT) {
                        self.record_write_failure("legacy draft cleanup", e);
                    }
                }
                report.migrated_legacy = true;
            }
        }

        if self.drafts.is_empty() {
            let id = self.create_draft(surface)?;
            info!(%id, "created default draft");
            report.created_default = true;
            return Ok(report);
        }

        let pointer_valid = self
            .active_id
            .as_deref()
            .is_some_and(|id| self.index_of(id).is_some());

        if !pointer_valid {
            let first = self.drafts[0].id.clone();
            debug!(stale = ?self.active_id, new = %first, "repairing active draft pointer");
            self.active_id = Some(first);
            self.persist_pointer();
            report.repaired_pointer = true;
        }

        if let Some(draft) = self.active_draft() {
            surface.set_html(&draft.content);
        }

        Ok(report)
    }

    /// Appends an empty draft named by sequence number and makes it active.
    pub fn create_draft<E: EditingSurface>(&mut self, surface: &mut E) -> Result<String> {
        let draft = Draft::new(default_draft_name(self.drafts.len() + 1), String::new());
        let id = draft.id.clone();
        self.drafts.push(draft);
        self.switch_draft(surface, &id)?;
        Ok(id)
    }

    /// Makes `id` the active draft.
    ///
    /// The surface's current content is saved into the outgoing draft first. Unknown
    /// ids are rejected without touching anything.
    pub fn switch_draft<E: EditingSurface>(&mut self, surface: &mut E, id: &str) -> Result<()> {
        let target = self
            .index_of(id)
            .ok_or_else(|| AestheteError::DraftNotFound(id.to_string()))?;

        self.capture_active(surface);
        self.active_id = Some(id.to_string());
        surface.set_html(&self.drafts[target].content);
        debug!(%id, "switched active draft");

        self.persist(true);
        Ok(())
    }

    /// Deletes a draft after `confirm` approves it.
    ///
    /// The last remaining draft can never be deleted. If the active draft goes, the
    /// first remaining draft becomes active and its content is loaded.
    pub fn delete_draft<E, F>(
        &mut self,
        surface: &mut E,
        id: &str,
        confirm: F,
    ) -> Result<DeleteOutcome>
    where
        E: EditingSurface,
        F: FnOnce(&Draft) -> bool,
    {
        if self.drafts.len() <= 1 {
            return Err(AestheteError::LastDraft);
        }

        let index = self
            .index_of(id)
            .ok_or_else(|| AestheteError::DraftNotFound(id.to_string()))?;

        if !confirm(&self.drafts[index]) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let draft = self.drafts.remove(index);
        let mut reassigned_to = None;

        if self.active_id.as_deref() == Some(id) {
            let first = &self.drafts[0];
            surface.set_html(&first.content);
            self.active_id = Some(first.id.clone());
            reassigned_to = Some(first.id.clone());
        }

        debug!(%id, reassigned = ?reassigned_to, "deleted draft");
        self.persist(true);

        Ok(DeleteOutcome::Deleted {
            draft,
            reassigned_to,
        })
    }

    /// Renames a draft. Blank names are rejected; others are stored trimmed.
    pub fn rename_draft(&mut self, id: &str, new_name: &str) -> Result<()> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(AestheteError::EmptyName);
        }

        let draft = self
            .get_mut(id)
            .ok_or_else(|| AestheteError::DraftNotFound(id.to_string()))?;
        draft.name = name.to_string();

        self.persist(false);
        Ok(())
    }

    /// Creates a draft holding `raw_text` verbatim and makes it active.
    pub fn import_draft<E: EditingSurface>(
        &mut self,
        surface: &mut E,
        raw_text: &str,
        suggested_name: &str,
    ) -> Result<String> {
        let name = match suggested_name.trim() {
            "" => default_draft_name(self.drafts.len() + 1),
            name => name.to_string(),
        };

        let draft = Draft::new(name, raw_text.to_string());
        let id = draft.id.clone();
        self.drafts.push(draft);
        self.switch_draft(surface, &id)?;
        Ok(id)
    }

    /// Copies the surface content into the active draft and persists.
    ///
    /// Returns false when there is no active draft to save into.
    pub fn save_active_draft_content<E: EditingSurface>(&mut self, surface: &E) -> bool {
        if !self.capture_active(surface) {
            return false;
        }
        self.persist(false);
        true
    }

    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_draft(&self) -> Option<&Draft> {
        let id = self.active_id.as_deref()?;
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Option<&Draft> {
        self.drafts.iter().find(|d| d.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drains the storage warnings collected since the last call.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.drafts.iter().position(|d| d.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Draft> {
        self.drafts.iter_mut().find(|d| d.id == id)
    }

    fn capture_active<E: EditingSurface>(&mut self, surface: &E) -> bool {
        let Some(id) = self.active_id.clone() else {
            return false;
        };
        match self.get_mut(&id) {
            Some(draft) => {
                draft.set_content(surface.get_html());
                true
            }
            None => false,
        }
    }

    /// Writes the whole collection (and optionally the pointer). Returns false if any
    /// write failed.
    fn persist(&mut self, include_pointer: bool) -> bool {
        let mut ok = true;
        if let Err(e) = save_json(&self.store, keys::DRAFTS, &self.drafts) {
            self.record_write_failure("drafts", e);
            ok = false;
        }
        if include_pointer && !self.persist_pointer() {
            ok = false;
        }
        ok
    }

    fn persist_pointer(&mut self) -> bool {
        let result = match &self.active_id {
            Some(id) => self.store.set(keys::ACTIVE_DRAFT_ID, id),
            None => self.store.remove(keys::ACTIVE_DRAFT_ID),
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                self.record_write_failure("active draft", e);
                false
            }
        }
    }

    fn record_write_failure(&mut self, what: &str, err: AestheteError) {
        warn!(error = %err, "failed to persist {}", what);
        self.warnings.push(format!(
            "Could not save {} ({}). Changes are kept in memory only.",
            what, err
        ));
    }
}
