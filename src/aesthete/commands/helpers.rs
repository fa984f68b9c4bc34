use crate::error::{AestheteError, Result};
use crate::listing;
use crate::repository::DraftRepository;
use crate::store::KeyValueStore;

/// Resolves a user-supplied draft selector to a draft id.
///
/// Tried in order: 1-based list position, exact id, case-insensitive name. Names are
/// not unique; the most recently updated match wins.
pub fn resolve_draft<S: KeyValueStore>(repo: &DraftRepository<S>, selector: &str) -> Result<String> {
    let selector = selector.trim();
    let rows = listing::draft_rows(repo.drafts(), repo.active_id(), 0);

    if let Ok(position) = selector.parse::<usize>() {
        if let Some(row) = rows.iter().find(|r| r.position == position) {
            return Ok(row.id.clone());
        }
    }

    if repo.get(selector).is_some() {
        return Ok(selector.to_string());
    }

    let lowered = selector.to_lowercase();
    rows.into_iter()
        .find(|r| r.name.to_lowercase() == lowered)
        .map(|r| r.id)
        .ok_or_else(|| AestheteError::DraftNotFound(selector.to_string()))
}
