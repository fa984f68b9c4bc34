use crate::commands::{stats, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::LEGACY_DRAFT_NAME;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

/// Brings stored state to a consistent shape and loads the active draft.
pub fn run<S: KeyValueStore, E: EditingSurface>(session: &mut Session<S, E>) -> Result<CmdResult> {
    let report = session.repo.initialize(&mut session.surface)?;
    session.selection = None;

    let mut result = CmdResult::default();
    if report.migrated_legacy {
        result.add_message(CmdMessage::info(format!(
            "Moved your earlier draft into \"{}\".",
            LEGACY_DRAFT_NAME
        )));
    }
    if report.created_default {
        result.add_message(CmdMessage::info("Started a new draft."));
    }

    let report = stats::refresh(session)?;
    stats::attach(&mut result, report);
    session.flush_warnings(&mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AestheteConfig;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::surface::BufferSurface;

    fn load(store: InMemoryStore) -> Session<InMemoryStore, BufferSurface> {
        Session::load(store, BufferSurface::new(), AestheteConfig::default()).unwrap()
    }

    #[test]
    fn first_run_starts_a_draft() {
        let mut s = load(InMemoryStore::new());
        let result = run(&mut s).unwrap();

        assert_eq!(s.repo.drafts().len(), 1);
        assert_eq!(result.messages[0].content, "Started a new draft.");
        assert_eq!(result.stats.unwrap().word_label, "0 words");
    }

    #[test]
    fn legacy_migration_is_announced() {
        let mut s = load(StoreFixture::new().with_legacy("old words").build());
        let result = run(&mut s).unwrap();

        assert_eq!(s.repo.drafts()[0].name, "Initial Draft");
        assert!(result.messages[0].content.contains("Initial Draft"));
        assert_eq!(result.stats.unwrap().stats.words, 2);
    }

    #[test]
    fn consistent_store_is_quiet() {
        let mut s = load(StoreFixture::new().with_drafts(2).with_active("d2").build());
        let result = run(&mut s).unwrap();

        assert!(result.messages.is_empty());
        assert_eq!(s.surface.get_html(), "Content for draft 2");
    }
}
