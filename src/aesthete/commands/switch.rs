use crate::commands::{helpers::resolve_draft, stats, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

pub fn run<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    selector: &str,
) -> Result<CmdResult> {
    let id = resolve_draft(&session.repo, selector)?;
    session.repo.switch_draft(&mut session.surface, &id)?;
    session.selection = None;

    let mut result = CmdResult::default();
    if let Some(draft) = session.repo.get(&id) {
        result.add_message(CmdMessage::success(format!("Switched to {}", draft.name)));
        result.affected_drafts.push(draft.clone());
    }

    let report = stats::refresh(session)?;
    stats::attach(&mut result, report);
    session.flush_warnings(&mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::session;
    use crate::error::AestheteError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn switches_by_name_and_loads_content() {
        let store = StoreFixture::new().with_drafts(2).with_active("d1").build();
        let mut s = session(store);

        let result = run(&mut s, "draft 2").unwrap();

        assert_eq!(s.repo.active_id(), Some("d2"));
        assert_eq!(s.surface.get_html(), "Content for draft 2");
        assert_eq!(result.messages[0].content, "Switched to Draft 2");
        assert_eq!(result.stats.unwrap().stats.words, 4);
    }

    #[test]
    fn clears_find_selection() {
        let store = StoreFixture::new().with_drafts(2).with_active("d1").build();
        let mut s = session(store);
        s.selection = Some(0..7);

        run(&mut s, "d2").unwrap();
        assert!(s.selection.is_none());
    }

    #[test]
    fn unknown_draft_is_an_error() {
        let store = StoreFixture::new().with_drafts(2).with_active("d1").build();
        let mut s = session(store);

        assert!(matches!(
            run(&mut s, "missing"),
            Err(AestheteError::DraftNotFound(_))
        ));
        assert_eq!(s.repo.active_id(), Some("d1"));
    }
}
