use crate::commands::{stats, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

pub fn run<S: KeyValueStore, E: EditingSurface>(session: &mut Session<S, E>) -> Result<CmdResult> {
    let id = session.repo.create_draft(&mut session.surface)?;
    session.selection = None;

    let mut result = CmdResult::default();
    if let Some(draft) = session.repo.get(&id) {
        result.add_message(CmdMessage::success(format!("Created {}", draft.name)));
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
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn creates_and_activates_named_draft() {
        let store = StoreFixture::new().with_drafts(2).with_active("d1").build();
        let mut s = session(store);
        s.surface.set_html("unsaved edit");

        let result = run(&mut s).unwrap();

        assert_eq!(result.affected_drafts.len(), 1);
        let created = &result.affected_drafts[0];
        assert_eq!(created.name, "Untitled Draft 3");
        assert_eq!(s.repo.active_id(), Some(created.id.as_str()));
        assert_eq!(s.repo.get("d1").unwrap().content, "unsaved edit");
        assert_eq!(result.messages[0].content, "Created Untitled Draft 3");
        assert_eq!(result.stats.unwrap().stats.words, 0);
    }
}
