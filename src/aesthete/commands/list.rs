use crate::commands::{CmdResult, Session};
use crate::error::Result;
use crate::listing::draft_rows;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

pub fn run<S: KeyValueStore, E: EditingSurface>(session: &Session<S, E>) -> Result<CmdResult> {
    let rows = draft_rows(
        session.repo.drafts(),
        session.repo.active_id(),
        session.config.preview_length,
    );
    Ok(CmdResult::default().with_listed_drafts(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, testing::session};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_newest_first_with_active_flag() {
        let store = StoreFixture::new().with_drafts(3).with_active("d1").build();
        let s = session(store);

        let rows = run(&s).unwrap().listed_drafts;

        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["d3", "d2", "d1"]);
        assert!(rows[2].is_active);
        assert_eq!(rows[0].preview, "Content for draft 3");
    }

    #[test]
    fn list_reflects_created_draft() {
        let store = StoreFixture::new().with_drafts(1).with_active("d1").build();
        let mut s = session(store);
        create::run(&mut s).unwrap();

        let rows = run(&s).unwrap().listed_drafts;
        assert_eq!(rows.len(), 2);
        let active: Vec<_> = rows.iter().filter(|r| r.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].preview, "Empty draft...");
        assert_eq!(active[0].name, "Untitled Draft 2");
    }

    #[test]
    fn preview_length_comes_from_config() {
        let store = StoreFixture::new().with_drafts(1).build();
        let mut s = session(store);
        s.config.preview_length = 7;

        let rows = run(&s).unwrap().listed_drafts;
        assert_eq!(rows[0].preview, "Content");
    }
}
