use crate::commands::{CmdResult, Session};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

/// The active draft's content, as rendered text or raw HTML.
pub fn run<S: KeyValueStore, E: EditingSurface>(session: &Session<S, E>, html: bool) -> Result<CmdResult> {
    let output = if html {
        session.surface.get_html()
    } else {
        session.surface.get_plain_text()
    };

    let affected = session.active_draft().cloned().into_iter().collect();
    Ok(CmdResult::default()
        .with_affected_drafts(affected)
        .with_output(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::session;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_text_or_html() {
        let store = StoreFixture::new()
            .with_draft("a", "A", "one<br>two &amp; three", 1)
            .with_active("a")
            .build();
        let s = session(store);

        assert_eq!(run(&s, false).unwrap().output.unwrap(), "one\ntwo & three");
        let html = run(&s, true).unwrap();
        assert_eq!(html.output.unwrap(), "one<br>two &amp; three");
        assert_eq!(html.affected_drafts[0].id, "a");
    }
}
