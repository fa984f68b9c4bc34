use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::search::{self, Direction};
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

/// Counts matches in the active draft and lists the lines they occur on.
pub fn run<S: KeyValueStore, E: EditingSurface>(session: &Session<S, E>, query: &str) -> Result<CmdResult> {
    let text = session.surface.get_plain_text();
    let count = search::count_matches(&text, query);

    let mut result = CmdResult::default().with_matches(search::line_matches(&text, query));
    result.add_message(CmdMessage::info(search::count_label(count)));
    Ok(result)
}

/// Moves the find selection to the next (or previous) match, wrapping around.
pub fn step<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    query: &str,
    direction: Direction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if query.is_empty() {
        return Ok(result);
    }

    let html = session.surface.get_html();
    let found = search::find(&html, query, session.selection.clone(), direction);
    if found.is_some() {
        session.selection = found;
    }

    let count = search::count_matches(&session.surface.get_plain_text(), query);
    result.add_message(CmdMessage::info(search::count_label(count)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::session;
    use crate::search::MatchSegment;
    use crate::store::memory::fixtures::StoreFixture;

    fn store(content: &str) -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_draft("a", "A", content, 1)
            .with_active("a")
            .build()
    }

    #[test]
    fn reports_count_and_lines() {
        let s = session(store("The cat<br>no match<div>CAT and cat</div>"));
        let result = run(&s, "cat").unwrap();

        assert_eq!(result.messages[0].content, "Matches: 3");
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].line_number, 1);
        assert_eq!(result.matches[1].line_number, 3);
        assert_eq!(result.matches[1].segments[0], MatchSegment::Match("CAT".into()));
    }

    #[test]
    fn no_matches_shows_zero_label() {
        let s = session(store("nothing here"));
        assert_eq!(run(&s, "cat").unwrap().messages[0].content, "0/0");
        assert_eq!(run(&s, "").unwrap().messages[0].content, "0/0");
    }

    #[test]
    fn step_walks_matches_and_wraps() {
        let mut s = session(store("ab <b>ab</b> ab"));

        step(&mut s, "ab", Direction::Forward).unwrap();
        assert_eq!(s.selection, Some(0..2));
        step(&mut s, "ab", Direction::Forward).unwrap();
        assert_eq!(s.selection, Some(6..8));
        step(&mut s, "ab", Direction::Forward).unwrap();
        assert_eq!(s.selection, Some(13..15));
        step(&mut s, "ab", Direction::Forward).unwrap();
        assert_eq!(s.selection, Some(0..2));
        step(&mut s, "ab", Direction::Backward).unwrap();
        assert_eq!(s.selection, Some(13..15));
    }

    #[test]
    fn step_with_empty_query_does_nothing() {
        let mut s = session(store("ab"));
        let result = step(&mut s, "", Direction::Forward).unwrap();
        assert!(result.messages.is_empty());
        assert!(s.selection.is_none());
    }
}
