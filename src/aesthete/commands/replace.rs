use crate::commands::{stats, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::search;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

/// Replaces the selected match, or the next one, and selects the match after it.
pub fn current<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    query: &str,
    replacement: &str,
) -> Result<CmdResult> {
    if query.is_empty() {
        return Ok(CmdResult::default());
    }

    let html = session.surface.get_html();
    let Some(replaced) = search::replace_current(&html, query, replacement, session.selection.clone())
    else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(search::count_label(0)));
        return Ok(result);
    };

    session.surface.set_html(&replaced.html);
    let mut result = stats::recompute(session)?;
    session.selection = replaced.next;

    result.add_message(CmdMessage::success("Replaced 1 occurrence."));
    Ok(result)
}

/// Replaces every match in the active draft.
pub fn all<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    query: &str,
    replacement: &str,
) -> Result<CmdResult> {
    if query.is_empty() {
        return Ok(CmdResult::default());
    }

    let (html, count) = search::replace_all(&session.surface.get_html(), query, replacement);
    session.selection = None;

    let mut result = if count > 0 {
        session.surface.set_html(&html);
        stats::recompute(session)?
    } else {
        CmdResult::default()
    };

    result.add_message(CmdMessage::success(format!("Replaced {} occurrences.", count)));
    Ok(result)
}
