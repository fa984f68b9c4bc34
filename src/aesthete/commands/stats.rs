//! Stats computation and the content-change path.
//!
//! [`recompute`] is what runs on every content change: counters are computed from the
//! surface, the goal is checked, and the surface is saved into the active draft.
//! [`refresh`] is the read-only half, used after the active draft changes without an
//! edit (switch, create, delete) so listing order is not disturbed.

use crate::commands::{CmdMessage, CmdResult, Session, StatsReport};
use crate::error::Result;
use crate::stats::Stats;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;
use tracing::debug;

pub fn refresh<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
) -> Result<StatsReport> {
    let text = session.surface.get_plain_text();
    let stats = Stats::compute(&text, session.config.words_per_minute);
    let status = session.goal.evaluate(session.repo.store(), &stats);
    if let Some(warning) = status.warning {
        session.warnings.push(warning);
    }

    Ok(StatsReport {
        stats,
        word_label: status.label,
        character_label: stats.character_label(),
        reading_label: stats.reading_label(),
        goal_label: session.goal.button_label(),
        notice: status.notice,
    })
}

pub fn recompute<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
) -> Result<CmdResult> {
    let report = refresh(session)?;
    if !session.repo.save_active_draft_content(&session.surface) {
        debug!("no active draft to save into");
    }

    let mut result = CmdResult::default();
    attach(&mut result, report);
    session.flush_warnings(&mut result);
    Ok(result)
}

/// `aesthete stats`: report counters for the active draft.
pub fn run<S: KeyValueStore, E: EditingSurface>(session: &mut Session<S, E>) -> Result<CmdResult> {
    let report = refresh(session)?;
    let mut result = CmdResult::default();
    attach(&mut result, report);
    session.flush_warnings(&mut result);
    Ok(result)
}

/// Adds the report to a result, announcing a reached goal.
pub(crate) fn attach(result: &mut CmdResult, report: StatsReport) {
    if let Some(notice) = &report.notice {
        result.add_message(CmdMessage::success(notice.message()));
    }
    result.stats = Some(report);
}
