use crate::commands::{helpers::resolve_draft, stats, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::Draft;
use crate::repository::DeleteOutcome;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

/// Deletes the selected draft once `confirm` agrees.
pub fn run<S, E, F>(session: &mut Session<S, E>, selector: &str, confirm: F) -> Result<CmdResult>
where
    S: KeyValueStore,
    E: EditingSurface,
    F: FnOnce(&Draft) -> bool,
{
    let id = resolve_draft(&session.repo, selector)?;
    let outcome = session.repo.delete_draft(&mut session.surface, &id, confirm)?;

    let mut result = CmdResult::default();
    match outcome {
        DeleteOutcome::Cancelled => {
            result.add_message(CmdMessage::info("Delete cancelled."));
            return Ok(result);
        }
        DeleteOutcome::Deleted {
            draft,
            reassigned_to,
        } => {
            result.add_message(CmdMessage::success(format!("Deleted {}", draft.name)));
            if let Some(next) = reassigned_to.as_deref().and_then(|id| session.repo.get(id)) {
                result.add_message(CmdMessage::info(format!("Now editing {}", next.name)));
                session.selection = None;
            }
            result.affected_drafts.push(draft);
        }
    }

    let report = stats::refresh(session)?;
    stats::attach(&mut result, report);
    session.flush_warnings(&mut result);
    Ok(result)
}
