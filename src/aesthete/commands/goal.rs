use crate::commands::{stats, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

#[derive(Debug, Clone)]
pub enum GoalAction {
    Show,
    Set(String),
    Clear,
}

pub fn run<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    action: GoalAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        GoalAction::Show => {}
        GoalAction::Set(input) => {
            let goal = session.goal.set_from_input(session.repo.store(), &input)?;
            result.add_message(CmdMessage::success(format!("Goal set to {} words.", goal)));
        }
        GoalAction::Clear => {
            session.goal.clear(session.repo.store())?;
            result.add_message(CmdMessage::success("Goal cleared."));
        }
    }

    // A goal below the current count is reached right away
    let report = stats::refresh(session)?;
    result.add_message(CmdMessage::info(report.goal_label.clone()));
    stats::attach(&mut result, report);
    session.flush_warnings(&mut result);
    Ok(result)
}
