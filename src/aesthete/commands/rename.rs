use crate::commands::{helpers::resolve_draft, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

pub fn run<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    selector: &str,
    new_name: &str,
) -> Result<CmdResult> {
    let id = resolve_draft(&session.repo, selector)?;
    let old_name = session
        .repo
        .get(&id)
        .map(|d| d.name.clone())
        .unwrap_or_default();

    session.repo.rename_draft(&id, new_name)?;

    let mut result = CmdResult::default();
    if let Some(draft) = session.repo.get(&id) {
        result.add_message(CmdMessage::success(format!(
            "Renamed {} to {}",
            old_name, draft.name
        )));
        result.affected_drafts.push(draft.clone());
    }
    session.flush_warnings(&mut result);
    Ok(result)
}
