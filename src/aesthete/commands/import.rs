use crate::commands::{stats, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::draft_name_from_filename;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;
use std::fs;
use std::path::Path;

/// Creates a new active draft from raw text, stored verbatim.
pub fn run<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    raw_text: &str,
    suggested_name: &str,
) -> Result<CmdResult> {
    let id = session
        .repo
        .import_draft(&mut session.surface, raw_text, suggested_name)?;
    session.selection = None;

    let mut result = CmdResult::default();
    if let Some(draft) = session.repo.get(&id) {
        result.add_message(CmdMessage::success(format!("Imported {}", draft.name)));
        result.affected_drafts.push(draft.clone());
    }

    let report = stats::refresh(session)?;
    stats::attach(&mut result, report);
    session.flush_warnings(&mut result);
    Ok(result)
}

/// Imports a file, naming the draft after the file without its extension.
pub fn run_file<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    path: &Path,
) -> Result<CmdResult> {
    let raw = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .and_then(|n| draft_name_from_filename(&n.to_string_lossy()))
        .unwrap_or_default();

    run(session, &raw, &name)
}
