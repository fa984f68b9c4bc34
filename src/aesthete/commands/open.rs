use crate::commands::{input, CmdMessage, CmdResult, Session};
use crate::error::{AestheteError, Result};
use crate::html;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;
use std::fs;
use std::path::Path;

/// Loads a markdown or text file into the active draft, replacing its content.
///
/// Only extensions listed in `import_extensions` are accepted.
pub fn run<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    path: &Path,
) -> Result<CmdResult> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !session.config.accepts_file(&filename) {
        return Err(AestheteError::UnsupportedFile(filename));
    }

    let raw = fs::read_to_string(path)?;
    let markup = html::markdown_to_html(&raw);
    let mut result = input::run(session, &markup, input::InputFormat::Html)?;

    let target = session
        .active_draft()
        .map(|d| d.name.clone())
        .unwrap_or_default();
    result.add_message(CmdMessage::success(format!(
        "Opened {} into {}",
        filename, target
    )));
    Ok(result)
}
