use crate::error::{AestheteError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const EDIT_FILENAME: &str = "aesthete_edit.html";

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        match env::var(var) {
            Ok(editor) if !editor.trim().is_empty() => return Ok(editor),
            _ => {}
        }
    }

    ["vim", "vi", "nano"]
        .into_iter()
        .find(|fallback| {
            Command::new("which")
                .arg(fallback)
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
        })
        .map(str::to_string)
        .ok_or_else(|| {
            AestheteError::Api("No editor found. Set $EDITOR environment variable.".to_string())
        })
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| AestheteError::Api("Empty editor command".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| AestheteError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(AestheteError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Edits draft HTML in the external editor and returns the new HTML.
pub fn edit_html(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(EDIT_FILENAME);
    fs::write(&temp_file, initial)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(strip_editor_newline(&result?))
}

/// Most editors terminate the file with a newline the draft never had.
fn strip_editor_newline(buffer: &str) -> String {
    buffer
        .strip_suffix("\r\n")
        .or_else(|| buffer.strip_suffix('\n'))
        .unwrap_or(buffer)
        .to_string()
}
