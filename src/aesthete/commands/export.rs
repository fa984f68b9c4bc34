use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::{AestheteError, Result};
use crate::export::{self, MARKDOWN_FILENAME, TEXT_FILENAME};
use crate::model::Draft;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;
use chrono::Local;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Destination meaning "write to stdout".
pub const STDOUT: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Text,
    Archive,
}

/// Renders the active draft as markdown or plain text.
pub fn render<S: KeyValueStore, E: EditingSurface>(session: &Session<S, E>, markdown: bool) -> String {
    if markdown {
        export::html_to_markdown(&session.surface.get_html())
    } else {
        session.surface.get_plain_text()
    }
}

pub fn run<S: KeyValueStore, E: EditingSurface>(
    session: &Session<S, E>,
    format: ExportFormat,
    destination: Option<&Path>,
) -> Result<CmdResult> {
    let (content, default_name) = match format {
        ExportFormat::Markdown => (render(session, true), MARKDOWN_FILENAME),
        ExportFormat::Text => (render(session, false), TEXT_FILENAME),
        ExportFormat::Archive => return archive(session, destination),
    };

    let path = destination.unwrap_or_else(|| Path::new(default_name));
    if path == Path::new(STDOUT) {
        return Ok(CmdResult::default().with_output(content));
    }

    fs::write(path, content)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Exported to {}", path.display())));
    Ok(result)
}

fn archive<S: KeyValueStore, E: EditingSurface>(
    session: &Session<S, E>,
    destination: Option<&Path>,
) -> Result<CmdResult> {
    let path: PathBuf = match destination {
        Some(p) if p == Path::new(STDOUT) => {
            return Err(AestheteError::Api(
                "Archives cannot be written to stdout".to_string(),
            ))
        }
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(export::archive_filename(Local::now())),
    };

    let drafts = with_live_content(session);
    export::write_archive(File::create(&path)?, &drafts)?;

    let mut result = CmdResult::default().with_affected_drafts(drafts);
    result.add_message(CmdMessage::success(format!(
        "Exported {} drafts to {}",
        result.affected_drafts.len(),
        path.display()
    )));
    Ok(result)
}

/// Drafts as stored, with the active one carrying the surface's current content.
fn with_live_content<S: KeyValueStore, E: EditingSurface>(session: &Session<S, E>) -> Vec<Draft> {
    let active = session.repo.active_id();
    session
        .repo
        .drafts()
        .iter()
        .map(|d| {
            let mut draft = d.clone();
            if Some(d.id.as_str()) == active {
                draft.content = session.surface.get_html();
            }
            draft
        })
        .collect()
}
