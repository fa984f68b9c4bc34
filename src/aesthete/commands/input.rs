use crate::commands::{stats, CmdResult, Session};
use crate::error::Result;
use crate::html;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Plain text, escaped and with newlines turned into `<br>`.
    Text,
    /// Surface HTML, taken as is.
    Html,
}

/// Replaces the surface content and runs the content-change path.
pub fn run<S: KeyValueStore, E: EditingSurface>(
    session: &mut Session<S, E>,
    content: &str,
    format: InputFormat,
) -> Result<CmdResult> {
    let markup = match format {
        InputFormat::Text => html::text_to_html(content),
        InputFormat::Html => content.to_string(),
    };

    session.surface.set_html(&markup);
    session.selection = None;
    stats::recompute(session)
}
