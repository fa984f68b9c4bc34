//! The editing surface is the editable region a draft is mirrored into.
//!
//! The core only ever talks to it through [`EditingSurface`]: it reads the serialized
//! HTML, replaces it, and asks for the rendered plain text. Formatting commands, caret
//! handling and everything else about editing belong to the surface implementation.

use crate::html;

pub trait EditingSurface {
    /// Serialized content of the surface.
    fn get_html(&self) -> String;

    /// Replaces the entire content.
    fn set_html(&mut self, html: &str);

    /// Rendered text, used for statistics and search counts.
    fn get_plain_text(&self) -> String;
}

/// An in-memory surface holding an HTML fragment.
///
/// Used by the command-line client, where "editing" means replacing the buffer with
/// the output of `$EDITOR`, stdin or an imported file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSurface {
    html: String,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl EditingSurface for BufferSurface {
    fn get_html(&self) -> String {
        self.html.clone()
    }

    fn set_html(&mut self, html: &str) {
        self.html = html.to_string();
    }

    fn get_plain_text(&self) -> String {
        html::to_plain_text(&self.html)
    }
}
