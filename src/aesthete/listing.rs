//! Draft list projection.
//!
//! Rows are derived from repository state on every call and hold no state of their
//! own. Display order is most-recently-updated first; the 1-based `position` is what
//! the command line accepts as a draft selector.

use crate::html;
use crate::model::Draft;
use chrono::{DateTime, Local};
use serde::Serialize;

pub const DEFAULT_PREVIEW_LENGTH: usize = 40;
pub const EMPTY_PREVIEW: &str = "Empty draft...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftRow {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub preview: String,
    pub date: String,
    pub updated: i64,
    pub is_active: bool,
}

pub fn draft_rows(drafts: &[Draft], active_id: Option<&str>, preview_length: usize) -> Vec<DraftRow> {
    let mut sorted: Vec<&Draft> = drafts.iter().collect();
    sorted.sort_by(|a, b| b.updated.cmp(&a.updated));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, draft)| DraftRow {
            position: i + 1,
            id: draft.id.clone(),
            name: draft.name.clone(),
            preview: preview(&draft.content, preview_length),
            date: format_date(draft.updated),
            updated: draft.updated,
            is_active: active_id == Some(draft.id.as_str()),
        })
        .collect()
}

/// Tag-stripped start of the content, at most `length` characters.
pub fn preview(content: &str, length: usize) -> String {
    let text: String = html::strip_tags(content).chars().take(length).collect();
    if text.is_empty() {
        EMPTY_PREVIEW.to_string()
    } else {
        text
    }
}

/// Local calendar date of a millisecond timestamp.
pub fn format_date(updated: i64) -> String {
    match DateTime::from_timestamp_millis(updated) {
        Some(utc) => utc.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}
