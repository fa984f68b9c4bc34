//! Find and replace over draft content.
//!
//! Matching is literal and case-insensitive. Searches run over the decoded text nodes of
//! the HTML fragment, so markup and entity names are never matched or rewritten, and a
//! match never spans two text nodes. Ranges are byte offsets into the HTML string, which
//! is what a selection on the surface refers to; a match on `&` covers all of `&amp;`.

use crate::html::{self, Token};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A segment of text in a search match, either plain text or a matched term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchSegment {
    Plain(String),
    Match(String),
}

/// A line of plain text containing at least one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub line_number: usize,
    pub segments: Vec<MatchSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub html: String,
    /// Range the inserted text occupies in the new HTML.
    pub replaced: Range<usize>,
    /// The following match, if any, so repeated replaces walk the document.
    pub next: Option<Range<usize>>,
}

fn matcher(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

pub fn count_matches(text: &str, query: &str) -> usize {
    matcher(query).map_or(0, |re| re.find_iter(text).count())
}

pub fn count_label(count: usize) -> String {
    if count > 0 {
        format!("Matches: {}", count)
    } else {
        "0/0".to_string()
    }
}

/// All matches of `query` inside the text nodes of `html`, in document order.
pub fn html_matches(html: &str, query: &str) -> Vec<Range<usize>> {
    let Some(re) = matcher(query) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    let mut offset = 0;
    for token in html::tokenize(html) {
        match token {
            Token::Text(text) => {
                found.extend(
                    text_matches(&re, text)
                        .into_iter()
                        .map(|m| offset + m.start..offset + m.end),
                );
                offset += text.len();
            }
            Token::Tag { raw, .. } => offset += raw.len(),
        }
    }
    found
}

/// Matches in one raw text node, as ranges of the raw (entity-encoded) text.
fn text_matches(re: &Regex, raw: &str) -> Vec<Range<usize>> {
    let (decoded, map) = html::decode_with_offsets(raw);
    re.find_iter(&decoded)
        .map(|m| map[m.start()]..map[m.end()])
        .collect()
}

/// Finds the next match relative to the current selection, wrapping around.
///
/// Forward search starts at the end of the selection (or the start of the document);
/// backward search ends at the start of the selection (or the end of the document).
pub fn find(
    html: &str,
    query: &str,
    selection: Option<Range<usize>>,
    direction: Direction,
) -> Option<Range<usize>> {
    let matches = html_matches(html, query);
    let selection = selection.filter(|s| html.get(s.clone()).is_some());

    match direction {
        Direction::Forward => {
            let from = selection.map_or(0, |s| s.end);
            matches
                .iter()
                .find(|m| m.start >= from)
                .or_else(|| matches.first())
                .cloned()
        }
        Direction::Backward => {
            let from = selection.map_or(html.len(), |s| s.start);
            matches
                .iter()
                .rev()
                .find(|m| m.end <= from)
                .or_else(|| matches.last())
                .cloned()
        }
    }
}

/// Replaces the selected match, or the next match after the selection.
///
/// Returns `None` when the document holds no match at all.
pub fn replace_current(
    html: &str,
    query: &str,
    replacement: &str,
    selection: Option<Range<usize>>,
) -> Option<Replacement> {
    let matches = html_matches(html, query);
    let target = match selection {
        Some(sel) if matches.contains(&sel) => sel,
        other => find(html, query, other, Direction::Forward)?,
    };

    let escaped = html::escape_html(replacement);
    let mut new_html = String::with_capacity(html.len() + escaped.len());
    new_html.push_str(&html[..target.start]);
    new_html.push_str(&escaped);
    new_html.push_str(&html[target.end..]);

    let replaced = target.start..target.start + escaped.len();
    let caret = replaced.end;
    let next = find(&new_html, query, Some(caret..caret), Direction::Forward);

    Some(Replacement {
        html: new_html,
        replaced,
        next,
    })
}

/// Replaces every match in the text nodes of `html`. Returns the new HTML and the
/// number of replacements.
pub fn replace_all(html: &str, query: &str, replacement: &str) -> (String, usize) {
    let Some(re) = matcher(query) else {
        return (html.to_string(), 0);
    };

    let escaped = html::escape_html(replacement);
    let mut count = 0;
    let mut out = String::with_capacity(html.len());

    for token in html::tokenize(html) {
        match token {
            Token::Text(text) => {
                let mut last = 0;
                for m in text_matches(&re, text) {
                    out.push_str(&text[last..m.start]);
                    out.push_str(&escaped);
                    last = m.end;
                    count += 1;
                }
                out.push_str(&text[last..]);
            }
            Token::Tag { raw, .. } => out.push_str(raw),
        }
    }

    (out, count)
}

/// Splits each matching line of plain text into plain and matched segments.
pub fn line_matches(text: &str, query: &str) -> Vec<SearchMatch> {
    let Some(re) = matcher(query) else {
        return Vec::new();
    };

    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let mut segments = Vec::new();
            let mut last = 0;
            for m in re.find_iter(line) {
                if m.start() > last {
                    segments.push(MatchSegment::Plain(line[last..m.start()].to_string()));
                }
                segments.push(MatchSegment::Match(m.as_str().to_string()));
                last = m.end();
            }
            if segments.is_empty() {
                return None;
            }
            if last < line.len() {
                segments.push(MatchSegment::Plain(line[last..].to_string()));
            }
            Some(SearchMatch {
                line_number: i + 1,
                segments,
            })
        })
        .collect()
}
