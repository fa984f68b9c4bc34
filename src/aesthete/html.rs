//! Minimal HTML fragment handling for draft content.
//!
//! Draft content is whatever the editing surface serialized: short fragments made of
//! text, `<div>`/`<p>` blocks, `<br>` and a handful of inline formatting tags. This
//! module does not build a DOM. It splits a fragment into tag and text tokens, which is
//! all that previews, plain-text extraction, search and markdown export need.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Event, Options, Parser};
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

const BLOCK_TAGS: &[&str] = &[
    "div", "p", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Tag {
        /// Lowercased element name; empty for comments and doctypes.
        name: String,
        closing: bool,
        raw: &'a str,
    },
}

/// Splits an HTML fragment into tags and the text between them.
///
/// A `<` only opens a tag when followed by a letter, `/` or `!`, so stray `<` in text
/// (e.g. `a < b`) stays text. An unterminated tag is treated as text.
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = html.as_bytes();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'<' && i + 1 < bytes.len() {
            let next = bytes[i + 1];
            if next.is_ascii_alphabetic() || next == b'/' || next == b'!' {
                if let Some(rel_end) = html[i..].find('>') {
                    if text_start < i {
                        tokens.push(Token::Text(&html[text_start..i]));
                    }
                    let end = i + rel_end + 1;
                    let raw = &html[i..end];
                    let (name, closing) = parse_tag(raw);
                    tokens.push(Token::Tag { name, closing, raw });
                    i = end;
                    text_start = end;
                    continue;
                }
            }
        }
        i += 1;
    }

    if text_start < html.len() {
        tokens.push(Token::Text(&html[text_start..]));
    }
    tokens
}

fn parse_tag(raw: &str) -> (String, bool) {
    let inner = raw.trim_start_matches('<').trim_end_matches('>');
    if inner.starts_with('!') {
        return (String::new(), false);
    }
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let name: String = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    (name, closing)
}

pub fn is_block_tag(name: &str) -> bool {
    BLOCK_TAGS.contains(&name)
}

/// Removes every tag, leaving raw (still entity-encoded) text.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Decodes the named entities the editing surface emits, plus numeric references.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    decode_with_offsets(text).0
}

/// Decodes `text` and maps every byte of the result back to where it came from.
///
/// The map has one entry per decoded byte plus one for the end, so a decoded range
/// `a..b` is `map[a]..map[b]` in `text`. An entity decodes to a single character whose
/// bytes all map to the start of its `&...;` span.
pub fn decode_with_offsets(text: &str) -> (String, Vec<usize>) {
    let mut out = String::with_capacity(text.len());
    let mut map = Vec::with_capacity(text.len() + 1);
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        let (c, consumed) = match entity_at(rest) {
            Some(decoded) => decoded,
            None => match rest.chars().next() {
                Some(c) => (c, c.len_utf8()),
                None => break,
            },
        };
        map.extend(std::iter::repeat(i).take(c.len_utf8()));
        out.push(c);
        i += consumed;
    }

    map.push(text.len());
    (out, map)
}

/// The character and byte length of an entity at the start of `text`, if any.
fn entity_at(text: &str) -> Option<(char, usize)> {
    if !text.starts_with('&') {
        return None;
    }
    let semi = text.find(';').filter(|semi| *semi <= 10)?;
    decode_entity(&text[1..semi]).map(|c| (c, semi + 1))
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Plain text to surface HTML: escaped, with line breaks as `<br>`.
pub fn text_to_html(text: &str) -> String {
    escape_html(text).replace("\r\n", "\n").replace('\n', "<br>")
}

/// Approximates what a browser reports as the rendered text of a fragment.
///
/// `<br>` becomes a newline, block elements start and end on their own line, every
/// other tag is dropped and entities are decoded.
pub fn to_plain_text(html: &str) -> String {
    let mut out = String::new();

    for token in tokenize(html) {
        match token {
            Token::Text(text) => out.push_str(&decode_entities(text)),
            Token::Tag { name, .. } if name == "br" => out.push('\n'),
            Token::Tag { name, .. } if is_block_tag(&name) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Token::Tag { .. } => {}
        }
    }

    out
}

/// Converts imported markdown to surface HTML.
///
/// Single newlines are kept as line breaks, as a writer would expect from a text file,
/// rather than being folded into the paragraph.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoded_offsets_cover_whole_entities() {
        let (text, map) = decode_with_offsets("a &amp; b&#233;");
        assert_eq!(text, "a & b\u{e9}");
        assert_eq!(map[2], 2);
        assert_eq!(map[3], 7);
        assert_eq!(map[5], 9);
        assert_eq!(map[6], 9);
        assert_eq!(map[text.len()], 15);
    }

    #[test]
    fn unknown_entities_stay_literal() {
        let (text, map) = decode_with_offsets("&bogus; &");
        assert_eq!(text, "&bogus; &");
        assert_eq!(map.len(), text.len() + 1);
    }

    #[test]
    fn tokenize_splits_tags_and_text() {
        let tokens = tokenize("a<b>bold</b>");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], Token::Text("a"));
        assert!(matches!(&tokens[1], Token::Tag { name, closing: false, .. } if name == "b"));
        assert_eq!(tokens[2], Token::Text("bold"));
        assert!(matches!(&tokens[3], Token::Tag { name, closing: true, .. } if name == "b"));
    }

    #[test]
    fn tokenize_keeps_stray_angle_brackets_as_text() {
        let tokens = tokenize("1 < 2 and 3 > 2");
        assert_eq!(tokens, vec![Token::Text("1 < 2 and 3 > 2")]);
    }

    #[test]
    fn tokenize_reads_attributes_and_self_closing() {
        let tokens = tokenize(r#"<div class="x">hi<br/></div>"#);
        assert!(matches!(&tokens[0], Token::Tag { name, .. } if name == "div"));
        assert!(matches!(&tokens[2], Token::Tag { name, closing: false, .. } if name == "br"));
    }

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(strip_tags("<div>Hello <b>world</b></div>"), "Hello world");
    }

    #[test]
    fn decode_common_entities() {
        assert_eq!(decode_entities("a &amp; b &lt;c&gt;"), "a & b <c>");
        assert_eq!(decode_entities("&#65;&#x42;"), "AB");
        assert_eq!(decode_entities("x&nbsp;y"), "x\u{a0}y");
    }

    #[test]
    fn decode_leaves_unknown_entities() {
        assert_eq!(decode_entities("AT&T & co"), "AT&T & co");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
    }

    #[test]
    fn plain_text_of_div_lines() {
        assert_eq!(to_plain_text("first<div>second</div><div>third</div>"), "first\nsecond\nthird\n");
    }

    #[test]
    fn plain_text_of_breaks_and_entities() {
        assert_eq!(to_plain_text("one<br>two &amp; three"), "one\ntwo & three");
    }

    #[test]
    fn text_to_html_escapes_and_breaks() {
        assert_eq!(text_to_html("a < b\nc"), "a &lt; b<br>c");
    }

    #[test]
    fn markdown_import_renders_emphasis_and_breaks() {
        let html = markdown_to_html("**bold** and _it_\nnext");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>it</em>"));
        assert!(html.contains("<br />"));
    }
}
