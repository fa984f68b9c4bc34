//! Conversions of draft content for download, copy and archiving.

use crate::error::Result;
use crate::html::{self, Token};
use crate::model::Draft;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

pub const MARKDOWN_FILENAME: &str = "document.md";
pub const TEXT_FILENAME: &str = "document.txt";

/// Basic HTML to markdown conversion of surface content.
///
/// Opening `div`/`p` tags and `<br>` become newlines, bold and italic become `**` and
/// `_`, underline is kept as `<ins>`. Every other tag is dropped and entities are
/// decoded. Leading newlines from a block-wrapped first line are trimmed.
pub fn html_to_markdown(content: &str) -> String {
    let mut out = String::with_capacity(content.len());

    for token in html::tokenize(content) {
        match token {
            Token::Text(text) => out.push_str(&html::decode_entities(text)),
            Token::Tag { name, closing, .. } => match (name.as_str(), closing) {
                ("div" | "p", false) | ("br", _) => out.push('\n'),
                ("b" | "strong", _) => out.push_str("**"),
                ("i" | "em", _) => out.push('_'),
                ("u", false) => out.push_str("<ins>"),
                ("u", true) => out.push_str("</ins>"),
                _ => {}
            },
        }
    }

    out.trim_start_matches('\n').to_string()
}

pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.trim() {
        "" => "draft".to_string(),
        trimmed => trimmed.to_string(),
    }
}

pub fn archive_filename(now: chrono::DateTime<chrono::Local>) -> String {
    format!("aesthete-{}.tar.gz", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes every draft as a markdown file into a gzipped tarball.
pub fn write_archive<W: Write>(writer: W, drafts: &[Draft]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for draft in drafts {
        let prefix: String = draft.id.chars().take(8).collect();
        let entry_name = format!(
            "aesthete/{}-{}.md",
            sanitize_filename(&draft.name),
            prefix
        );
        let body = html_to_markdown(&draft.content);

        let mut header = tar::Header::new_gnu();
        header.set_size(body.len() as u64);
        header.set_mode(0o644);
        header.set_mtime((draft.updated.max(0) / 1000) as u64);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, body.as_bytes())?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn converts_inline_formatting() {
        let md = html_to_markdown("Some <b>bold</b>, <i>italic</i> and <u>under</u>");
        assert_eq!(md, "Some **bold**, _italic_ and <ins>under</ins>");
    }

    #[test]
    fn strong_and_em_map_like_b_and_i() {
        assert_eq!(html_to_markdown("<strong>a</strong><em>b</em>"), "**a**_b_");
    }

    #[test]
    fn blocks_and_breaks_become_newlines() {
        let md = html_to_markdown("first<div>second</div><div>third<br>fourth</div>");
        assert_eq!(md, "first\nsecond\nthird\nfourth");
    }

    #[test]
    fn leading_block_does_not_start_with_blank_line() {
        assert_eq!(html_to_markdown("<div>Title</div><div>Body</div>"), "Title\nBody");
    }

    #[test]
    fn unknown_tags_dropped_and_entities_decoded() {
        let md = html_to_markdown(r#"<span style="x">Tom &amp; Jerry &lt;3</span>"#);
        assert_eq!(md, "Tom & Jerry <3");
    }

    #[test]
    fn sanitize() {
        assert_eq!(sanitize_filename("Hello World"), "Hello World");
        assert_eq!(sanitize_filename("foo/bar"), "foo_bar");
        assert_eq!(sanitize_filename("baz\\qux"), "baz_qux");
        assert_eq!(sanitize_filename("   "), "draft");
    }

    #[test]
    fn archive_contains_every_draft_as_markdown() {
        let drafts = vec![
            Draft {
                id: "0190abcd-1111".into(),
                name: "Chapter: One".into(),
                content: "<b>Hi</b>".into(),
                updated: 1_700_000_000_000,
            },
            Draft {
                id: "d2".into(),
                name: "Two".into(),
                content: "plain".into(),
                updated: 0,
            },
        ];

        let mut buf = Vec::new();
        write_archive(&mut buf, &drafts).unwrap();
        assert_eq!(buf[0], 0x1f);
        assert_eq!(buf[1], 0x8b);

        let mut archive = tar::Archive::new(GzDecoder::new(buf.as_slice()));
        let mut entries: Vec<(String, String)> = archive
            .entries()
            .unwrap()
            .map(|entry| {
                let mut entry = entry.unwrap();
                let path = entry.path().unwrap().to_string_lossy().into_owned();
                let mut body = String::new();
                entry.read_to_string(&mut body).unwrap();
                (path, body)
            })
            .collect();
        entries.sort();

        assert_eq!(
            entries,
            vec![
                ("aesthete/Chapter_ One-0190abcd.md".to_string(), "**Hi**".to_string()),
                ("aesthete/Two-d2.md".to_string(), "plain".to_string()),
            ]
        );
    }
}
