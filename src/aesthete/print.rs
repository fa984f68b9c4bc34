use aesthete::api::{CmdMessage, MessageLevel, StatsReport};
use aesthete::listing::DraftRow;
use aesthete::search::{MatchSegment, SearchMatch};
use aesthete::settings::Settings;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const DATE_WIDTH: usize = 11;
const ACTIVE_MARKER: &str = "●";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_drafts(rows: &[DraftRow]) {
    if rows.is_empty() {
        println!("No drafts yet.");
        return;
    }

    let now = Utc::now().timestamp_millis();
    for row in rows {
        let marker = if row.is_active {
            format!("  {} ", ACTIVE_MARKER)
        } else {
            "    ".to_string()
        };
        let idx_str = format!("{}. ", row.position);

        let time_ago = format_time_ago(now, row.updated);
        let fixed = marker.width() + idx_str.width() + DATE_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let preview: String = row
            .preview
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        let name_width = row.name.width();
        let name = truncate_to_width(&row.name, available);
        let rest = available.saturating_sub(name_width + 1);
        let preview = if name_width + 1 < available {
            truncate_to_width(&preview, rest)
        } else {
            String::new()
        };

        let used = name.width() + if preview.is_empty() { 0 } else { 1 + preview.width() };
        let padding = available.saturating_sub(used);

        let (marker, idx, name) = if row.is_active {
            (marker.green(), idx_str.green(), name.bold())
        } else {
            (marker.normal(), idx_str.normal(), name.normal())
        };

        println!(
            "{}{}{}{}{}{}{}",
            marker,
            idx,
            name,
            if preview.is_empty() {
                String::new()
            } else {
                format!(" {}", preview.dimmed())
            },
            " ".repeat(padding),
            format!("{:>width$}", row.date, width = DATE_WIDTH).dimmed(),
            time_ago.dimmed()
        );
    }
}

pub(crate) fn print_stats(report: &StatsReport) {
    println!(
        "{}  {}  {}  {}",
        report.word_label.bold(),
        report.character_label,
        report.reading_label,
        report.goal_label.dimmed()
    );
}

pub(crate) fn print_matches(matches: &[SearchMatch]) {
    for m in matches {
        let mut line = format!("{:>4}  ", m.line_number).dimmed().to_string();
        for segment in &m.segments {
            match segment {
                MatchSegment::Plain(text) => line.push_str(text),
                MatchSegment::Match(text) => line.push_str(&text.yellow().bold().to_string()),
            }
        }
        println!("{}", line);
    }
}

pub(crate) fn print_settings(settings: &Settings) {
    println!("theme       = {}", settings.theme);
    println!(
        "font size   = {}",
        settings.font_size.as_deref().map_or("default".to_string(), |v| format!("{}px", v))
    );
    println!(
        "line height = {}",
        settings.line_height.as_deref().unwrap_or("default")
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

fn format_time_ago(now_ms: i64, updated_ms: i64) -> String {
    let elapsed = match (
        DateTime::<Utc>::from_timestamp_millis(now_ms),
        DateTime::<Utc>::from_timestamp_millis(updated_ms),
    ) {
        (Some(now), Some(then)) => now.signed_duration_since(then).to_std().unwrap_or_default(),
        _ => Default::default(),
    };

    let time_str = Formatter::new().convert(elapsed);
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
