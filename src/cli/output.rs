// Output formatting utilities

use std::io::IsTerminal;
use serde::Serialize;
use crate::models::{ClassificationResult, Locale, StatusCategory, StatusDefinition, StatusKey};
use crate::status::StatusSummary;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

// ANSI foreground colors (standard 16-color palette)
const ANSI_FG_BLACK: &str = "\x1b[30m";
const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_WHITE: &str = "\x1b[37m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";
const ANSI_FG_BRIGHT_RED: &str = "\x1b[91m";
const ANSI_FG_BRIGHT_GREEN: &str = "\x1b[92m";
const ANSI_FG_BRIGHT_YELLOW: &str = "\x1b[93m";
const ANSI_FG_BRIGHT_BLUE: &str = "\x1b[94m";
const ANSI_FG_BRIGHT_MAGENTA: &str = "\x1b[95m";
const ANSI_FG_BRIGHT_CYAN: &str = "\x1b[96m";
const ANSI_FG_BRIGHT_WHITE: &str = "\x1b[97m";

const PROGRESS_BAR_WIDTH: usize = 10;

/// Map a status color tag to its ANSI foreground constant
fn color_name_to_fg(name: &str) -> Option<&'static str> {
    match name {
        "black" => Some(ANSI_FG_BLACK),
        "red" => Some(ANSI_FG_RED),
        "green" => Some(ANSI_FG_GREEN),
        "yellow" => Some(ANSI_FG_YELLOW),
        "blue" => Some(ANSI_FG_BLUE),
        "magenta" => Some(ANSI_FG_MAGENTA),
        "cyan" => Some(ANSI_FG_CYAN),
        "white" => Some(ANSI_FG_WHITE),
        "bright_black" => Some(ANSI_FG_BRIGHT_BLACK),
        "bright_red" => Some(ANSI_FG_BRIGHT_RED),
        "bright_green" => Some(ANSI_FG_BRIGHT_GREEN),
        "bright_yellow" => Some(ANSI_FG_BRIGHT_YELLOW),
        "bright_blue" => Some(ANSI_FG_BRIGHT_BLUE),
        "bright_magenta" => Some(ANSI_FG_BRIGHT_MAGENTA),
        "bright_cyan" => Some(ANSI_FG_BRIGHT_CYAN),
        "bright_white" => Some(ANSI_FG_BRIGHT_WHITE),
        _ => None,
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Wrap text in the ANSI color for a status color tag
/// Unknown tags and disabled color leave the text as-is
pub fn colorize(text: &str, color_tag: &str, enabled: bool) -> String {
    match color_name_to_fg(color_tag) {
        Some(fg) if enabled => format!("{}{}{}", fg, text, ANSI_RESET),
        _ => text.to_string(),
    }
}

fn bold(text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Text progress bar, e.g. `[######----]`
pub fn progress_bar(progress: u8) -> String {
    let filled = (progress.min(100) as usize * PROGRESS_BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(PROGRESS_BAR_WIDTH - filled))
}

/// One classified input, as emitted by `classify --json`
#[derive(Debug, Serialize)]
pub struct ClassifiedRecord<'a> {
    pub input: &'a str,
    #[serde(flatten)]
    pub result: ClassificationResult,
    pub active: bool,
    pub completed: bool,
    pub cancelable: bool,
}

impl<'a> ClassifiedRecord<'a> {
    pub fn new(input: &'a str, key: StatusKey, locale: Locale) -> Self {
        Self {
            input,
            result: crate::status::classify_in(key, locale),
            active: key.is_active(),
            completed: key.is_completed(),
            cancelable: key.can_cancel(),
        }
    }
}

/// Human-readable classification line
/// `picked_up -> PICKED_UP  Recogido  in_progress  [######----] 60%  active`
pub fn format_classification(record: &ClassifiedRecord<'_>, color: bool) -> String {
    let result = &record.result;
    let mut flags = Vec::new();
    if record.active {
        flags.push("active");
    }
    if record.completed {
        flags.push("completed");
    }
    if record.cancelable {
        flags.push("cancelable");
    }
    let flags = if flags.is_empty() { "-".to_string() } else { flags.join(",") };

    format!(
        "{} -> {}  {}  {}  {} {}%  {}",
        record.input.trim(),
        colorize(result.status.as_str(), result.color, color),
        result.label,
        result.category,
        progress_bar(result.progress),
        result.progress,
        flags
    )
}

/// Catalog table in workflow order
pub fn format_status_table(defs: &[&StatusDefinition], locale: Locale, color: bool) -> String {
    let headers = ["KEY", "LABEL", "CATEGORY", "PROGRESS", "TERMINAL", "ICON"];
    let rows: Vec<[String; 6]> = defs
        .iter()
        .map(|def| {
            [
                def.key.as_str().to_string(),
                def.label_for(locale).to_string(),
                def.category.to_string(),
                format!("{}%", def.progress),
                if def.is_terminal { "yes".to_string() } else { "no".to_string() },
                def.icon.to_string(),
            ]
        })
        .collect();

    // Column widths by character count (labels may be non-ASCII)
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let pad = |text: &str, width: usize| -> String {
        let len = text.chars().count();
        format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
    };

    let mut out = String::new();
    let header_line: Vec<String> = headers.iter().enumerate().map(|(i, h)| pad(h, widths[i])).collect();
    out.push_str(&bold(header_line.join("  ").trim_end(), color));
    out.push('\n');

    for (def, row) in defs.iter().zip(&rows) {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let padded = pad(cell, widths[i]);
                if i == 0 { colorize(&padded, def.color, color) } else { padded }
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

/// Per-category counts for `summary`
pub fn format_summary(summary: &StatusSummary, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold(&format!("{} statuses", summary.total), color));
    out.push('\n');

    for category in StatusCategory::ALL {
        out.push_str(&format!("  {:<12} {}\n", category.as_str(), summary.count(category)));
    }
    out.push_str(&format!("  {:<12} {}\n", "active", summary.active()));

    if !summary.by_status.is_empty() {
        out.push('\n');
        for (key, count) in &summary.by_status {
            out.push_str(&format!(
                "  {:<18} {}\n",
                colorize(key.as_str(), key.definition().color, color),
                count
            ));
        }
    }

    if summary.fallbacks > 0 {
        let names: Vec<&str> = summary.unrecognized.iter().map(|s| s.as_str()).collect();
        out.push('\n');
        out.push_str(&format!(
            "{} unrecognized (counted as {}): {}\n",
            summary.fallbacks,
            StatusKey::Pending,
            names.join(", ")
        ));
    }

    out
}
