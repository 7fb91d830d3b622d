//! Formatting utilities used for CLI outputs.

use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthChar;

/// Emphasize a statistic value in report lines.
pub fn highlight<T: ToString>(value: T) -> String {
    Colour::Yellow.bold().paint(value.to_string()).to_string()
}

pub fn dimmed(s: &str) -> String {
    Colour::Fixed(8).paint(s).to_string()
}

fn ansi_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok())
        .as_ref()
}

pub fn strip_ansi(s: &str) -> String {
    match ansi_regex() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Pad on the right to `width` visible columns (ANSI codes ignored).
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = unicode_width::UnicodeWidthStr::width(strip_ansi(s).as_str());
    format!("{s}{}", " ".repeat(width.saturating_sub(visible)))
}

/// Cut `s` to at most `max` visible columns, ending with `…` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// "1 trip", "3 trips"
pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Hour of day as shown in reports, e.g. "17:00"
pub fn hour_label(hour: u32) -> String {
    format!("{hour}:00")
}
