//! ANSI color painting
//!
//! Converts sentinel markers into real color escape sequences and applies the
//! whitespace-change policy: by default a change consisting entirely of
//! whitespace is muted to a reverse-video highlight instead of a loud
//! foreground color; with `show_all_spaces` the first whitespace of such a
//! run is individually wrapped in reverse-video so the edit cannot hide; in
//! `highlight` mode everything is reverse-video already and no further
//! whitespace logic applies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RenderConfig;
use crate::markup::{ADD_START, CHANGE_START, DELETE_START, SPAN_END, TAB_MARKER};

const ESC: char = '\u{1b}';

/// Reset to default attributes.
pub const RESET: &str = "\x1b[m";

const RED: &str = "\x1b[0;31m";
const GREEN: &str = "\x1b[0;32m";
const YELLOW: &str = "\x1b[0;33m";
const BLUE: &str = "\x1b[0;34m";
const MAGENTA: &str = "\x1b[0;35m";
const CYAN: &str = "\x1b[0;36m";
const RED_BOLD: &str = "\x1b[1;31m";
const GREEN_BOLD: &str = "\x1b[1;32m";
const YELLOW_BOLD: &str = "\x1b[1;33m";

/// Matches a foreground add/delete/change escape whose span content is
/// entirely whitespace, up to the next escape introducer.
static WHITESPACE_ONLY_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{1b}\\[[01];3([123])m(\\s+)(\u{1b}\\[)").unwrap());

/// Plain colors for callers painting their own surrounding output
/// (headers, separators, file metadata).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl PlainColor {
    fn code(self) -> &'static str {
        match self {
            PlainColor::Red => RED,
            PlainColor::Green => GREEN,
            PlainColor::Yellow => YELLOW,
            PlainColor::Blue => BLUE,
            PlainColor::Magenta => MAGENTA,
            PlainColor::Cyan => CYAN,
        }
    }
}

/// Paint a whole string in one color, followed by a reset.
pub fn simple_colorize(s: &str, color: PlainColor) -> String {
    format!("{}{}{}", color.code(), s, RESET)
}

/// Reverse-video ("background") variant of a foreground color code.
fn background(code: &str) -> String {
    code.replace("\x1b[1;", "\x1b[7;").replace("\x1b[0;", "\x1b[7;")
}

/// The add/delete/change color triple selected by the configuration.
fn color_triple(config: &RenderConfig) -> (String, String, String) {
    let (add, delete, change) = if config.no_bold {
        (GREEN, RED, YELLOW)
    } else {
        (GREEN_BOLD, RED_BOLD, YELLOW_BOLD)
    };
    if config.highlight {
        (background(add), background(delete), background(change))
    } else {
        (add.to_string(), delete.to_string(), change.to_string())
    }
}

/// Paint one fully assembled, padded row: substitute markers for escape
/// sequences, then apply the whitespace policy. All-or-nothing per row; the
/// caller validates markup balance before calling.
pub fn colorize(row: &str, config: &RenderConfig) -> String {
    let (add, delete, change) = color_triple(config);

    let mut painted = String::with_capacity(row.len());
    for c in row.chars() {
        match c {
            ADD_START => painted.push_str(&add),
            DELETE_START => painted.push_str(&delete),
            CHANGE_START => painted.push_str(&change),
            SPAN_END => painted.push_str(RESET),
            TAB_MARKER => painted.push(' '),
            c => painted.push(c),
        }
    }

    if config.highlight {
        // every visible change is already reverse-video
        return painted;
    }

    if !config.show_all_spaces {
        return WHITESPACE_ONLY_SPAN
            .replace_all(&painted, "\u{1b}[7;3${1}m${2}${3}")
            .into_owned();
    }

    mark_colored_whitespace(&painted, [add, delete, change])
}

/// Single left-to-right scan making otherwise-invisible whitespace changes
/// visible: while an add/delete/change color is active, the first whitespace
/// of a run not immediately followed by another colored span is wrapped as
/// reset + reverse-video + char + reset + reactivate. One mark per color
/// activation; contiguous whitespace is never double-marked.
fn mark_colored_whitespace(s: &str, colors: [String; 3]) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut active: Option<usize> = None;
    let mut shown = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if c == ESC {
            let seq = read_escape(&chars, i);
            i += seq.chars().count();
            if seq == RESET {
                active = None;
            } else if let Some(idx) = colors.iter().position(|code| **code == seq) {
                if active != Some(idx) {
                    shown = false;
                }
                active = Some(idx);
            }
            out.push_str(&seq);
            continue;
        }

        if let Some(idx) = active {
            if c.is_whitespace() && !shown && !color_follows_run(&chars, i, &colors) {
                out.push_str(RESET);
                out.push_str(&background(&colors[idx]));
                out.push(c);
                out.push_str(RESET);
                out.push_str(&colors[idx]);
                shown = true;
                i += 1;
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Read one escape sequence starting at `i` (which holds ESC): through the
/// terminating `m`, or the lone introducer if the sequence never terminates.
fn read_escape(chars: &[char], i: usize) -> String {
    if chars.get(i + 1) != Some(&'[') {
        return chars[i].to_string();
    }
    let mut end = i + 2;
    while end < chars.len() {
        if chars[end] == 'm' {
            return chars[i..=end].iter().collect();
        }
        end += 1;
    }
    chars[i..].iter().collect()
}

/// Peek past the whitespace run starting at `i`: does another add/delete/
/// change span open immediately after it (directly, or through a reset)?
/// Such whitespace borders a span that is already visually distinguished and
/// needs no mark of its own.
fn color_follows_run(chars: &[char], mut i: usize, colors: &[String; 3]) -> bool {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    while i < chars.len() && chars[i] == ESC {
        let seq = read_escape(chars, i);
        if colors.iter().any(|code| **code == seq) {
            return true;
        }
        if seq != RESET {
            return false;
        }
        i += seq.chars().count();
    }
    false
}
