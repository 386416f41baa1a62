//! Two-column table assembly
//!
//! Turns wrapped segment pairs into padded row strings: trailing-whitespace
//! trimming, the optional right-justified line-number field, metadata-colored
//! header and separator rows, and escape-aware column padding.

use crate::colorize::{simple_colorize, PlainColor};
use crate::config::RenderConfig;
use crate::markup::TAB_MARKER;
use crate::row::LineNo;
use crate::width::real_len;

/// Literal token shown on both sides of an elided-context row.
const SEPARATOR_TOKEN: &str = "---";

/// Width of the right-justified line-number field.
const LINE_NUMBER_WIDTH: usize = 8;

/// Trim trailing whitespace (tab-markers included; span markers retained)
/// and apply the line-number prefix when enabled.
///
/// Only real line numbers get a prefix; blank and continuation rows render
/// bare so a wrapped remainder is never mistaken for a new source line.
pub(crate) fn format_line(config: &RenderConfig, number: LineNo, text: &str) -> String {
    let text = text.trim_end_matches(|c: char| c.is_whitespace() || c == TAB_MARKER);
    if !config.line_numbers {
        return text.to_string();
    }
    match number.as_number() {
        Some(n) => format!("{:>width$} {}", n, text, width = LINE_NUMBER_WIDTH),
        None => text.to_string(),
    }
}

/// Both columns of a separator row, colored as metadata.
pub(crate) fn separator_pair() -> (String, String) {
    (
        simple_colorize(SEPARATOR_TOKEN, PlainColor::Blue),
        simple_colorize(SEPARATOR_TOKEN, PlainColor::Blue),
    )
}

/// Both columns of the header row, colored as metadata.
pub(crate) fn header_pair(from_desc: &str, to_desc: &str) -> (String, String) {
    (
        simple_colorize(from_desc, PlainColor::Blue),
        simple_colorize(to_desc, PlainColor::Blue),
    )
}

/// Pad one column to `width` display columns. Padding is computed from
/// [`real_len`], so markers and escape bytes do not skew alignment.
fn pad_column(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(real_len(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    for _ in 0..pad {
        out.push(' ');
    }
    out
}

/// Join two padded columns with the single separating space.
pub(crate) fn assemble_row(left: &str, right: &str, half_width: usize) -> String {
    format!(
        "{} {}",
        pad_column(left, half_width),
        pad_column(right, half_width)
    )
}
