//! Whitespace normalization ahead of differencing
//!
//! Tabs are expanded before the two sides are handed to the differencing
//! engine, but the expansion columns are filled with the private tab-marker
//! codepoint rather than spaces. The engine therefore sees tabs and spaces as
//! distinct input and reports a tab-to-space edit as a change, while the
//! colorizer later renders every tab-marker as a single uniform space so the
//! table stays visually aligned regardless of the original tab width.

use crate::markup::TAB_MARKER;

/// Hides pre-existing spaces while tabs are expanded, so only the columns
/// that came from tab expansion become tab-markers.
const SPACE_GUARD: char = '\u{e005}';

/// Normalize both sides of a comparison. Pure function of its inputs.
pub fn normalize_pair(
    left: &[String],
    right: &[String],
    tab_size: usize,
) -> (Vec<String>, Vec<String>) {
    (
        normalize_lines(left, tab_size),
        normalize_lines(right, tab_size),
    )
}

/// Normalize one line list: expand tabs into tab-markers at `tab_size` stops
/// and strip trailing line terminators.
pub fn normalize_lines(lines: &[String], tab_size: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| normalize_line(line, tab_size))
        .collect()
}

fn normalize_line(line: &str, tab_size: usize) -> String {
    let guarded: String = line
        .chars()
        .map(|c| if c == ' ' { SPACE_GUARD } else { c })
        .collect();
    let expanded = expand_tabs(&guarded, tab_size);
    let restored: String = expanded
        .chars()
        .map(|c| match c {
            ' ' => TAB_MARKER,
            SPACE_GUARD => ' ',
            c => c,
        })
        .collect();
    restored.trim_end_matches('\n').to_string()
}

/// Expand tabs to spaces at `tab_size` column stops. Columns count one per
/// character and reset at line breaks.
fn expand_tabs(line: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0usize;
    for c in line.chars() {
        match c {
            '\t' => {
                if tab_size > 0 {
                    let pad = tab_size - col % tab_size;
                    for _ in 0..pad {
                        out.push(' ');
                    }
                    col += pad;
                }
            }
            '\n' | '\r' => {
                out.push(c);
                col = 0;
            }
            c => {
                out.push(c);
                col += 1;
            }
        }
    }
    out
}
