//! Width-bounded wrapping of marked-up lines
//!
//! Splits one logical line into display-width-bounded segments without
//! breaking an open change span across a split: a span open at the cut point
//! is closed at the end of the head segment and reopened at the start of the
//! tail, so every segment is independently valid markup and no color bleeds
//! across rows.

use crate::markup::{self, SpanKind, SPAN_END};
use crate::row::LineNo;
use crate::width::{display_len, display_width};

/// One width-bounded piece of a wrapped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub number: LineNo,
    pub text: String,
}

/// Display length of marked-up text with the sentinel markers excluded:
/// each marker codepoint measures one column in [`display_len`], so one
/// column per occurrence is subtracted back out.
fn marked_display_len(text: &str) -> usize {
    let markers = text.chars().filter(|&c| markup::is_span_marker(c)).count();
    display_len(text) - markers
}

/// Split `text` at `wrap_column` into an ordered segment list.
///
/// Blank lines (separators, padding) pass through as a single unmodified
/// segment. Wrapped remainders carry [`LineNo::Continuation`] so they are
/// never mistaken for new source lines. Splitting is iterative; line length
/// does not grow the stack.
pub fn wrap(number: LineNo, text: &str, wrap_column: usize) -> Vec<Segment> {
    let mut segments = Vec::new();

    if number == LineNo::Blank {
        segments.push(Segment {
            number,
            text: text.to_string(),
        });
        return segments;
    }

    let mut number = number;
    let mut text = text.to_string();
    loop {
        if marked_display_len(&text) <= wrap_column {
            segments.push(Segment { number, text });
            return segments;
        }

        // scan for the cut point, tracking whether a span is open there
        let mut open: Option<SpanKind> = None;
        let mut width = 0usize;
        let mut cut = text.len();
        for (i, c) in text.char_indices() {
            if width >= wrap_column {
                cut = i;
                break;
            }
            if let Some(kind) = SpanKind::from_marker(c) {
                open = Some(kind);
            } else if c == SPAN_END {
                open = None;
            } else {
                width += display_width(c);
            }
        }

        let mut head = text[..cut].to_string();
        let mut tail = text[cut..].to_string();
        if let Some(kind) = open {
            head.push(SPAN_END);
            tail.insert(0, kind.start_marker());
        }

        segments.push(Segment {
            number,
            text: head,
        });
        number = LineNo::Continuation;
        text = tail;
    }
}
