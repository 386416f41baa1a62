//! Render orchestration
//!
//! Composes normalization, wrapping, table assembly, and color painting
//! around an externally supplied aligned-diff stream. The renderer holds
//! only its immutable configuration, so independent renders may run
//! concurrently on separate threads with no locking. Output is produced as
//! a lazy iterator of completed lines; dropping it is cancellation.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::colorize::colorize;
use crate::config::RenderConfig;
use crate::error::{ConfigResult, RenderError, RenderResult, Side};
use crate::markup::is_balanced;
use crate::normalize::normalize_pair;
use crate::row::{DiffRow, DiffSource, LineRecord};
use crate::table::{assemble_row, format_line, header_pair, separator_pair};
use crate::wrap::{wrap, Segment};

/// Renders aligned diff rows into painted two-column table lines.
pub struct Renderer {
    config: RenderConfig,
    wrap_column: usize,
}

impl Renderer {
    /// Create a renderer, validating the configuration up front so that an
    /// invalid one fails here and never mid-render.
    pub fn new(config: RenderConfig) -> ConfigResult<Self> {
        config.validate()?;
        let wrap_column = config.resolved_wrap_column();
        Ok(Self {
            config,
            wrap_column,
        })
    }

    /// The configuration this renderer was built with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Lazily render an aligned row stream into painted table lines.
    ///
    /// Each yielded line is complete as soon as it is returned; a caller may
    /// start writing before the whole table is built. A malformed row yields
    /// an error in place of any of its lines, after which the iterator is
    /// exhausted.
    pub fn render<I>(&self, rows: I) -> Rows<'_, I::IntoIter>
    where
        I: IntoIterator<Item = DiffRow>,
    {
        Rows {
            renderer: self,
            rows: rows.into_iter(),
            pending: VecDeque::new(),
            emitted_header: false,
            row_index: 0,
            failed: false,
        }
    }

    /// Render an aligned row stream, collecting the full table.
    pub fn render_to_vec<I>(&self, rows: I) -> RenderResult<Vec<String>>
    where
        I: IntoIterator<Item = DiffRow>,
    {
        self.render(rows).collect()
    }

    /// Full pipeline around a differencing engine: normalize both sides,
    /// obtain the aligned rows, render them.
    pub fn render_with<S>(
        &self,
        source: &S,
        left: &[String],
        right: &[String],
        context: Option<usize>,
    ) -> RenderResult<Vec<String>>
    where
        S: DiffSource + ?Sized,
    {
        let (left, right) = normalize_pair(left, right, self.config.tab_size);
        let rows = source.aligned_rows(&left, &right, context);
        debug!(rows = rows.len(), context = ?context, "rendering aligned rows");
        self.render_to_vec(rows)
    }

    /// Expand one content row into its painted table lines.
    fn push_content_row(
        &self,
        left: &LineRecord,
        right: &LineRecord,
        pending: &mut VecDeque<String>,
    ) {
        let left_segments = wrap(left.number, &left.text, self.wrap_column);
        let right_segments = wrap(right.number, &right.text, self.wrap_column);

        let rows = left_segments.len().max(right_segments.len());
        for i in 0..rows {
            let left_text = self.segment_text(left_segments.get(i));
            let right_text = self.segment_text(right_segments.get(i));
            let assembled = assemble_row(&left_text, &right_text, self.config.half_width());
            pending.push_back(colorize(&assembled, &self.config));
        }
    }

    /// Formatted column text for a segment, or the blank placeholder when
    /// one side ran out of wrapped segments before the other.
    fn segment_text(&self, segment: Option<&Segment>) -> String {
        match segment {
            Some(segment) => format_line(&self.config, segment.number, &segment.text),
            None => {
                let blank = LineRecord::blank();
                format_line(&self.config, blank.number, &blank.text)
            }
        }
    }

    fn push_pair(&self, pair: (String, String), pending: &mut VecDeque<String>) {
        let assembled = assemble_row(&pair.0, &pair.1, self.config.half_width());
        pending.push_back(colorize(&assembled, &self.config));
    }
}

/// Lazy line iterator returned by [`Renderer::render`].
pub struct Rows<'a, I> {
    renderer: &'a Renderer,
    rows: I,
    pending: VecDeque<String>,
    emitted_header: bool,
    row_index: usize,
    failed: bool,
}

impl<I> Iterator for Rows<'_, I>
where
    I: Iterator<Item = DiffRow>,
{
    type Item = RenderResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            if !self.emitted_header {
                self.emitted_header = true;
                if let Some((from_desc, to_desc)) = &self.renderer.config.headers {
                    if !from_desc.is_empty() || !to_desc.is_empty() {
                        let pair = header_pair(from_desc, to_desc);
                        self.renderer.push_pair(pair, &mut self.pending);
                    }
                }
                continue;
            }

            let row = self.rows.next()?;
            self.row_index += 1;

            match row {
                DiffRow::Separator => {
                    // the diff stream emits a leading separator artifact
                    // ahead of the first content line; it is not shown
                    if self.row_index == 1 {
                        trace!("suppressing leading separator row");
                        continue;
                    }
                    self.renderer
                        .push_pair(separator_pair(), &mut self.pending);
                }
                DiffRow::Content { left, right, .. } => {
                    if let Some(side) = unbalanced_side(&left, &right) {
                        self.failed = true;
                        return Some(Err(RenderError::MalformedMarkup {
                            row: self.row_index,
                            side,
                        }));
                    }
                    self.renderer
                        .push_content_row(&left, &right, &mut self.pending);
                }
            }
        }
    }
}

/// First side of the pair whose markup fails the balance invariant, if any.
fn unbalanced_side(left: &LineRecord, right: &LineRecord) -> Option<Side> {
    if !is_balanced(&left.text) {
        Some(Side::Left)
    } else if !is_balanced(&right.text) {
        Some(Side::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{ChangeKind, LineNo};
    use pretty_assertions::assert_eq;

    fn renderer(config: RenderConfig) -> Renderer {
        Renderer::new(config).unwrap()
    }

    fn equal_row(n: usize, text: &str) -> DiffRow {
        DiffRow::Content {
            left: LineRecord::new(LineNo::Number(n), text),
            right: LineRecord::new(LineNo::Number(n), text),
            kind: ChangeKind::Equal,
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = RenderConfig {
            cols: 0,
            ..Default::default()
        };
        assert!(Renderer::new(config).is_err());
    }

    #[test]
    fn test_equal_rows_have_no_escapes() {
        let renderer = renderer(RenderConfig::default());
        let lines = renderer
            .render_to_vec(vec![equal_row(1, "abc"), equal_row(2, "def")])
            .unwrap();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(!line.contains('\u{1b}'));
        }
    }

    #[test]
    fn test_leading_separator_suppressed() {
        let renderer = renderer(RenderConfig::default());
        let rows = vec![
            DiffRow::Separator,
            equal_row(1, "abc"),
            DiffRow::Separator,
            equal_row(9, "def"),
        ];
        let lines = renderer.render_to_vec(rows).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(!lines[0].contains("---"));
        assert!(lines[1].contains("---"));
    }

    #[test]
    fn test_header_emitted_first() {
        let config = RenderConfig {
            headers: Some(("old.txt".to_string(), "new.txt".to_string())),
            ..Default::default()
        };
        let renderer = renderer(config);
        let lines = renderer.render_to_vec(vec![equal_row(1, "abc")]).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\x1b[0;34mold.txt\x1b[m"));
        assert!(lines[0].contains("\x1b[0;34mnew.txt\x1b[m"));
    }

    #[test]
    fn test_uneven_wrap_pads_short_side() {
        let config = RenderConfig {
            wrap_column: Some(5),
            ..Default::default()
        };
        let renderer = renderer(config);
        let rows = vec![DiffRow::Content {
            left: LineRecord::new(LineNo::Number(1), "abcdefghij"),
            right: LineRecord::new(LineNo::Number(1), "abc"),
            kind: ChangeKind::Change,
        }];
        let lines = renderer.render_to_vec(rows).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("abcde"));
        assert!(lines[0].contains("abc"));
        assert!(lines[1].contains("fghij"));
    }

    #[test]
    fn test_malformed_markup_fails_and_fuses() {
        use crate::markup::ADD_START;
        let renderer = renderer(RenderConfig::default());
        let rows = vec![
            DiffRow::Content {
                left: LineRecord::new(LineNo::Number(1), "ok"),
                right: LineRecord::new(LineNo::Number(1), format!("bad{}", ADD_START)),
                kind: ChangeKind::Change,
            },
            equal_row(2, "never reached"),
        ];
        let mut lines = renderer.render(rows);
        let err = lines.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            RenderError::MalformedMarkup {
                row: 1,
                side: Side::Right,
            }
        ));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_render_is_lazy() {
        let renderer = renderer(RenderConfig::default());
        let rows = vec![equal_row(1, "abc"), equal_row(2, "def")];
        let mut iter = renderer.render(rows);
        // pulling one line must not require the whole table
        let first = iter.next().unwrap().unwrap();
        assert!(first.contains("abc"));
    }
}
