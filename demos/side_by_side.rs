//! Side-by-side rendering demo
//!
//! Renders a small two-version comparison to stdout with a toy line aligner
//! standing in for a real differencing engine.
//!
//! Usage:
//!   cargo run --example side_by_side

use sidediff::markup::{CHANGE_START, SPAN_END};
use sidediff::{ChangeKind, DiffRow, DiffSource, LineNo, LineRecord, RenderConfig, Renderer};

const OLD: &str = "\
fn hello() {
    println!(\"Hello\");
}

fn main() {
\thello();
}";

const NEW: &str = "\
fn hello(name: &str) {
    println!(\"Hello, {}!\", name);
}

fn main() {
    hello(\"World\");
}";

/// Toy engine: pairs lines index-by-index and marks whole lines that differ.
/// A real engine would align insertions and mark character-level runs.
struct LineZipper;

impl DiffSource for LineZipper {
    fn aligned_rows(
        &self,
        left: &[String],
        right: &[String],
        _context: Option<usize>,
    ) -> Vec<DiffRow> {
        let rows = left.len().max(right.len());
        (0..rows)
            .map(|i| {
                let l = left.get(i).map(String::as_str).unwrap_or("");
                let r = right.get(i).map(String::as_str).unwrap_or("");
                if l == r {
                    DiffRow::Content {
                        left: LineRecord::new(LineNo::Number(i + 1), l),
                        right: LineRecord::new(LineNo::Number(i + 1), r),
                        kind: ChangeKind::Equal,
                    }
                } else {
                    DiffRow::Content {
                        left: LineRecord::new(
                            LineNo::Number(i + 1),
                            format!("{}{}{}", CHANGE_START, l, SPAN_END),
                        ),
                        right: LineRecord::new(
                            LineNo::Number(i + 1),
                            format!("{}{}{}", CHANGE_START, r, SPAN_END),
                        ),
                        kind: ChangeKind::Change,
                    }
                }
            })
            .collect()
    }
}

fn main() {
    let config = RenderConfig {
        line_numbers: true,
        headers: Some(("old.rs".to_string(), "new.rs".to_string())),
        ..Default::default()
    };
    let renderer = Renderer::new(config).expect("default-derived config is valid");

    let old_lines: Vec<String> = OLD.lines().map(|s| s.to_string()).collect();
    let new_lines: Vec<String> = NEW.lines().map(|s| s.to_string()).collect();

    match renderer.render_with(&LineZipper, &old_lines, &new_lines, None) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => eprintln!("render failed: {e}"),
    }
}
