//! Side-by-side diff rendering for terminal output
//!
//! This library renders a pre-aligned, line-by-line comparison into a
//! two-column, word-wrapped, ANSI-colored table:
//! - Whitespace normalization that keeps tab/space edits detectable
//! - Display-width measurement for double-width (CJK) text
//! - Line wrapping that never breaks an open change marker
//! - Whitespace-change suppression and visibility painting
//!
//! Computing which lines or characters differ is not part of this crate;
//! the caller supplies an aligned row stream through the [`DiffSource`]
//! seam (see [`row`]) and receives the painted lines as a lazy iterator.

pub mod colorize;
pub mod config;
pub mod error;
pub mod markup;
pub mod normalize;
pub mod renderer;
pub mod row;
mod table;
pub mod width;
pub mod wrap;

pub use colorize::{simple_colorize, PlainColor};
pub use config::RenderConfig;
pub use error::{ConfigError, ConfigResult, RenderError, RenderResult, Side};
pub use renderer::Renderer;
pub use row::{ChangeKind, DiffRow, DiffSource, LineNo, LineRecord, TableStats};
