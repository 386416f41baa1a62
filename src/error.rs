//! Error types
//!
//! Centralized error handling using thiserror for type-safe errors.

use std::fmt;
use thiserror::Error;

/// Which column of a row an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Configuration errors, rejected before any line is produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("column count {cols} is too narrow for two columns")]
    InvalidCols { cols: usize },

    #[error("wrap column must be positive (resolved to {wrap})")]
    InvalidWrapColumn { wrap: usize },

    #[error("tab size must be positive")]
    InvalidTabSize,
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unbalanced change markers in row {row} ({side} side)")]
    MalformedMarkup { row: usize, side: Side },
}

/// Result type alias for configuration validation
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for render operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::MalformedMarkup {
            row: 3,
            side: Side::Left,
        };
        assert_eq!(
            err.to_string(),
            "unbalanced change markers in row 3 (left side)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let cfg_err = ConfigError::InvalidCols { cols: 1 };
        let render_err: RenderError = cfg_err.into();
        assert!(matches!(render_err, RenderError::Config(_)));
    }
}
