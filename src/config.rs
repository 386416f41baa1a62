//! Renderer configuration
//!
//! An immutable configuration value passed explicitly into the renderer; no
//! process-wide mutable state. Invalid configurations are rejected when the
//! renderer is constructed, never mid-render.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Configuration for one render invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Tab stop spacing used during normalization.
    pub tab_size: usize,
    /// Total display columns of the table.
    pub cols: usize,
    /// Column at which each half-row wraps. `None` derives a default from
    /// `cols` (with a larger margin when line numbers are shown).
    pub wrap_column: Option<usize>,
    /// Prefix each numbered line with a right-justified line-number field.
    pub line_numbers: bool,
    /// Make every whitespace-only change visible instead of muting it.
    pub show_all_spaces: bool,
    /// Paint changes as solid reverse-video instead of foreground color.
    pub highlight: bool,
    /// Use normal-intensity colors instead of bold.
    pub no_bold: bool,
    /// Optional column header strings, emitted as the first row.
    pub headers: Option<(String, String)>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tab_size: 8,
            cols: 80,
            wrap_column: None,
            line_numbers: false,
            show_all_spaces: false,
            highlight: false,
            no_bold: false,
            headers: None,
        }
    }
}

impl RenderConfig {
    /// Margin subtracted from the half-column width to derive the default
    /// wrap column; wider when the line-number field is present.
    fn wrap_margin(&self) -> usize {
        if self.line_numbers {
            10
        } else {
            2
        }
    }

    /// Validate the configuration. Fails on a non-positive tab size, a
    /// column count too narrow for two columns, or a wrap column (explicit
    /// or derived) that resolves to zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tab_size == 0 {
            return Err(ConfigError::InvalidTabSize);
        }
        if self.cols / 2 < 2 {
            return Err(ConfigError::InvalidCols { cols: self.cols });
        }
        let wrap = self.resolved_wrap_column();
        if wrap == 0 {
            return Err(ConfigError::InvalidWrapColumn { wrap });
        }
        Ok(())
    }

    /// The wrap column in effect: the explicit value, or `cols / 2` minus
    /// the margin.
    pub fn resolved_wrap_column(&self) -> usize {
        self.wrap_column
            .unwrap_or_else(|| (self.cols / 2).saturating_sub(self.wrap_margin()))
    }

    /// Display width of one padded half-row. The two halves plus the single
    /// separating space make up the rendered line; with integer division the
    /// rendered line is one column short of `cols` for even column counts.
    pub fn half_width(&self) -> usize {
        (self.cols / 2).saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.tab_size, 8);
        assert_eq!(config.cols, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_wrap_column() {
        let config = RenderConfig::default();
        assert_eq!(config.resolved_wrap_column(), 38);

        let numbered = RenderConfig {
            line_numbers: true,
            ..Default::default()
        };
        assert_eq!(numbered.resolved_wrap_column(), 30);
    }

    #[test]
    fn test_explicit_wrap_column() {
        let config = RenderConfig {
            wrap_column: Some(5),
            ..Default::default()
        };
        assert_eq!(config.resolved_wrap_column(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_half_width() {
        let config = RenderConfig::default();
        assert_eq!(config.half_width(), 39);

        let odd = RenderConfig {
            cols: 81,
            ..Default::default()
        };
        assert_eq!(odd.half_width(), 39);
    }

    #[test]
    fn test_rejects_zero_tab_size() {
        let config = RenderConfig {
            tab_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTabSize)
        ));
    }

    #[test]
    fn test_rejects_narrow_cols() {
        let config = RenderConfig {
            cols: 3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCols { cols: 3 })
        ));
    }

    #[test]
    fn test_rejects_zero_wrap_column() {
        let explicit = RenderConfig {
            wrap_column: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            explicit.validate(),
            Err(ConfigError::InvalidWrapColumn { .. })
        ));

        // derived wrap column can collapse to zero on narrow tables
        let derived = RenderConfig {
            cols: 20,
            line_numbers: true,
            ..Default::default()
        };
        assert!(matches!(
            derived.validate(),
            Err(ConfigError::InvalidWrapColumn { .. })
        ));
    }
}
