//! Builder pattern implementation for creating [`ProgressBar`] instances.
//!
//! [`ProgressBar::new`] covers the common case. The builder adds the knobs that
//! otherwise need a setter call after construction, so the very first frame is
//! already drawn with them.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use linebar::progress::{BarStyle, ProgressBarBuilder};
//!
//! let bar = ProgressBarBuilder::new(500)
//!     .description("indexing")
//!     .frequency_update(10)
//!     .style(BarStyle::HASH)
//!     .build(Vec::new());
//! assert_eq!(bar.frequency_update(), 10);
//! ```
//!
//! ## Silent Bars
//!
//! ```rust
//! use linebar::progress::ProgressBarBuilder;
//!
//! // Counts, never draws.
//! let bar = ProgressBarBuilder::hidden(10).build(std::io::sink());
//! assert!(bar.is_silent());
//! ```

use super::bar::ProgressBar;
use super::style::BarStyle;
use crate::error::Result;
use crate::terminal::Terminal;

use std::io::Write;

/// Configuration a [`ProgressBar`] is created from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressBarConfig {
    /// Total unit count.
    pub total: u64,
    /// Label drawn in front of the bar.
    pub description: String,
    /// Suppress all output.
    pub silent: bool,
    /// Redraw bucket size; `None` picks `max(1, total / 1000)`.
    pub frequency_update: Option<u64>,
    /// Fill characters.
    pub style: BarStyle,
}

/// A builder used to create a [`ProgressBar`].
///
/// ```rust
/// use linebar::progress::ProgressBarBuilder;
///
/// let bar = ProgressBarBuilder::new(10).description("work").build(Vec::new());
/// assert_eq!(bar.total(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgressBarBuilder {
    config: ProgressBarConfig,
}

impl ProgressBarBuilder {
    /// Creates a builder for a bar counting up to `total`.
    pub fn new(total: u64) -> Self {
        Self {
            config: ProgressBarConfig {
                total,
                ..ProgressBarConfig::default()
            },
        }
    }

    /// Convenience function for a silent bar.
    pub fn hidden(total: u64) -> Self {
        Self::new(total).silent(true)
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ProgressBarConfig) -> Self {
        Self { config }
    }

    /// Set the label drawn in front of the bar.
    pub fn description(mut self, description: &str) -> Self {
        self.config.description = description.to_string();
        self
    }

    /// Suppress all output.
    pub fn silent(mut self, silent: bool) -> Self {
        self.config.silent = silent;
        self
    }

    /// Set the redraw bucket size.
    ///
    /// Clamped into `1..=total` when the bar is built.
    pub fn frequency_update(mut self, frequency: u64) -> Self {
        self.config.frequency_update = Some(frequency);
        self
    }

    /// Set the fill characters.
    pub fn style(mut self, style: BarStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Get a reference to the configuration being built.
    pub fn config(&self) -> &ProgressBarConfig {
        &self.config
    }

    /// Create the [`ProgressBar`] and draw its first frame to `out`.
    ///
    /// Write failures on the first frame are logged.
    pub fn build<W: Write + Terminal>(self, out: W) -> ProgressBar<W> {
        ProgressBar::from_config(self.config, out)
    }

    /// Like [`build`](Self::build) but returns write failures on the first
    /// frame.
    pub fn try_build<W: Write + Terminal>(self, out: W) -> Result<ProgressBar<W>> {
        ProgressBar::try_from_config(self.config, out)
    }
}
