//! Linebar is a crate providing a single-line console progress bar meant to
//! be embedded in a host program's processing loop.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use linebar::ProgressBar;
//!
//! let bar = ProgressBar::stdout(1_000, "processing");
//! for _ in 0..1_000 {
//!     // ... do some work ...
//!     bar.inc();
//! }
//! ```
//!
//! On an interactive terminal this draws and redraws a line such as
//!
//! ```text
//!  processing           [=========================                ]  62.5%, 625/1000, 3s remaining
//! ```
//!
//! When the output is redirected, every frame is appended as a timestamped
//! line instead:
//!
//! ```text
//! [2024-03-09 07:05:01.042]	 62.5%, 625/1000, 3s remaining
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] - The `ProgressBar`, its builder, styles and geometry
//! - [`terminal`] - Terminal capability queries and the `FixedTerminal` adapter
//! - [`format`] - Percentage, duration and timestamp formatting
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod error;
pub mod format;
pub mod progress;
pub mod terminal;

pub use error::{Error, Result};
pub use progress::{BarStyle, ProgressBar, ProgressBarBuilder, ProgressBarConfig};
pub use terminal::{FixedTerminal, Terminal};
