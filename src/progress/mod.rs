//! Progress module containing the progress bar engine.
//!
//! # Overview
//!
//! The progress module is organized into four components:
//!
//! - `bar` - The [`ProgressBar`] counter, throttle and renderer
//! - `builder` - [`ProgressBarBuilder`] and [`ProgressBarConfig`]
//! - `style` - [`BarStyle`] fill characters
//! - `geometry` - Bar length from the console width
//!
//! # Examples
//!
//! ## Driving a Bar from Worker Threads
//!
//! ```rust
//! use linebar::ProgressBar;
//!
//! let bar = ProgressBar::new(100, "crunching", Vec::new(), false);
//! std::thread::scope(|s| {
//!     for _ in 0..4 {
//!         s.spawn(|| {
//!             for _ in 0..25 {
//!                 bar.inc();
//!             }
//!         });
//!     }
//! });
//! assert_eq!(bar.progress(), 100);
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use linebar::progress::{BarStyle, ProgressBarBuilder};
//!
//! let bar = ProgressBarBuilder::new(10)
//!     .style(BarStyle::BLOCK)
//!     .build(Vec::new());
//! bar.set_style('#', '-');
//! assert_eq!(bar.style(), BarStyle::new('#', '-'));
//! ```

pub(crate) mod bar;
pub(crate) mod builder;
pub mod geometry;
pub(crate) mod style;

pub use bar::{ProgressBar, DESCRIPTION_WIDTH};
pub use builder::{ProgressBarBuilder, ProgressBarConfig};
pub use style::BarStyle;
