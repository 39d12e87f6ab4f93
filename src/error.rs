//! Error handling for the linebar library.
//!
//! Most of the API is infallible from the host's point of view: rendering
//! problems are logged and swallowed so a progress bar can never take down the
//! loop it is watching. The checked entry points (see
//! [`ProgressBar::try_inc_by`](crate::ProgressBar::try_inc_by)) surface the
//! errors below instead.

use std::io;
use thiserror::Error;

/// Errors that can happen when driving a progress bar.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// Writing or flushing the output sink failed.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// An increment would have pushed the counter past the total.
    ///
    /// The counter is left untouched when this is returned.
    #[error("progress overflow: {progress} + {delta} exceeds total {total}")]
    Overflow {
        /// Counter value observed when the increment was attempted.
        progress: u64,
        /// Size of the rejected increment.
        delta: u64,
        /// Total unit count of the bar.
        total: u64,
    },
}

/// Result type alias for operations that can fail with a linebar error.
pub type Result<T> = std::result::Result<T, Error>;
