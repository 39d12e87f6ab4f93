//! Terminal capability queries.
//!
//! The progress bar only needs two answers from its output sink: is a human
//! watching it, and how wide is the screen. [`Terminal`] captures both so any
//! writer can be plugged in, and [`FixedTerminal`] lets callers pin the answers
//! (handy for tests and for sinks the platform can't introspect).
//!
//! # Examples
//!
//! ```rust
//! use linebar::terminal::{FixedTerminal, Terminal};
//!
//! let sink = FixedTerminal::new(Vec::<u8>::new(), true, Some(80));
//! assert!(sink.is_interactive());
//! assert_eq!(sink.width(), Some(80));
//! ```

use console::Term;
use std::fs::File;
use std::io::{self, IsTerminal, Write};

/// Width assumed when the sink can't report one.
pub const DEFAULT_CONSOLE_WIDTH: usize = 100;

/// Capabilities the renderer asks of its output sink.
pub trait Terminal {
    /// Whether the sink is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Current column count, if the sink knows it.
    fn width(&self) -> Option<usize>;
}

impl Terminal for Term {
    fn is_interactive(&self) -> bool {
        self.is_term()
    }

    fn width(&self) -> Option<usize> {
        self.size_checked().map(|(_rows, cols)| cols as usize)
    }
}

impl Terminal for File {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }

    fn width(&self) -> Option<usize> {
        None
    }
}

impl Terminal for Vec<u8> {
    fn is_interactive(&self) -> bool {
        false
    }

    fn width(&self) -> Option<usize> {
        None
    }
}

impl Terminal for io::Sink {
    fn is_interactive(&self) -> bool {
        false
    }

    fn width(&self) -> Option<usize> {
        None
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn width(&self) -> Option<usize> {
        (**self).width()
    }
}

/// Resolve the usable console width, falling back to [`DEFAULT_CONSOLE_WIDTH`].
pub fn console_width<T: Terminal + ?Sized>(terminal: &T) -> usize {
    match terminal.width() {
        Some(width) if width > 0 => width,
        _ => {
            tracing::debug!(
                "Console width unavailable, assuming {} columns",
                DEFAULT_CONSOLE_WIDTH
            );
            DEFAULT_CONSOLE_WIDTH
        }
    }
}

/// A writer that answers the capability queries from fixed values.
#[derive(Debug, Clone)]
pub struct FixedTerminal<W> {
    inner: W,
    interactive: bool,
    width: Option<usize>,
}

impl<W> FixedTerminal<W> {
    /// Wrap `inner`, reporting `interactive` and `width` for it.
    pub fn new(inner: W, interactive: bool, width: Option<usize>) -> Self {
        Self {
            inner,
            interactive,
            width,
        }
    }

    /// Get a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Terminal for FixedTerminal<W> {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn width(&self) -> Option<usize> {
        self.width
    }
}

impl<W: Write> Write for FixedTerminal<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
