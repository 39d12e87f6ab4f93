//! The progress bar itself.
//!
//! A [`ProgressBar`] owns a counter, a fixed total, and a sink to draw into.
//! Host threads bump the counter through a shared reference; the counter is
//! atomic, while deciding whether to draw and the drawing itself happen under a
//! single lock so frames never interleave.
//!
//! Two output modes exist, chosen once at construction from
//! [`Terminal::is_interactive`]:
//!
//! - interactive: one line redrawn in place with carriage returns,
//! - logging: one timestamped line appended per frame, for files and pipes.
//!
//! # Examples
//!
//! ```rust
//! use linebar::ProgressBar;
//!
//! let bar = ProgressBar::new(3, "copying", Vec::new(), false);
//! bar.inc();
//! bar.inc_by(2);
//! assert_eq!(bar.progress(), 3);
//! ```

use super::builder::ProgressBarConfig;
use super::geometry;
use super::style::BarStyle;
use crate::error::{Error, Result};
use crate::format;
use crate::terminal::{console_width, Terminal};

use chrono::Local;
use console::Term;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Width the description is padded or truncated to.
pub const DESCRIPTION_WIDTH: usize = 20;

/// Everything the render path touches, guarded by one lock.
struct RenderState<W> {
    out: W,
    style: BarStyle,
    frequency_update: u64,
    /// Last frame written in interactive mode, trailing `\r` included.
    last_rendered: String,
    /// Highest count drawn so far.
    shown: u64,
}

/// A single-line console progress bar.
pub struct ProgressBar<W: Write + Terminal> {
    total: u64,
    description: String,
    silent: bool,
    logging_mode: bool,
    progress: AtomicU64,
    start_time: OnceLock<Instant>,
    finished: AtomicBool,
    state: Mutex<RenderState<W>>,
}

impl ProgressBar<Term> {
    /// Create a bar drawing to standard output.
    pub fn stdout(total: u64, description: &str) -> Self {
        Self::new(total, description, Term::stdout(), false)
    }

    /// Create a bar drawing to standard error.
    pub fn stderr(total: u64, description: &str) -> Self {
        Self::new(total, description, Term::stderr(), false)
    }
}

impl<W: Write + Terminal> ProgressBar<W> {
    /// Create a bar counting up to `total` and draw its first frame.
    ///
    /// When `silent` is set nothing is ever written to `out`; the counter still
    /// advances.
    pub fn new(total: u64, description: &str, out: W, silent: bool) -> Self {
        super::ProgressBarBuilder::new(total)
            .description(description)
            .silent(silent)
            .build(out)
    }

    /// Create a bar from a configuration and draw its first frame.
    ///
    /// Failures writing the first frame are returned.
    pub(crate) fn try_from_config(config: ProgressBarConfig, out: W) -> Result<Self> {
        let bar = Self::from_config_silently(&config, out);
        if !bar.silent {
            bar.start(&config.description)?;
        }
        Ok(bar)
    }

    /// Create a bar from a configuration and draw its first frame.
    ///
    /// Failures writing the first frame are logged.
    pub(crate) fn from_config(config: ProgressBarConfig, out: W) -> Self {
        let bar = Self::from_config_silently(&config, out);
        if !bar.silent {
            if let Err(err) = bar.start(&config.description) {
                warn!("Failed to draw the initial progress frame: {}", err);
            }
        }
        bar
    }

    fn from_config_silently(config: &ProgressBarConfig, out: W) -> Self {
        let total = config.total;
        let logging_mode = !config.silent && !out.is_interactive();
        let frequency_update = match config.frequency_update {
            Some(frequency) => clamp_frequency(frequency, total),
            None => (total / 1000).max(1),
        };
        debug!(
            total,
            logging_mode,
            silent = config.silent,
            frequency_update,
            "Creating progress bar {:?}",
            config.description
        );

        Self {
            total,
            description: pad_description(&config.description),
            silent: config.silent,
            logging_mode,
            progress: AtomicU64::new(0),
            start_time: OnceLock::new(),
            finished: AtomicBool::new(false),
            state: Mutex::new(RenderState {
                out,
                style: config.style,
                frequency_update,
                last_rendered: String::new(),
                shown: 0,
            }),
        }
    }

    /// Header line in logging mode, then the frame at zero.
    fn start(&self, header: &str) -> Result<()> {
        let mut state = self.lock();
        if self.logging_mode {
            writeln!(state.out, "{}", header)?;
            state.out.flush()?;
        }
        self.render(&mut state, 0)?;
        if self.total == 0 {
            writeln!(state.out)?;
            state.out.flush()?;
        }
        Ok(())
    }

    /// Total unit count.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Units completed so far.
    pub fn progress(&self) -> u64 {
        self.progress.load(Ordering::Acquire)
    }

    /// The label as drawn, padded or truncated to [`DESCRIPTION_WIDTH`].
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether output is suppressed.
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Whether frames are appended as timestamped lines.
    pub fn is_logging_mode(&self) -> bool {
        self.logging_mode
    }

    /// Current redraw bucket size.
    pub fn frequency_update(&self) -> u64 {
        self.lock().frequency_update
    }

    /// Current fill characters.
    pub fn style(&self) -> BarStyle {
        self.lock().style
    }

    /// Redraw only when the count crosses a multiple of `frequency`.
    ///
    /// Values above the total are clamped to the total, and zero is raised to
    /// one.
    pub fn set_frequency_update(&self, frequency: u64) {
        let clamped = clamp_frequency(frequency, self.total);
        if clamped != frequency {
            debug!("Clamping update frequency {} to {}", frequency, clamped);
        }
        self.lock().frequency_update = clamped;
    }

    /// Change the fill characters used by subsequent frames.
    pub fn set_style(&self, unit_bar: char, unit_space: char) {
        self.lock().style = BarStyle::new(unit_bar, unit_space);
    }

    /// Advance by one unit.
    ///
    /// # Panics
    ///
    /// Panics if the bar is already complete.
    pub fn inc(&self) {
        self.inc_by(1);
    }

    /// Advance by `delta` units.
    ///
    /// Write failures are logged rather than returned; see
    /// [`try_inc_by`](Self::try_inc_by) for a checked variant.
    ///
    /// # Panics
    ///
    /// Panics if the counter would go past the total. That is a bug in the
    /// caller.
    pub fn inc_by(&self, delta: u64) {
        match self.try_inc_by(delta) {
            Ok(_) => {}
            Err(err @ Error::Overflow { .. }) => panic!("{}", err),
            Err(err) => warn!("Failed to draw progress frame: {}", err),
        }
    }

    /// Advance by `delta` units, returning the new count.
    ///
    /// An increment that would exceed the total is rejected with
    /// [`Error::Overflow`] and leaves the counter untouched. Write failures are
    /// returned after the counter has advanced.
    pub fn try_inc_by(&self, delta: u64) -> Result<u64> {
        if delta == 0 {
            return Ok(self.progress());
        }

        let total = self.total;
        let before = self
            .progress
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |progress| {
                progress.checked_add(delta).filter(|&after| after <= total)
            })
            .map_err(|progress| Error::Overflow {
                progress,
                delta,
                total,
            })?;
        let after = before + delta;
        if before == 0 {
            // Only one increment can ever leave zero.
            let _ = self.start_time.set(Instant::now());
        }

        if self.silent {
            return Ok(after);
        }

        let mut state = self.lock();
        let frequency = state.frequency_update;
        if after == total || before / frequency < after / frequency {
            self.render(&mut state, after)?;
        }
        if after == total {
            writeln!(state.out)?;
            state.out.flush()?;
        }
        Ok(after)
    }

    /// Close the bar.
    ///
    /// If the count never reached the total, one last frame is drawn at the
    /// current count and the line is terminated, so an early exit still leaves
    /// the indicator on screen. Only the first call has any effect; dropping
    /// the bar calls this automatically.
    pub fn finish(&self) -> Result<()> {
        if self.finished.swap(true, Ordering::AcqRel) || self.silent {
            return Ok(());
        }

        let progress = self.progress();
        if progress == self.total {
            return Ok(());
        }

        warn!(
            "Progress bar {:?} finished at {}/{}",
            self.description.trim_end(),
            progress,
            self.total
        );
        let mut state = self.lock();
        self.render(&mut state, progress)?;
        writeln!(state.out)?;
        state.out.flush()?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, RenderState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn elapsed(&self) -> Duration {
        self.start_time
            .get()
            .map(Instant::elapsed)
            .unwrap_or_default()
    }

    /// Draw the frame for `progress`. The caller holds the lock.
    fn render(&self, state: &mut RenderState<W>, progress: u64) -> io::Result<()> {
        // A slower thread may arrive with a count already superseded.
        if progress < state.shown {
            return Ok(());
        }
        state.shown = progress;

        let ratio = format::progress_ratio(progress, self.total);
        let remaining = format::remaining_time(self.elapsed(), ratio);
        let summary = format::summary(ratio, progress, self.total, remaining);

        if self.logging_mode {
            let line = format!(
                "{}\t{}\n",
                format::log_timestamp(Local::now()),
                summary
            );
            state.out.write_all(line.as_bytes())?;
            return state.out.flush();
        }

        let blank = " ".repeat(state.last_rendered.chars().count());
        write!(state.out, "{}\r", blank)?;
        state.out.flush()?;
        state.last_rendered.clear();

        let length = geometry::bar_length(
            console_width(&state.out),
            self.description.chars().count(),
            self.total,
        );
        if length < 1 {
            debug!("Console too narrow for the bar, skipping frame");
            return Ok(());
        }
        let length = length as usize;
        let filled = (length as f64 * ratio) as usize;

        let line = format!(
            " {} [{}] {}\r",
            self.description,
            state.style.draw(length, filled),
            summary
        );
        state.out.write_all(line.as_bytes())?;
        state.out.flush()?;
        state.last_rendered = line;
        Ok(())
    }
}

impl<W: Write + Terminal> Drop for ProgressBar<W> {
    fn drop(&mut self) {
        if let Err(err) = self.finish() {
            warn!("Failed to draw the final progress frame: {}", err);
        }
    }
}

impl<W: Write + Terminal> fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("total", &self.total)
            .field("progress", &self.progress())
            .field("description", &self.description)
            .field("silent", &self.silent)
            .field("logging_mode", &self.logging_mode)
            .field("finished", &self.finished.load(Ordering::Acquire))
            .finish()
    }
}

/// Keep the bucket size within `1..=total`.
fn clamp_frequency(frequency: u64, total: u64) -> u64 {
    frequency.min(total).max(1)
}

/// Pad or truncate to exactly [`DESCRIPTION_WIDTH`] characters.
fn pad_description(description: &str) -> String {
    format!("{:<width$.width$}", description, width = DESCRIPTION_WIDTH)
}
