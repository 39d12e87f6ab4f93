#![allow(dead_code)]

use linebar::{FixedTerminal, ProgressBar};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

// Common test constants
pub const TEST_DESCRIPTION: &str = "job";
pub const TEST_WIDTH: usize = 60;

/// A cloneable in-memory sink; clones share the same bytes.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap().clone();
        String::from_utf8(bytes).expect("Output is not UTF-8")
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().unwrap().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that refuses every write.
#[derive(Debug, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

pub type TestSink = FixedTerminal<SharedBuffer>;

/// Creates a sink posing as an interactive terminal of the given width
pub fn create_interactive_sink(width: usize) -> (TestSink, SharedBuffer) {
    let buffer = SharedBuffer::new();
    (FixedTerminal::new(buffer.clone(), true, Some(width)), buffer)
}

/// Creates a sink posing as a redirected file or pipe
pub fn create_logging_sink() -> (TestSink, SharedBuffer) {
    let buffer = SharedBuffer::new();
    (FixedTerminal::new(buffer.clone(), false, None), buffer)
}

/// Creates an interactive bar with the test description and width
pub fn create_interactive_bar(total: u64) -> (ProgressBar<TestSink>, SharedBuffer) {
    let (sink, buffer) = create_interactive_sink(TEST_WIDTH);
    (ProgressBar::new(total, TEST_DESCRIPTION, sink, false), buffer)
}

/// Creates a logging-mode bar with the test description
pub fn create_logging_bar(total: u64) -> (ProgressBar<TestSink>, SharedBuffer) {
    let (sink, buffer) = create_logging_sink();
    (ProgressBar::new(total, TEST_DESCRIPTION, sink, false), buffer)
}

/// The test description padded the way the bar draws it
pub fn padded_description() -> String {
    format!("{:<20}", TEST_DESCRIPTION)
}

/// Logged frame lines, header excluded
pub fn frame_lines(output: &str) -> Vec<&str> {
    output.lines().skip(1).collect()
}

/// Interactive frames, blanking segments excluded
pub fn drawn_frames(output: &str) -> Vec<&str> {
    output
        .split('\r')
        .map(|segment| segment.trim_start_matches('\n'))
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Asserts that a logged line has the `[date time.ms]\t...` shape
pub fn assert_log_line(line: &str) {
    assert!(line.starts_with('['), "Missing timestamp in {:?}", line);
    let (stamp, rest) = line
        .split_once("]\t")
        .expect("Missing timestamp separator");
    // "[YYYY-MM-DD HH:MM:SS.mmm"
    assert_eq!(stamp.len(), 24, "Unexpected timestamp {:?}", stamp);
    assert_eq!(&stamp[11..12], " ");
    assert_eq!(&stamp[20..21], ".");
    assert!(rest.ends_with(" remaining"), "Unexpected tail in {:?}", line);
    assert!(!line.contains('\r'));
}

/// Asserts that an interactive frame is well formed
pub fn assert_frame(frame: &str, total: u64) {
    let prefix = format!(" {} [", padded_description());
    assert!(frame.starts_with(&prefix), "Bad frame {:?}", frame);
    assert!(frame.ends_with(" remaining"), "Bad frame {:?}", frame);
    assert!(frame.contains(&format!("/{}, ", total)), "Bad frame {:?}", frame);
}

/// Extracts the `<progress>/<total>` pair from a frame or log line
pub fn counter_of(line: &str) -> &str {
    line.split(", ").nth(1).expect("Missing counter")
}

/// Extracts the percentage field from a log line
pub fn percentage_of_log_line(line: &str) -> &str {
    let (_, rest) = line
        .split_once("]\t")
        .expect("Missing timestamp separator");
    rest.split(", ").next().expect("Missing percentage")
}
