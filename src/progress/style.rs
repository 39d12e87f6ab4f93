//! Bar fill characters.
//!
//! # Examples
//!
//! ```rust
//! use linebar::progress::BarStyle;
//!
//! // `[=====     ]`
//! let classic = BarStyle::default();
//!
//! // `[#####.....]`
//! let custom = BarStyle::new('#', '.');
//! assert_eq!(custom.unit_bar(), '#');
//! ```

/// Characters used for the filled and empty parts of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    /// Filled segment character.
    unit_bar: char,
    /// Empty segment character.
    unit_space: char,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl BarStyle {
    /// Equal signs on blanks: `"[====      ]"`.
    pub const CLASSIC: BarStyle = BarStyle::new('=', ' ');
    /// Hashes on dots: `"[####......]"`.
    pub const HASH: BarStyle = BarStyle::new('#', '.');
    /// Full blocks on light shade: `"[████░░░░░░]"`.
    pub const BLOCK: BarStyle = BarStyle::new('█', '░');

    /// Create a new [`BarStyle`].
    pub const fn new(unit_bar: char, unit_space: char) -> Self {
        Self {
            unit_bar,
            unit_space,
        }
    }

    /// Filled segment character.
    pub fn unit_bar(&self) -> char {
        self.unit_bar
    }

    /// Empty segment character.
    pub fn unit_space(&self) -> char {
        self.unit_space
    }

    /// Draw the inside of a bar `length` cells wide with `filled` cells done.
    pub(crate) fn draw(&self, length: usize, filled: usize) -> String {
        let filled = filled.min(length);
        let mut bar = String::with_capacity(length);
        bar.extend(std::iter::repeat(self.unit_bar).take(filled));
        bar.extend(std::iter::repeat(self.unit_space).take(length - filled));
        bar
    }
}
