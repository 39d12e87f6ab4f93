//! Bar sizing.
//!
//! The bar takes whatever the console line has left once the label, the
//! percentage and the `<progress>/<total>` counter have been accounted for.

use crate::format::PERCENTAGE_WIDTH;

/// Widest console line the bar will ever use.
pub const MAX_BAR_WIDTH: usize = 120;

/// Columns taken by the leading space, brackets and separators.
const DECORATION_WIDTH: i64 = 9;

/// Number of decimal digits in `max(total, 2)`.
pub fn digit_width(total: u64) -> usize {
    total.max(2).ilog10() as usize + 1
}

/// Inner bar length for a console `console_width` columns wide.
///
/// May be zero or negative when the console is too narrow; callers skip the
/// frame in that case.
pub fn bar_length(console_width: usize, description_width: usize, total: u64) -> i64 {
    console_width.min(MAX_BAR_WIDTH) as i64
        - DECORATION_WIDTH
        - description_width as i64
        - PERCENTAGE_WIDTH as i64
        - 2 * digit_width(total) as i64
}
