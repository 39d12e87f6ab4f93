//! Text helpers used by the renderer.
//!
//! Everything in here is pure apart from [`log_timestamp`], which reads the
//! local wall clock.

use chrono::{DateTime, Local};
use std::time::Duration;

/// Width reserved for the percentage field when sizing the bar.
pub const PERCENTAGE_WIDTH: usize = 7;

/// Ratio used in place of zero when extrapolating the total duration.
pub const MIN_RATIO: f64 = 1e-2;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Ratio of work done, `1.0` for an empty task.
///
/// # Panics
///
/// Panics if `progress` exceeds `total`.
pub fn progress_ratio(progress: u64, total: u64) -> f64 {
    let ratio = if total == 0 {
        1.0
    } else {
        progress as f64 / total as f64
    };
    assert!(
        (0.0..=1.0).contains(&ratio),
        "progress ratio {ratio} out of range ({progress}/{total})"
    );
    ratio
}

/// Format the percentage field, e.g. `" 87.3%"` or `"100.0%"`.
///
/// ```rust
/// use linebar::format::percentage;
///
/// assert_eq!(percentage(0.0), "  0.0%");
/// assert_eq!(percentage(0.5), " 50.0%");
/// assert_eq!(percentage(1.0), "100.0%");
/// ```
pub fn percentage(ratio: f64) -> String {
    format!("{:5.1}%", ratio * 100.0)
}

/// Extrapolate the time left from the time already spent.
///
/// A ratio of zero is replaced with [`MIN_RATIO`] so the estimate stays finite.
/// Estimates too large for a [`Duration`] saturate at [`Duration::MAX`].
pub fn remaining_time(elapsed: Duration, ratio: f64) -> Duration {
    let ratio = if ratio == 0.0 { MIN_RATIO } else { ratio };
    let elapsed = elapsed.as_secs_f64();
    let total = elapsed / ratio;
    Duration::try_from_secs_f64((total - elapsed).max(0.0))
        .unwrap_or(Duration::MAX)
}

/// Render a duration from its largest non-zero unit down to seconds.
///
/// Every unit after the leading one is zero-padded to two digits. Sub-second
/// precision is truncated.
///
/// ```rust
/// use std::time::Duration;
/// use linebar::format::beautify_duration;
///
/// assert_eq!(beautify_duration(Duration::from_secs(65)), "1m05s");
/// assert_eq!(beautify_duration(Duration::from_secs(90065)), "1d01h01m05s");
/// assert_eq!(beautify_duration(Duration::from_millis(250)), "0s");
/// ```
pub fn beautify_duration(duration: Duration) -> String {
    let mut secs = duration.as_secs();
    let days = secs / SECONDS_PER_DAY;
    secs %= SECONDS_PER_DAY;
    let hours = secs / SECONDS_PER_HOUR;
    secs %= SECONDS_PER_HOUR;
    let minutes = secs / SECONDS_PER_MINUTE;
    secs %= SECONDS_PER_MINUTE;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{days}d"));
    }
    if days > 0 {
        out.push_str(&format!("{hours:02}h"));
    } else if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if days > 0 || hours > 0 {
        out.push_str(&format!("{minutes:02}m"));
    } else if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        out.push_str(&format!("{secs:02}s"));
    } else {
        out.push_str(&format!("{secs}s"));
    }
    out
}

/// Bracketed millisecond timestamp prefixing every line in logging mode.
pub fn log_timestamp(now: DateTime<Local>) -> String {
    now.format("[%Y-%m-%d %H:%M:%S%.3f]").to_string()
}

/// The `<percent>, <progress>/<total>, <eta> remaining` tail shared by both
/// rendering modes.
pub fn summary(ratio: f64, progress: u64, total: u64, remaining: Duration) -> String {
    format!(
        "{}, {}/{}, {} remaining",
        percentage(ratio),
        progress,
        total,
        beautify_duration(remaining)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_percentage_field() {
        assert_eq!(percentage(0.0), "  0.0%");
        assert_eq!(percentage(0.873), " 87.3%");
        assert_eq!(percentage(1.0), "100.0%");
    }

    #[test]
    fn test_ratio_of_empty_task_is_complete() {
        assert_eq!(progress_ratio(0, 0), 1.0);
        assert_eq!(progress_ratio(5, 10), 0.5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_ratio_above_one_panics() {
        progress_ratio(11, 10);
    }

    #[test]
    fn test_beautify_literal_cases() {
        assert_eq!(beautify_duration(Duration::from_secs(0)), "0s");
        assert_eq!(beautify_duration(Duration::from_secs(9)), "9s");
        assert_eq!(beautify_duration(Duration::from_secs(65)), "1m05s");
        assert_eq!(beautify_duration(Duration::from_secs(3600)), "1h00m00s");
        assert_eq!(beautify_duration(Duration::from_secs(3661)), "1h01m01s");
        assert_eq!(beautify_duration(Duration::from_secs(90065)), "1d01h01m05s");
        assert_eq!(beautify_duration(Duration::from_secs(86400)), "1d00h00m00s");
    }

    #[test]
    fn test_beautify_truncates_fraction() {
        assert_eq!(beautify_duration(Duration::from_millis(250)), "0s");
        assert_eq!(beautify_duration(Duration::from_millis(59_999)), "59s");
    }

    #[test]
    fn test_remaining_time_extrapolates() {
        let left = remaining_time(Duration::from_secs(10), 0.25);
        assert_eq!(left.as_secs(), 30);
        assert_eq!(remaining_time(Duration::from_secs(10), 1.0), Duration::ZERO);
    }

    #[test]
    fn test_remaining_time_zero_ratio_uses_floor() {
        let left = remaining_time(Duration::from_secs(1), 0.0);
        assert_eq!(left.as_secs(), 99);
    }

    #[test]
    fn test_remaining_time_saturates() {
        let left = remaining_time(Duration::from_secs(2), 1e-19);
        assert_eq!(left, Duration::MAX);
        assert!(beautify_duration(left).ends_with('s'));
    }

    #[test]
    fn test_log_timestamp_shape() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(log_timestamp(at), "[2024-03-09 07:05:01.042]");
    }
}
