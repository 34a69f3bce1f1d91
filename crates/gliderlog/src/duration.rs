//! Flight duration strings.
//!
//! Durations are stored as `H:MM` or `HH:MM` text. Validation is strict and
//! regex-based; parsing is lenient and only feeds the running totals, where a
//! malformed legacy value counts as zero rather than failing the whole sum.

use std::sync::OnceLock;

use regex::Regex;

/// Grammar for a logged duration: one or two hour digits, two minute digits.
const DURATION_PATTERN: &str = r"^([0-9]{1,2}):([0-5][0-9])$";

fn duration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(DURATION_PATTERN).expect("duration pattern is valid"))
}

/// Check whether `value` is an acceptable duration.
///
/// The empty string is accepted and means "no duration logged".
///
/// # Examples
///
/// ```
/// use gliderlog::duration::is_valid_duration;
///
/// assert!(is_valid_duration("1:30"));
/// assert!(is_valid_duration(""));
/// assert!(!is_valid_duration("1:60"));
/// ```
#[must_use]
pub fn is_valid_duration(value: &str) -> bool {
    value.is_empty() || duration_regex().is_match(value)
}

/// Convert a duration string to whole minutes.
///
/// Returns 0 for anything that cannot be split into numeric hour and minute
/// parts.
#[must_use]
pub fn duration_to_minutes(value: &str) -> u64 {
    let mut parts = value.split(':');
    let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
        return 0;
    };

    match (hours.trim().parse::<u64>(), minutes.trim().parse::<u64>()) {
        (Ok(h), Ok(m)) => h.saturating_mul(60).saturating_add(m),
        _ => 0,
    }
}

/// Render whole minutes as `H:MM`.
#[must_use]
pub fn minutes_to_duration(minutes: u64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
