//! Centralized validation and helper functions.

/// Default maximum number of issues accepted in one run.
///
/// The fuzzy pass compares every pair, so this bounds the work at roughly
/// 50 million pair comparisons.
pub const DEFAULT_MAX_ISSUES: usize = 10_000;

/// Check an issue count against a limit.
///
/// Returns the limit if `count` exceeds it, None if the count is acceptable.
///
/// # Examples
///
/// ```
/// use issue_dedup::utils::validation::check_issue_limit;
///
/// assert_eq!(check_issue_limit(10, 100), None);
/// assert_eq!(check_issue_limit(100, 100), None);
/// assert_eq!(check_issue_limit(101, 100), Some(100));
/// ```
#[must_use]
pub fn check_issue_limit(count: usize, max: usize) -> Option<usize> {
    if count > max {
        Some(max)
    } else {
        None
    }
}

/// Parse a similarity threshold, which must be a number in `[0, 1]`.
///
/// # Errors
///
/// Returns a message if the value is not a number or is out of range.
///
/// # Examples
///
/// ```
/// use issue_dedup::utils::validation::parse_threshold;
///
/// assert_eq!(parse_threshold("0.8"), Ok(0.8));
/// assert!(parse_threshold("1.5").is_err());
/// assert!(parse_threshold("high").is_err());
/// ```
pub fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;

    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0 and 1, got {value}"))
    }
}
