//! Humanized relative time ("3 minutes ago", "in a day").

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const MONTH: f64 = 30.4375 * DAY;
const YEAR: f64 = 365.25 * DAY;

/// Describe `then_ms` relative to `now_ms`, both in epoch milliseconds.
pub fn humanize_relative(then_ms: i64, now_ms: i64) -> String {
    let delta_ms = now_ms.saturating_sub(then_ms);
    let phrase = describe(delta_ms.unsigned_abs() as f64 / 1000.0);

    if delta_ms < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn describe(secs: f64) -> String {
    let minutes = (secs / MINUTE).round();
    let hours = (secs / HOUR).round();
    let days = (secs / DAY).round();
    let months = (secs / MONTH).round();
    let years = (secs / YEAR).round();

    if secs.round() < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_recent_past() {
        assert_eq!(humanize_relative(NOW - 10_000, NOW), "a few seconds ago");
        assert_eq!(humanize_relative(NOW - 60_000, NOW), "a minute ago");
        assert_eq!(humanize_relative(NOW - 5 * 60_000, NOW), "5 minutes ago");
    }

    #[test]
    fn test_hours_days_and_years() {
        assert_eq!(humanize_relative(NOW - 3 * 3_600_000, NOW), "3 hours ago");
        assert_eq!(humanize_relative(NOW - 24 * 3_600_000, NOW), "a day ago");
        assert_eq!(humanize_relative(NOW - 10 * 86_400_000, NOW), "10 days ago");
        assert_eq!(
            humanize_relative(NOW - 3 * 365 * 86_400_000, NOW),
            "3 years ago"
        );
    }

    #[test]
    fn test_future_values_use_in() {
        assert_eq!(humanize_relative(NOW + 2 * 3_600_000, NOW), "in 2 hours");
    }
}
