//! Card text for a detected timestamp.
//!
//! The raw clipboard value is carried through untouched; the formatted
//! lines are derived from it on every render.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::{OffsetComponents, Tz};
use serde::Serialize;

use super::relative::humanize_relative;
use super::validation::{to_epoch_seconds, TimestampError};

/// `dddd, MMM D, YYYY h:mm:ss A`
const DATE_PATTERN: &str = "%A, %b %-d, %Y %-I:%M:%S %p";

pub const INVALID_TIMESTAMP: &str = "Invalid timestamp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTimestamp {
    pub utc: String,
    pub local: String,
    pub relative: String,
}

/// Format a seconds-since-epoch value against UTC and `tz`.
pub fn format_epoch_seconds(
    seconds: i64,
    now_ms: i64,
    tz: &Tz,
) -> Result<FormattedTimestamp, TimestampError> {
    let utc = DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| TimestampError::OutOfRange(seconds.to_string()))?;
    let local = utc.with_timezone(tz);

    let dst = if local.offset().dst_offset() != Duration::zero() {
        " DST"
    } else {
        ""
    };

    Ok(FormattedTimestamp {
        utc: format!("GMT: {}", utc.format(DATE_PATTERN)),
        local: format!(
            "Local: {} {}{}",
            local.format(DATE_PATTERN),
            local.format("%Z"),
            dst
        ),
        relative: format!(
            "Relative: {}",
            humanize_relative(utc.timestamp_millis(), now_ms)
        ),
    })
}

/// What a timestamp card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardView {
    Formatted {
        raw: String,
        lines: FormattedTimestamp,
    },
    Invalid {
        raw: String,
    },
}

impl CardView {
    pub fn raw(&self) -> &str {
        match self {
            CardView::Formatted { raw, .. } | CardView::Invalid { raw } => raw,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CardView::Formatted { .. })
    }
}

impl std::fmt::Display for CardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardView::Formatted { raw, lines } => {
                write!(f, "{raw} | {} | {}", lines.utc, lines.local)
            }
            CardView::Invalid { raw } => write!(f, "{raw} | {INVALID_TIMESTAMP}"),
        }
    }
}

/// Render the card for a raw clipboard value.
///
/// Formatting is skipped entirely when the value does not validate or
/// falls outside the calendar range; the card then carries only the
/// raw text and the invalid marker.
pub fn render_card(raw: &str, now_ms: i64, tz: &Tz) -> CardView {
    match to_epoch_seconds(raw).and_then(|secs| format_epoch_seconds(secs, now_ms, tz)) {
        Ok(lines) => CardView::Formatted {
            raw: raw.to_string(),
            lines,
        },
        Err(_) => CardView::Invalid {
            raw: raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::is_valid_timestamp;

    const NOW_MS: i64 = 1_700_000_060_000;

    #[test]
    fn test_utc_line() {
        let lines = format_epoch_seconds(1_700_000_000, NOW_MS, &Tz::UTC).unwrap();
        assert_eq!(lines.utc, "GMT: Tuesday, Nov 14, 2023 10:13:20 PM");
        assert_eq!(lines.relative, "Relative: a minute ago");
    }

    #[test]
    fn test_local_line_standard_time() {
        let lines =
            format_epoch_seconds(1_700_000_000, NOW_MS, &chrono_tz::America::New_York).unwrap();
        assert_eq!(lines.local, "Local: Tuesday, Nov 14, 2023 5:13:20 PM EST");
    }

    #[test]
    fn test_local_line_marks_daylight_saving() {
        let lines =
            format_epoch_seconds(1_690_000_000, NOW_MS, &chrono_tz::America::New_York).unwrap();
        assert_eq!(
            lines.local,
            "Local: Saturday, Jul 22, 2023 12:26:40 AM EDT DST"
        );
    }

    #[test]
    fn test_milliseconds_render_like_seconds() {
        let from_ms = render_card("1700000000000", NOW_MS, &Tz::UTC);
        let from_s = render_card("1700000000", NOW_MS, &Tz::UTC);
        match (&from_ms, &from_s) {
            (
                CardView::Formatted { lines: a, .. },
                CardView::Formatted { lines: b, .. },
            ) => assert_eq!(a, b),
            other => panic!("expected formatted cards, got {other:?}"),
        }
        assert_eq!(from_ms.raw(), "1700000000000");
    }

    #[test]
    fn test_invalid_values_skip_formatting() {
        let card = render_card("abc", NOW_MS, &Tz::UTC);
        assert_eq!(card, CardView::Invalid { raw: "abc".into() });
        assert_eq!(card.to_string(), "abc | Invalid timestamp");

        let huge = "9".repeat(19);
        assert!(!render_card(&huge, NOW_MS, &Tz::UTC).is_valid());
    }

    #[test]
    fn test_render_never_mutates_raw_value() {
        for raw in ["0", "+17", "1700000000", "1700000000000", "-5", ""] {
            let card = render_card(raw, NOW_MS, &Tz::UTC);
            assert_eq!(card.raw(), raw);
            assert_eq!(is_valid_timestamp(card.raw()), is_valid_timestamp(raw));
        }
    }
}
