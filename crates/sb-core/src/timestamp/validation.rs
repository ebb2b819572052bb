//! Epoch timestamp validation.
//!
//! A clipboard string is a timestamp candidate when it is a base-10
//! integer that is not negative. There is no upper bound: oversized
//! values are accepted here and only rejected when they are converted
//! for display.

/// Raw values above this are read as milliseconds since the epoch.
pub const MILLIS_THRESHOLD: i64 = 10_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,

    #[error("not a base-10 integer: {0:?}")]
    NotNumeric(String),

    #[error("timestamp is negative: {0}")]
    Negative(String),

    #[error("timestamp is outside the representable range: {0}")]
    OutOfRange(String),
}

/// Check that `raw` is a non-empty base-10 integer `>= 0`.
///
/// A single leading sign is allowed, so `"+5"` and `"-0"` pass while
/// `"-5"` does not. Whitespace is not trimmed.
pub fn validate(raw: &str) -> Result<(), TimestampError> {
    if raw.is_empty() {
        return Err(TimestampError::Empty);
    }

    let (negative, digits) = match raw.as_bytes()[0] {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::NotNumeric(raw.to_string()));
    }

    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(TimestampError::Negative(raw.to_string()));
    }

    Ok(())
}

pub fn is_valid_timestamp(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Convert a raw epoch value to seconds.
///
/// Values above [`MILLIS_THRESHOLD`] are integer-divided by 1000.
pub fn normalize_epoch(value: i64) -> i64 {
    if value > MILLIS_THRESHOLD {
        value / 1000
    } else {
        value
    }
}

/// Validate `raw` and return it as seconds since the epoch.
pub fn to_epoch_seconds(raw: &str) -> Result<i64, TimestampError> {
    validate(raw)?;
    let value: i64 = raw
        .parse()
        .map_err(|_| TimestampError::OutOfRange(raw.to_string()))?;
    Ok(normalize_epoch(value))
}
