//! Timestamp detection, validation and display formatting.

mod detected;
mod format;
mod relative;
mod validation;

pub use detected::TimestampDetected;
pub use format::{format_epoch_seconds, render_card, CardView, FormattedTimestamp, INVALID_TIMESTAMP};
pub use relative::humanize_relative;
pub use validation::{
    is_valid_timestamp, normalize_epoch, to_epoch_seconds, validate, TimestampError,
    MILLIS_THRESHOLD,
};
