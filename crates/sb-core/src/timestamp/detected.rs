use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// Fact emitted by the clipboard watcher for each validated detection.
///
/// This is the payload handed to `on_timestamp` subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampDetected {
    pub assigned_id: EntityId,
    pub raw_value: String,
    pub detected_at_ms: i64,
}
