//! Business logic use cases
//!
//! [ClipboardWatcher]
//        ↓
// IntakeTimestamp          → intake list (highlighted)
//        ↓
// PlaceTimestamp           → board (auto or pointer drop)
// MoveBoardEntity          → drag on the board
// ---------------------------------
// RemoveTimestamp / ClearSection
// ResizeBoard
// RenderCards              → what the UI draws

pub mod intake_timestamp;
pub mod monitoring;
pub mod move_entity;
pub mod place_timestamp;
pub mod remove_timestamp;
pub mod render_cards;
pub mod resize_board;

pub use intake_timestamp::IntakeTimestamp;
pub use monitoring::{MonitoringError, StartMonitoring, StopMonitoring};
pub use move_entity::{DragMove, MoveBoardEntity};
pub use place_timestamp::{DropTarget, PlaceTimestamp, PlaceTimestampError};
pub use remove_timestamp::{ClearSection, RemoveTimestamp, RemoveTimestampError};
pub use render_cards::{RenderCards, RenderedCard};
pub use resize_board::ResizeBoard;
