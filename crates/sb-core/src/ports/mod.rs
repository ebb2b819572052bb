//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the platform
//! implementations, so the core never touches the OS directly.

mod clipboard;
mod clock;
mod watcher_control;

pub use clipboard::ClipboardReaderPort;
pub use clock::{ClockPort, FixedClock};
pub use watcher_control::{WatcherControlError, WatcherControlPort};
