//! # sb-platform
//!
//! Platform-specific implementations for Stampboard: the OS clipboard,
//! wall clock, host timezone, the polling watcher runtime and the host
//! bridge a UI subscribes to.

pub mod bridge;
pub mod clipboard;
pub mod clock;
pub mod runtime;
pub mod timezone;

pub use bridge::{HostBridge, Subscription};
pub use clipboard::{InMemoryClipboard, SystemClipboard};
pub use clock::SystemClock;
pub use runtime::clipboard::{ClipboardWatcher, PollingClipboardRuntime};
