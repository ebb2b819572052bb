//! Clipboard port - read-only access to the system clipboard text.

use anyhow::Result;

/// Synchronous clipboard text reader.
///
/// Implementations are expected to return quickly; the watcher calls
/// this once per poll tick.
pub trait ClipboardReaderPort: Send + Sync {
    /// Current clipboard text. An empty clipboard reads as `""`.
    fn read_text(&self) -> Result<String>;
}
