//! Clipboard watcher
//!
//! Observes the local clipboard one tick at a time and turns new
//! timestamp-looking text into [`TimestampDetected`] events.
//!
//! ```text
//! Local Clipboard
//!      ↓
//! ClipboardReaderPort
//!      ↓
//! ClipboardWatcher   (this module)
//!      ↓
//! broadcast::Sender<TimestampDetected>
//!      ↓
//! HostBridge subscribers
//! ```
//!
//! ## Change Detection
//!
//! The last observed clipboard text is kept verbatim. A tick that reads
//! the same text does nothing. A tick that reads different text records
//! it as the new baseline before validating it, so invalid text is
//! never re-checked until the clipboard changes again.
//!
//! ## Lifecycle
//!
//! The watcher is driven by `PollingClipboardRuntime`. While disabled it
//! still reads and tracks changes but drops every detection, which is
//! how a read that was already running at stop time gets suppressed.

use anyhow::Result;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};

use sb_core::ids::EntityId;
use sb_core::ports::{ClipboardReaderPort, ClockPort};
use sb_core::timestamp::{is_valid_timestamp, TimestampDetected};

pub struct ClipboardWatcher<C>
where
    C: ClipboardReaderPort,
{
    clipboard: Arc<C>,
    clock: Arc<dyn ClockPort>,
    tx: broadcast::Sender<TimestampDetected>,
    last_text: Mutex<Option<String>>,
    enabled: AtomicBool,
}

impl<C> ClipboardWatcher<C>
where
    C: ClipboardReaderPort + 'static,
{
    pub fn new(
        clipboard: Arc<C>,
        clock: Arc<dyn ClockPort>,
        tx: broadcast::Sender<TimestampDetected>,
    ) -> Self {
        Self {
            clipboard,
            clock,
            tx,
            last_text: Mutex::new(None),
            enabled: AtomicBool::new(true),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Check the clipboard once.
    ///
    /// Returns the emitted detection, if any. A read failure is returned
    /// as an error and leaves the baseline untouched.
    pub async fn check_once(&self) -> Result<Option<TimestampDetected>> {
        let text = self.clipboard.read_text()?;

        {
            let mut last = self.last_text.lock().await;
            if last.as_deref() == Some(text.as_str()) {
                return Ok(None);
            }
            *last = Some(text.clone());
        }

        if !is_valid_timestamp(&text) {
            debug!(len = text.len(), "Clipboard changed, not a timestamp");
            return Ok(None);
        }

        if !self.enabled.load(Ordering::Acquire) {
            debug!("Watcher stopped, dropping detection");
            return Ok(None);
        }

        let event = TimestampDetected {
            assigned_id: EntityId::new(),
            raw_value: text,
            detected_at_ms: self.clock.now_ms(),
        };

        info!(entity_id = %event.assigned_id, raw = %event.raw_value, "Timestamp detected");

        // No subscribers is fine: the event is simply dropped.
        if self.tx.send(event.clone()).is_err() {
            debug!("No timestamp listeners attached");
        }

        Ok(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::InMemoryClipboard;
    use sb_core::ports::FixedClock;

    fn watcher(
        clipboard: Arc<InMemoryClipboard>,
    ) -> (
        ClipboardWatcher<InMemoryClipboard>,
        broadcast::Receiver<TimestampDetected>,
    ) {
        let (tx, rx) = broadcast::channel(8);
        let w = ClipboardWatcher::new(clipboard, Arc::new(FixedClock(1_000)), tx);
        (w, rx)
    }

    #[tokio::test]
    async fn test_emits_once_per_change() {
        let clipboard = Arc::new(InMemoryClipboard::with_text("1700000000"));
        let (w, mut rx) = watcher(clipboard.clone());

        let event = w.check_once().await.unwrap().expect("detection");
        assert_eq!(event.raw_value, "1700000000");
        assert_eq!(event.detected_at_ms, 1_000);
        assert_eq!(rx.recv().await.unwrap(), event);

        assert!(w.check_once().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ignores_non_timestamps() {
        let clipboard = Arc::new(InMemoryClipboard::with_text("hello"));
        let (w, _rx) = watcher(clipboard.clone());
        assert!(w.check_once().await.unwrap().is_none());

        clipboard.set_text("-5");
        assert!(w.check_once().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_same_value_copied_again_after_other_text_is_new() {
        let clipboard = Arc::new(InMemoryClipboard::with_text("42"));
        let (w, _rx) = watcher(clipboard.clone());
        let first = w.check_once().await.unwrap().unwrap();

        clipboard.set_text("something else");
        w.check_once().await.unwrap();
        clipboard.set_text("42");
        let second = w.check_once().await.unwrap().unwrap();

        assert_ne!(first.assigned_id, second.assigned_id);
    }

    #[tokio::test]
    async fn test_read_failure_keeps_baseline() {
        let clipboard = Arc::new(InMemoryClipboard::with_text("42"));
        let (w, _rx) = watcher(clipboard.clone());
        w.check_once().await.unwrap();

        clipboard.fail_next_reads(1);
        assert!(w.check_once().await.is_err());
        // unchanged text after the failure is still "no change"
        assert!(w.check_once().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_listener_is_not_an_error() {
        let clipboard = Arc::new(InMemoryClipboard::with_text("42"));
        let (tx, rx) = broadcast::channel(8);
        drop(rx);
        let w = ClipboardWatcher::new(clipboard, Arc::new(FixedClock(0)), tx);
        assert!(w.check_once().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_disabled_watcher_drops_detections() {
        let clipboard = Arc::new(InMemoryClipboard::with_text("42"));
        let (w, _rx) = watcher(clipboard.clone());
        w.set_enabled(false);
        assert!(w.check_once().await.unwrap().is_none());

        // the change was still recorded as the baseline
        w.set_enabled(true);
        assert!(w.check_once().await.unwrap().is_none());
    }
}
