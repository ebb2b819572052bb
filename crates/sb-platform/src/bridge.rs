//! Host bridge: the surface a UI layer talks to.
//!
//! `start_monitoring` / `stop_monitoring` drive the watcher lifecycle and
//! `on_timestamp` attaches a callback that runs once per detection.

use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use sb_core::ports::{WatcherControlError, WatcherControlPort};
use sb_core::timestamp::TimestampDetected;

pub struct HostBridge {
    control: Arc<dyn WatcherControlPort>,
    events: broadcast::Sender<TimestampDetected>,
}

impl HostBridge {
    pub fn new(
        control: Arc<dyn WatcherControlPort>,
        events: broadcast::Sender<TimestampDetected>,
    ) -> Self {
        Self { control, events }
    }

    pub async fn start_monitoring(&self) -> Result<(), WatcherControlError> {
        self.control.start_watcher().await
    }

    pub async fn stop_monitoring(&self) -> Result<(), WatcherControlError> {
        self.control.stop_watcher().await
    }

    pub fn is_monitoring(&self) -> bool {
        self.control.is_running()
    }

    /// Raw receiver for callers that want to await detections themselves.
    pub fn subscribe(&self) -> broadcast::Receiver<TimestampDetected> {
        self.events.subscribe()
    }

    /// Invoke `callback` for every detection until the returned
    /// [`Subscription`] is dropped.
    pub fn on_timestamp<F>(&self, callback: F) -> Subscription
    where
        F: Fn(TimestampDetected) + Send + 'static,
    {
        let mut rx = self.events.subscribe();
        let handle = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => callback(event),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Timestamp listener fell behind, events dropped");
                    }
                    Err(RecvError::Closed) => {
                        debug!("Timestamp channel closed");
                        break;
                    }
                }
            }
        });

        Subscription { handle }
    }
}

/// Handle for an `on_timestamp` callback. Dropping it detaches the callback.
#[must_use = "dropping the subscription detaches the callback"]
pub struct Subscription {
    handle: JoinHandle<()>,
}

impl Subscription {
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
