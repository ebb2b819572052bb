//! Polling clipboard runtime.
//!
//! Owns the start/stop lifecycle of a [`ClipboardWatcher`] and drives it
//! from a `tokio::time::interval` in a background task. Read failures are
//! logged and the loop carries on with the next tick.

use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{info, warn};

use sb_core::ports::{ClipboardReaderPort, WatcherControlError, WatcherControlPort};

use super::ClipboardWatcher;

pub struct PollingClipboardRuntime<C>
where
    C: ClipboardReaderPort,
{
    watcher: Arc<ClipboardWatcher<C>>,
    poll_interval: Duration,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl<C> PollingClipboardRuntime<C>
where
    C: ClipboardReaderPort + 'static,
{
    pub fn new(watcher: Arc<ClipboardWatcher<C>>, poll_interval: Duration) -> Self {
        Self {
            watcher,
            poll_interval,
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }

    pub fn watcher(&self) -> &Arc<ClipboardWatcher<C>> {
        &self.watcher
    }
}

#[async_trait]
impl<C> WatcherControlPort for PollingClipboardRuntime<C>
where
    C: ClipboardReaderPort + 'static,
{
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        // Held across the flag flip and the spawn so a concurrent stop
        // always finds the handle it has to abort.
        let mut slot = self.handle.lock().await;

        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }

        if self.poll_interval.is_zero() {
            self.running.store(false, Ordering::Release);
            return Err(WatcherControlError::StartFailed(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        let watcher = self.watcher.clone();
        let period = self.poll_interval;
        watcher.set_enabled(true);

        *slot = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if let Err(err) = watcher.check_once().await {
                    warn!(error = %err, "Error reading clipboard");
                }
            }
        }));
        info!(interval_ms = period.as_millis() as u64, "Clipboard monitoring started");

        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        let mut slot = self.handle.lock().await;
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        self.watcher.set_enabled(false);
        if let Some(handle) = slot.take() {
            handle.abort();
        }

        info!("Clipboard monitoring stopped");
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}
