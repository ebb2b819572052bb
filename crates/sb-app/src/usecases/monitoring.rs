//! Use cases for starting and stopping clipboard monitoring.

use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use sb_core::ports::{WatcherControlError, WatcherControlPort};

#[derive(Debug, thiserror::Error)]
pub enum MonitoringError {
    #[error("Failed to start clipboard monitoring: {0}")]
    StartFailed(String),

    #[error("Failed to stop clipboard monitoring: {0}")]
    StopFailed(String),
}

/// Ask the watcher to begin polling. Starting twice is harmless.
pub struct StartMonitoring {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartMonitoring {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), MonitoringError> {
        let span = info_span!("usecase.start_monitoring.execute");

        async {
            if self.watcher_control.is_running() {
                info!("Clipboard monitoring already running");
                return Ok(());
            }

            self.watcher_control
                .start_watcher()
                .await
                .map_err(|e: WatcherControlError| MonitoringError::StartFailed(e.to_string()))?;

            info!("Clipboard monitoring requested");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Ask the watcher to stop. Stopping a stopped watcher is harmless.
pub struct StopMonitoring {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopMonitoring {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), MonitoringError> {
        let span = info_span!("usecase.stop_monitoring.execute");

        async {
            self.watcher_control
                .stop_watcher()
                .await
                .map_err(|e| MonitoringError::StopFailed(e.to_string()))?;

            info!("Clipboard monitoring stop requested");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        WatcherControl {}

        #[async_trait]
        impl WatcherControlPort for WatcherControl {
            async fn start_watcher(&self) -> Result<(), WatcherControlError>;
            async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
            fn is_running(&self) -> bool;
        }
    }

    #[tokio::test]
    async fn test_start_requests_watcher() {
        let mut control = MockWatcherControl::new();
        control.expect_is_running().return_const(false);
        control.expect_start_watcher().times(1).returning(|| Ok(()));

        let result = StartMonitoring::new(Arc::new(control)).execute().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_start_skips_running_watcher() {
        let mut control = MockWatcherControl::new();
        control.expect_is_running().return_const(true);
        control.expect_start_watcher().never();

        assert!(StartMonitoring::new(Arc::new(control)).execute().await.is_ok());
    }

    #[tokio::test]
    async fn test_start_propagates_error() {
        let mut control = MockWatcherControl::new();
        control.expect_is_running().return_const(false);
        control
            .expect_start_watcher()
            .returning(|| Err(WatcherControlError::StartFailed("mock failure".into())));

        let err = StartMonitoring::new(Arc::new(control))
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(err, MonitoringError::StartFailed(_)));
    }

    #[tokio::test]
    async fn test_stop_maps_error() {
        let mut control = MockWatcherControl::new();
        control
            .expect_stop_watcher()
            .returning(|| Err(WatcherControlError::StopFailed("mock failure".into())));

        let err = StopMonitoring::new(Arc::new(control))
            .execute()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("mock failure"));
    }
}
