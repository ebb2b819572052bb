use async_trait::async_trait;

/// Port for controlling the clipboard watcher lifecycle.
///
/// # Behavior
/// - `start_watcher()` is idempotent.
/// - `stop_watcher()` is idempotent. Stopping does not interrupt a read
///   already in progress; its result is discarded.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;

    fn is_running(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),

    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}
