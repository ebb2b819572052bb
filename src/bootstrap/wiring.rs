//! Dependency wiring
//!
//! Builds the platform adapters, the watcher runtime, the host bridge and
//! the shared workspace, and hands them to the runner as one
//! [`AppRuntime`].

use std::sync::Arc;

use chrono_tz::Tz;
use tokio::sync::broadcast;
use tracing::info;

use sb_app::usecases::{
    IntakeTimestamp, PlaceTimestamp, RenderCards, StartMonitoring, StopMonitoring,
};
use sb_app::{SharedWorkspace, Workspace};
use sb_core::config::AppConfig;
use sb_core::ports::{ClipboardReaderPort, ClockPort, WatcherControlPort};
use sb_platform::timezone::resolve_timezone;
use sb_platform::{ClipboardWatcher, HostBridge, PollingClipboardRuntime, SystemClipboard, SystemClock};

/// Buffered detections per subscriber before it starts lagging.
const EVENT_CHANNEL_CAPACITY: usize = 64;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),

    #[error("Timezone resolution failed: {0}")]
    Timezone(String),
}

/// Everything the runner needs, fully assembled.
pub struct AppRuntime {
    pub config: AppConfig,
    pub timezone: Tz,
    pub bridge: HostBridge,
    pub workspace: SharedWorkspace,
    pub start_monitoring: StartMonitoring,
    pub stop_monitoring: StopMonitoring,
    pub intake: IntakeTimestamp,
    pub place: PlaceTimestamp,
    pub render: RenderCards,
}

/// Wire against the OS clipboard and the wall clock.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppRuntime> {
    let clipboard =
        SystemClipboard::new().map_err(|e| WiringError::ClipboardInit(e.to_string()))?;
    wire_with(config, Arc::new(clipboard), Arc::new(SystemClock))
}

/// Wire against any clipboard reader and clock.
pub fn wire_with<C>(
    config: &AppConfig,
    clipboard: Arc<C>,
    clock: Arc<dyn ClockPort>,
) -> WiringResult<AppRuntime>
where
    C: ClipboardReaderPort + 'static,
{
    let timezone = resolve_timezone(config.display.timezone.as_deref())
        .map_err(|e| WiringError::Timezone(e.to_string()))?;

    let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
    let watcher = Arc::new(ClipboardWatcher::new(clipboard, clock.clone(), events.clone()));
    let control: Arc<dyn WatcherControlPort> =
        Arc::new(PollingClipboardRuntime::new(watcher, config.poll_interval()));

    let workspace = Workspace::from_config(config).into_shared();

    info!(
        placement = ?config.board.placement,
        timezone = %timezone,
        poll_ms = config.watcher.poll_interval_ms,
        "Dependencies wired"
    );

    Ok(AppRuntime {
        config: config.clone(),
        timezone,
        bridge: HostBridge::new(control.clone(), events),
        start_monitoring: StartMonitoring::new(control.clone()),
        stop_monitoring: StopMonitoring::new(control),
        intake: IntakeTimestamp::new(workspace.clone(), config.highlight_duration()),
        place: PlaceTimestamp::new(workspace.clone()),
        render: RenderCards::new(workspace.clone(), clock, timezone),
        workspace,
    })
}
