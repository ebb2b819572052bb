//! The monitor loop: detections flow into the intake, optionally onto
//! the board, and each resulting card is logged.

use std::future::Future;

use anyhow::Context;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, info_span, warn, Instrument};

use sb_app::usecases::{DropTarget, RenderedCard};
use sb_app::Section;
use sb_core::timestamp::TimestampDetected;

use super::wiring::AppRuntime;

/// Run one detection through intake and, if enabled, auto-placement.
///
/// Returns the card as it now renders: the board card when it was
/// placed, the intake card otherwise.
pub async fn handle_detection(runtime: &AppRuntime, event: &TimestampDetected) -> Option<RenderedCard> {
    let span = info_span!("runner.handle_detection", entity_id = %event.assigned_id);

    async {
        let entity = runtime.intake.execute(event).await;

        let section = if runtime.config.board.auto_place {
            match runtime.place.execute(&entity.id, DropTarget::Auto).await {
                Ok(_) => Section::Board,
                Err(err) => {
                    warn!(error = %err, "Auto-placement failed, card stays in intake");
                    Section::Intake
                }
            }
        } else {
            Section::Intake
        };

        let card = runtime.render.one(section, &entity.id).await;
        if let Some(card) = &card {
            info!(%section, location = ?card.location, card = %card.view, "Card ready");
        }
        card
    }
    .instrument(span)
    .await
}

/// Start monitoring and process detections until `shutdown` resolves,
/// then stop monitoring.
pub async fn run_app<F>(runtime: AppRuntime, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    // Subscribe first so nothing detected right after start is missed.
    let mut events = runtime.bridge.subscribe();

    runtime
        .start_monitoring
        .execute()
        .await
        .context("Failed to start clipboard monitoring")?;

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
            received = events.recv() => match received {
                Ok(event) => {
                    handle_detection(&runtime, &event).await;
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Runner fell behind, detections dropped");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    runtime
        .stop_monitoring
        .execute()
        .await
        .context("Failed to stop clipboard monitoring")?;
    Ok(())
}
