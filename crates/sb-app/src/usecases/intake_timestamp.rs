//! Use case: a detection lands in the intake list.

use std::time::Duration;
use tracing::{debug, info, info_span, Instrument};

use sb_core::board::TimestampEntity;
use sb_core::timestamp::TimestampDetected;

use crate::state::SharedWorkspace;

/// Push a detection onto the intake list, highlighted, and schedule the
/// highlight to clear after `highlight`.
pub struct IntakeTimestamp {
    workspace: SharedWorkspace,
    highlight: Duration,
}

impl IntakeTimestamp {
    pub fn new(workspace: SharedWorkspace, highlight: Duration) -> Self {
        Self {
            workspace,
            highlight,
        }
    }

    pub async fn execute(&self, event: &TimestampDetected) -> TimestampEntity {
        let span = info_span!(
            "usecase.intake_timestamp.execute",
            entity_id = %event.assigned_id
        );

        async {
            let entity = TimestampEntity::from(event);
            {
                let mut ws = self.workspace.lock().await;
                if let Some(evicted) = ws.intake.push(entity.clone()) {
                    debug!(evicted = %evicted.id, "Intake full, dropped oldest entry");
                }
            }

            let workspace = self.workspace.clone();
            let id = entity.id.clone();
            let highlight = self.highlight;
            tokio::spawn(async move {
                tokio::time::sleep(highlight).await;
                if !workspace.lock().await.intake.settle(&id) {
                    debug!(entity_id = %id, "Entry left intake before highlight ended");
                }
            });

            info!(raw = %entity.raw_value, "Timestamp added to intake");
            entity
        }
        .instrument(span)
        .await
    }
}
