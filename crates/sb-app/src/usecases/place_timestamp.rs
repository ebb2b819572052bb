//! Use case: put an intake entry onto the board.

use tracing::{info, instrument};

use sb_core::board::{BoardError, Location};
use sb_core::ids::EntityId;

use crate::state::SharedWorkspace;

/// Where the user let go of the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropTarget {
    /// No pointer: let the board choose.
    Auto,
    /// Client-space pointer coordinates.
    Pointer { client_x: f64, client_y: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum PlaceTimestampError {
    #[error("timestamp not in intake: {0}")]
    NotInIntake(EntityId),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Copy an intake entry onto the board. The intake keeps its entry.
pub struct PlaceTimestamp {
    workspace: SharedWorkspace,
}

impl PlaceTimestamp {
    pub fn new(workspace: SharedWorkspace) -> Self {
        Self { workspace }
    }

    #[instrument(name = "usecase.place_timestamp.execute", skip(self), fields(entity_id = %id))]
    pub async fn execute(
        &self,
        id: &EntityId,
        target: DropTarget,
    ) -> Result<Location, PlaceTimestampError> {
        let mut ws = self.workspace.lock().await;
        let entity = ws
            .intake
            .get(id)
            .cloned()
            .ok_or_else(|| PlaceTimestampError::NotInIntake(id.clone()))?;

        let location = match target {
            DropTarget::Auto => ws.board.place_new(entity)?,
            DropTarget::Pointer { client_x, client_y } => {
                ws.board.place_at_pointer(entity, client_x, client_y)?
            }
        };

        info!(%location, "Timestamp placed on board");
        Ok(location)
    }
}
