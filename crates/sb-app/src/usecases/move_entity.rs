//! Use case: the user drags a card that is already on the board.

use tracing::{debug, instrument};

use sb_core::board::{BoardError, Location};
use sb_core::ids::EntityId;

use crate::state::SharedWorkspace;

/// What the drag library reports on drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMove {
    /// Offset from the card's position at drag start.
    By { dx: f64, dy: f64 },
    /// Client-space pointer position at drop.
    To { client_x: f64, client_y: f64 },
}

pub struct MoveBoardEntity {
    workspace: SharedWorkspace,
}

impl MoveBoardEntity {
    pub fn new(workspace: SharedWorkspace) -> Self {
        Self { workspace }
    }

    #[instrument(name = "usecase.move_board_entity.execute", skip(self), fields(entity_id = %id))]
    pub async fn execute(&self, id: &EntityId, drag: DragMove) -> Result<Location, BoardError> {
        let mut ws = self.workspace.lock().await;
        let location = match drag {
            DragMove::By { dx, dy } => ws.board.move_by(id, dx, dy)?,
            DragMove::To { client_x, client_y } => ws.board.move_to_pointer(id, client_x, client_y)?,
        };
        debug!(%location, "Board entity moved");
        Ok(location)
    }
}
