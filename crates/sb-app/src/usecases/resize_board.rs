//! Use case: the board container was resized or moved.

use tracing::{debug, instrument};

use sb_core::board::GridDimensions;

use crate::state::SharedWorkspace;

/// Record new container bounds. Placed cards are not relocated; only
/// subsequent placements see the new size.
pub struct ResizeBoard {
    workspace: SharedWorkspace,
}

impl ResizeBoard {
    pub fn new(workspace: SharedWorkspace) -> Self {
        Self { workspace }
    }

    #[instrument(name = "usecase.resize_board.execute", skip(self))]
    pub async fn execute(
        &self,
        width: f64,
        height: f64,
        origin: Option<(f64, f64)>,
    ) -> GridDimensions {
        let mut ws = self.workspace.lock().await;
        ws.board.resize(width, height);
        if let Some((left, top)) = origin {
            ws.board.set_origin(left, top);
        }

        let dims = ws.board.grid_dimensions();
        debug!(rows = dims.rows, cols = dims.cols, "Board resized");
        dims
    }
}
