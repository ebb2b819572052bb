//! Discrete placement: cards snap to a row/column grid.

use super::super::entity::{CellPosition, PixelPosition};
use super::super::geometry::{CardGeometry, GridDimensions};

/// Cell under a container-space point, clamped into the grid.
pub fn cell_at_point(x: f64, y: f64, dims: GridDimensions, geometry: &CardGeometry) -> CellPosition {
    CellPosition {
        row: snap(y, geometry.grid_pitch_y(), dims.rows),
        col: snap(x, geometry.grid_pitch_x(), dims.cols),
    }
}

fn snap(offset: f64, pitch: f64, count: u32) -> u32 {
    let last = count.saturating_sub(1);
    let index = (offset / pitch).floor();
    if index.is_nan() || index <= 0.0 {
        0
    } else if index >= f64::from(last) {
        last
    } else {
        index as u32
    }
}

/// Top-left pixel of a cell, the inverse of [`cell_at_point`].
pub fn cell_origin(cell: CellPosition, geometry: &CardGeometry) -> PixelPosition {
    PixelPosition {
        x: f64::from(cell.col) * geometry.grid_pitch_x(),
        y: f64::from(cell.row) * geometry.grid_pitch_y(),
    }
}

/// First unoccupied cell scanning row-major from `(0, 0)`.
pub fn first_free_cell<F>(dims: GridDimensions, is_occupied: F) -> Option<CellPosition>
where
    F: Fn(CellPosition) -> bool,
{
    (0..dims.rows)
        .flat_map(|row| (0..dims.cols).map(move |col| CellPosition { row, col }))
        .find(|cell| !is_occupied(*cell))
}

/// Cell for a drop at a container-space point.
///
/// The cell under the pointer wins if free; otherwise the first free
/// cell row-major. A full grid yields `(0, 0)` even though that cell is
/// taken, so the caller ends up with two cards in one cell.
pub fn find_empty_cell<F>(
    x: f64,
    y: f64,
    dims: GridDimensions,
    geometry: &CardGeometry,
    is_occupied: F,
) -> CellPosition
where
    F: Fn(CellPosition) -> bool,
{
    let target = cell_at_point(x, y, dims, geometry);
    if !is_occupied(target) {
        return target;
    }
    first_free_cell(dims, &is_occupied).unwrap_or(CellPosition::ORIGIN)
}
