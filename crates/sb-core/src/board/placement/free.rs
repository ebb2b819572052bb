//! Continuous placement on a free pixel canvas.

use super::super::entity::PixelPosition;
use super::super::geometry::{CardBox, CardGeometry, ContainerRect};

pub const SEARCH_ROW_LIMIT: u32 = 100;
pub const FALLBACK_DELTA: f64 = 20.0;
pub const DEFAULT_POSITION: PixelPosition = PixelPosition { x: 20.0, y: 20.0 };

/// Find a spot for an auto-placed card that overlaps none of `existing`.
///
/// Candidates are laid out row-major on a `card + spacing` lattice,
/// limited to the rows that fit the container height (at most
/// [`SEARCH_ROW_LIMIT`]). Both axes are clamped so a candidate never
/// leaves the container. If none is free the card is offset from `last`
/// (the most recently added card), or put at [`DEFAULT_POSITION`] when
/// the canvas is empty.
pub fn find_free_position(
    existing: &[PixelPosition],
    last: Option<PixelPosition>,
    container: &ContainerRect,
    geometry: &CardGeometry,
) -> PixelPosition {
    let pitch_x = geometry.card_width + geometry.spacing;
    let pitch_y = geometry.card_height + geometry.spacing;
    let max_col = max_columns(container.width, pitch_x);
    let max_row = max_columns(container.height, pitch_y).min(SEARCH_ROW_LIMIT);
    let max_x = container.max_x(geometry);
    let max_y = container.max_y(geometry);

    let boxes: Vec<CardBox> = existing
        .iter()
        .map(|pos| CardBox::at(*pos, geometry))
        .collect();

    for row in 0..max_row {
        for col in 0..max_col {
            let candidate = PixelPosition {
                x: (f64::from(col) * pitch_x + geometry.spacing).min(max_x),
                y: (f64::from(row) * pitch_y + geometry.spacing).min(max_y),
            };
            let candidate_box = CardBox::at(candidate, geometry);
            if boxes.iter().all(|b| candidate_box.is_disjoint(b)) {
                return candidate;
            }
        }
    }

    fallback_position(last, container, geometry)
}

/// Lattice slots along one axis, at least one.
fn max_columns(extent: f64, pitch: f64) -> u32 {
    let n = (extent / pitch).floor();
    if n.is_nan() || n < 1.0 {
        1
    } else {
        n.min(f64::from(u32::MAX)) as u32
    }
}

/// Offset from the last card, wrapping x within the container.
pub fn fallback_position(
    last: Option<PixelPosition>,
    container: &ContainerRect,
    geometry: &CardGeometry,
) -> PixelPosition {
    let Some(last) = last else {
        return DEFAULT_POSITION;
    };

    let span = container.width - geometry.card_width;
    let x = if span > 0.0 {
        (last.x + FALLBACK_DELTA).rem_euclid(span)
    } else {
        0.0
    };
    let y = (last.y + FALLBACK_DELTA).clamp(0.0, container.max_y(geometry));

    PixelPosition { x, y }
}

/// Apply a drag delta to `from` and clamp each axis into the container.
///
/// Other cards are ignored: a dragged card may land on top of one.
pub fn drag_by(
    from: PixelPosition,
    dx: f64,
    dy: f64,
    container: &ContainerRect,
    geometry: &CardGeometry,
) -> PixelPosition {
    container.clamp(PixelPosition::new(from.x + dx, from.y + dy), geometry)
}
