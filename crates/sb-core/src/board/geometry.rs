//! Card and container measurements shared by both placement strategies.

use serde::{Deserialize, Serialize};

use super::entity::PixelPosition;

pub const DEFAULT_CARD_WIDTH: f64 = 395.0;
pub const DEFAULT_CARD_HEIGHT: f64 = 125.0;
pub const DEFAULT_GRID_GAP: f64 = 16.0;
pub const DEFAULT_FREE_SPACING: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardGeometry {
    pub card_width: f64,
    pub card_height: f64,
    /// Gap between grid cells.
    pub gap: f64,
    /// Spacing between auto-placed cards on the free canvas.
    pub spacing: f64,
}

impl Default for CardGeometry {
    fn default() -> Self {
        Self {
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
            gap: DEFAULT_GRID_GAP,
            spacing: DEFAULT_FREE_SPACING,
        }
    }
}

impl CardGeometry {
    pub fn grid_pitch_x(&self) -> f64 {
        self.card_width + self.gap
    }

    pub fn grid_pitch_y(&self) -> f64 {
        self.card_height + self.gap
    }
}

/// The hosting surface: client-space origin plus size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Largest x a card can take without leaving the container.
    pub fn max_x(&self, geometry: &CardGeometry) -> f64 {
        (self.width - geometry.card_width).max(0.0)
    }

    pub fn max_y(&self, geometry: &CardGeometry) -> f64 {
        (self.height - geometry.card_height).max(0.0)
    }

    /// Translate a client-space pointer into container space.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }

    /// Clamp a card's top-left independently on each axis.
    pub fn clamp(&self, pos: PixelPosition, geometry: &CardGeometry) -> PixelPosition {
        PixelPosition {
            x: pos.x.clamp(0.0, self.max_x(geometry)),
            y: pos.y.clamp(0.0, self.max_y(geometry)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl GridDimensions {
    /// `cols = max(1, floor((width - gap) / (card_width + gap)))`, same for rows.
    pub fn for_container(container: &ContainerRect, geometry: &CardGeometry) -> Self {
        Self {
            rows: fit(container.height, geometry.gap, geometry.grid_pitch_y()),
            cols: fit(container.width, geometry.gap, geometry.grid_pitch_x()),
        }
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }
}

fn fit(extent: f64, gap: f64, pitch: f64) -> u32 {
    if pitch <= 0.0 {
        return 1;
    }
    let n = ((extent - gap) / pitch).floor();
    if n.is_nan() || n < 1.0 {
        1
    } else {
        n.min(f64::from(u32::MAX)) as u32
    }
}

/// Axis-aligned card box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CardBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl CardBox {
    pub fn at(pos: PixelPosition, geometry: &CardGeometry) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: geometry.card_width,
            h: geometry.card_height,
        }
    }

    /// Disjoint when one box lies entirely above, below, left or right
    /// of the other. Shared edges count as disjoint.
    pub fn is_disjoint(&self, other: &CardBox) -> bool {
        self.y + self.h <= other.y
            || other.y + other.h <= self.y
            || self.x + self.w <= other.x
            || other.x + other.w <= self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions_from_container() {
        let g = CardGeometry::default();
        // (1000 - 16) / 411 = 2.39 -> 2 cols; (600 - 16) / 141 = 4.14 -> 4 rows
        let dims = GridDimensions::for_container(&ContainerRect::sized(1000.0, 600.0), &g);
        assert_eq!(dims, GridDimensions { rows: 4, cols: 2 });
    }

    #[test]
    fn test_grid_dimensions_never_below_one() {
        let g = CardGeometry::default();
        let dims = GridDimensions::for_container(&ContainerRect::sized(10.0, 0.0), &g);
        assert_eq!(dims, GridDimensions { rows: 1, cols: 1 });
    }

    #[test]
    fn test_clamp_handles_container_smaller_than_card() {
        let g = CardGeometry::default();
        let c = ContainerRect::sized(100.0, 50.0);
        assert_eq!(
            c.clamp(PixelPosition::new(30.0, -4.0), &g),
            PixelPosition::new(0.0, 0.0)
        );
    }

    #[test]
    fn test_touching_boxes_are_disjoint() {
        let g = CardGeometry::default();
        let a = CardBox::at(PixelPosition::new(0.0, 0.0), &g);
        let b = CardBox::at(PixelPosition::new(395.0, 0.0), &g);
        let c = CardBox::at(PixelPosition::new(394.0, 124.0), &g);
        assert!(a.is_disjoint(&b));
        assert!(!a.is_disjoint(&c));
    }
}
