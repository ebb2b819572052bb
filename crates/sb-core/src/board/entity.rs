use serde::{Deserialize, Serialize};

use crate::ids::EntityId;
use crate::timestamp::TimestampDetected;

/// A detected clipboard timestamp.
///
/// `raw_value` is the clipboard text exactly as read. `created_as_new`
/// only drives the highlight shown right after detection and plays no
/// part in placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampEntity {
    pub id: EntityId,
    pub raw_value: String,
    pub created_as_new: bool,
}

impl TimestampEntity {
    pub fn new(id: EntityId, raw_value: impl Into<String>) -> Self {
        Self {
            id,
            raw_value: raw_value.into(),
            created_as_new: true,
        }
    }

    /// Copy without the highlight flag.
    pub fn settled(&self) -> Self {
        Self {
            created_as_new: false,
            ..self.clone()
        }
    }
}

impl From<&TimestampDetected> for TimestampEntity {
    fn from(event: &TimestampDetected) -> Self {
        Self::new(event.assigned_id.clone(), event.raw_value.clone())
    }
}

/// Row/column cell of the discrete grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: u32,
    pub col: u32,
}

impl CellPosition {
    pub const ORIGIN: CellPosition = CellPosition { row: 0, col: 0 };

    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Top-left pixel coordinate of a card on the free canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

impl PixelPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    Cell(CellPosition),
    Pixel(PixelPosition),
}

impl Location {
    pub fn as_cell(&self) -> Option<CellPosition> {
        match self {
            Location::Cell(cell) => Some(*cell),
            Location::Pixel(_) => None,
        }
    }

    pub fn as_pixel(&self) -> Option<PixelPosition> {
        match self {
            Location::Pixel(pos) => Some(*pos),
            Location::Cell(_) => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Cell(c) => write!(f, "cell({}, {})", c.row, c.col),
            Location::Pixel(p) => write!(f, "px({:.0}, {:.0})", p.x, p.y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub entity: TimestampEntity,
    pub location: Location,
}

impl PlacedEntity {
    pub fn id(&self) -> &EntityId {
        &self.entity.id
    }
}
