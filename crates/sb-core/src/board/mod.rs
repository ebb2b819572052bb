//! Board domain: entities, geometry, placement and the two lists the
//! user works with (intake and board).

mod entity;
mod geometry;
mod intake;
pub mod placement;
mod store;

pub use entity::{CellPosition, Location, PixelPosition, PlacedEntity, TimestampEntity};
pub use geometry::{
    CardGeometry, ContainerRect, GridDimensions, DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH,
    DEFAULT_FREE_SPACING, DEFAULT_GRID_GAP,
};
pub use intake::{IntakeQueue, DEFAULT_INTAKE_CAPACITY};
pub use placement::PlacementMode;
pub use store::{Board, BoardError};
