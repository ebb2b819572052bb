//! The board: every placed card plus the current container size.
//!
//! All placement decisions read the board as it is at call time. Callers
//! hold one `Board` behind a lock and pass `&mut Board` into each
//! handler, so resize, insert and drag events always see each other's
//! effects.

use std::collections::HashSet;

use crate::ids::EntityId;

use super::entity::{CellPosition, Location, PixelPosition, PlacedEntity, TimestampEntity};
use super::geometry::{CardGeometry, ContainerRect, GridDimensions};
use super::placement::{free, grid, PlacementMode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("entity not on board: {0}")]
    NotFound(EntityId),

    #[error("entity already on board: {0}")]
    AlreadyPlaced(EntityId),
}

#[derive(Debug, Clone)]
pub struct Board {
    mode: PlacementMode,
    geometry: CardGeometry,
    container: ContainerRect,
    entities: Vec<PlacedEntity>,
}

impl Board {
    pub fn new(mode: PlacementMode, geometry: CardGeometry, container: ContainerRect) -> Self {
        Self {
            mode,
            geometry,
            container,
            entities: Vec::new(),
        }
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn geometry(&self) -> &CardGeometry {
        &self.geometry
    }

    pub fn container(&self) -> &ContainerRect {
        &self.container
    }

    pub fn grid_dimensions(&self) -> GridDimensions {
        GridDimensions::for_container(&self.container, &self.geometry)
    }

    /// Placed entities in insertion order.
    pub fn entities(&self) -> &[PlacedEntity] {
        &self.entities
    }

    pub fn get(&self, id: &EntityId) -> Option<&PlacedEntity> {
        self.entities.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Update the container size. Placed cards keep their locations.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.container.width = width;
        self.container.height = height;
    }

    pub fn set_origin(&mut self, left: f64, top: f64) {
        self.container.left = left;
        self.container.top = top;
    }

    /// Auto-place a newly detected entity.
    pub fn place_new(&mut self, entity: TimestampEntity) -> Result<Location, BoardError> {
        self.ensure_absent(&entity.id)?;

        let location = match self.mode {
            PlacementMode::Grid => {
                let occupied = self.occupied_cells(None);
                let cell = grid::first_free_cell(self.grid_dimensions(), |c| occupied.contains(&c))
                    .unwrap_or_else(|| {
                        warn_grid_full(&entity.id);
                        CellPosition::ORIGIN
                    });
                Location::Cell(cell)
            }
            PlacementMode::Free => {
                let existing = self.pixel_positions();
                let last = self.entities.last().map(|p| self.pixel_of(p));
                Location::Pixel(free::find_free_position(
                    &existing,
                    last,
                    &self.container,
                    &self.geometry,
                ))
            }
        };

        self.entities.push(PlacedEntity {
            entity: entity.settled(),
            location,
        });
        Ok(location)
    }

    /// Place an entity dropped at a client-space pointer.
    pub fn place_at_pointer(
        &mut self,
        entity: TimestampEntity,
        client_x: f64,
        client_y: f64,
    ) -> Result<Location, BoardError> {
        self.ensure_absent(&entity.id)?;
        let location = self.location_for_pointer(&entity.id, false, client_x, client_y);
        self.entities.push(PlacedEntity {
            entity: entity.settled(),
            location,
        });
        Ok(location)
    }

    /// Relocate a placed entity by a drag delta.
    ///
    /// On the free canvas the delta is applied and clamped. On the grid
    /// the card's centre is moved by the delta and snapped to a free
    /// cell, ignoring the card itself.
    pub fn move_by(&mut self, id: &EntityId, dx: f64, dy: f64) -> Result<Location, BoardError> {
        let index = self.index_of(id)?;
        let current = self.pixel_of(&self.entities[index]);

        let location = match self.mode {
            PlacementMode::Free => Location::Pixel(free::drag_by(
                current,
                dx,
                dy,
                &self.container,
                &self.geometry,
            )),
            PlacementMode::Grid => {
                let x = current.x + self.geometry.card_width / 2.0 + dx;
                let y = current.y + self.geometry.card_height / 2.0 + dy;
                Location::Cell(self.grid_cell_for(id, true, x, y))
            }
        };

        self.entities[index].location = location;
        Ok(location)
    }

    /// Relocate a placed entity to a client-space pointer.
    pub fn move_to_pointer(
        &mut self,
        id: &EntityId,
        client_x: f64,
        client_y: f64,
    ) -> Result<Location, BoardError> {
        let index = self.index_of(id)?;
        let location = self.location_for_pointer(id, true, client_x, client_y);
        self.entities[index].location = location;
        Ok(location)
    }

    pub fn remove(&mut self, id: &EntityId) -> Result<PlacedEntity, BoardError> {
        let index = self.index_of(id)?;
        Ok(self.entities.remove(index))
    }

    /// Empty the board, returning how many cards were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entities.len();
        self.entities.clear();
        removed
    }

    /// `on_board` marks `id` as already placed, so its own cell does not
    /// count as occupied.
    fn location_for_pointer(
        &self,
        id: &EntityId,
        on_board: bool,
        client_x: f64,
        client_y: f64,
    ) -> Location {
        let (x, y) = self.container.to_local(client_x, client_y);
        match self.mode {
            PlacementMode::Grid => Location::Cell(self.grid_cell_for(id, on_board, x, y)),
            PlacementMode::Free => {
                Location::Pixel(self.container.clamp(PixelPosition::new(x, y), &self.geometry))
            }
        }
    }

    fn grid_cell_for(&self, id: &EntityId, on_board: bool, x: f64, y: f64) -> CellPosition {
        let occupied = self.occupied_cells(on_board.then_some(id));
        let dims = self.grid_dimensions();
        if occupied.len() as u64 >= dims.cell_count() {
            warn_grid_full(id);
        }
        grid::find_empty_cell(x, y, dims, &self.geometry, |c| occupied.contains(&c))
    }

    fn occupied_cells(&self, exclude: Option<&EntityId>) -> HashSet<CellPosition> {
        self.entities
            .iter()
            .filter(|p| Some(p.id()) != exclude)
            .filter_map(|p| p.location.as_cell())
            .collect()
    }

    fn pixel_positions(&self) -> Vec<PixelPosition> {
        self.entities.iter().map(|p| self.pixel_of(p)).collect()
    }

    fn pixel_of(&self, placed: &PlacedEntity) -> PixelPosition {
        match placed.location {
            Location::Pixel(pos) => pos,
            Location::Cell(cell) => grid::cell_origin(cell, &self.geometry),
        }
    }

    fn index_of(&self, id: &EntityId) -> Result<usize, BoardError> {
        self.entities
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| BoardError::NotFound(id.clone()))
    }

    fn ensure_absent(&self, id: &EntityId) -> Result<(), BoardError> {
        if self.contains(id) {
            Err(BoardError::AlreadyPlaced(id.clone()))
        } else {
            Ok(())
        }
    }
}

#[allow(unused_variables)]
fn warn_grid_full(id: &EntityId) {
    #[cfg(feature = "tracing")]
    tracing::warn!(entity_id = %id, "grid is full, stacking card on cell (0, 0)");
}
