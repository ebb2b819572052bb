//! Placement strategies.
//!
//! A board applies exactly one [`PlacementMode`], fixed when it is built.

pub mod free;
pub mod grid;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Cards snap to row/column cells; one card per cell.
    #[default]
    Grid,
    /// Cards sit at free pixel positions.
    Free,
}

impl std::str::FromStr for PlacementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(PlacementMode::Grid),
            "free" => Ok(PlacementMode::Free),
            other => Err(format!("unknown placement mode: {other}")),
        }
    }
}
