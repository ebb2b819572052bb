//! Application configuration DTO.
//!
//! Maps the TOML config file onto typed sections. Every key is optional;
//! a missing key takes its built-in default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{
    CardGeometry, ContainerRect, PlacementMode, DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH,
    DEFAULT_FREE_SPACING, DEFAULT_GRID_GAP, DEFAULT_INTAKE_CAPACITY,
};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub const DEFAULT_HIGHLIGHT_MS: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub watcher: WatcherConfig,
    pub intake: IntakeConfig,
    pub board: BoardConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    pub poll_interval_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    pub capacity: usize,
    pub highlight_ms: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_INTAKE_CAPACITY,
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub placement: PlacementMode,
    pub card_width: f64,
    pub card_height: f64,
    pub gap: f64,
    pub spacing: f64,
    /// Initial container size in pixels.
    pub width: f64,
    pub height: f64,
    /// Put every detection straight onto the board.
    pub auto_place: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        // room for 3 rows x 2 cols of cards
        Self {
            placement: PlacementMode::default(),
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
            gap: DEFAULT_GRID_GAP,
            spacing: DEFAULT_FREE_SPACING,
            width: 2.0 * (DEFAULT_CARD_WIDTH + DEFAULT_GRID_GAP) + DEFAULT_GRID_GAP,
            height: 3.0 * (DEFAULT_CARD_HEIGHT + DEFAULT_GRID_GAP) + DEFAULT_GRID_GAP,
            auto_place: true,
        }
    }
}

impl BoardConfig {
    pub fn geometry(&self) -> CardGeometry {
        CardGeometry {
            card_width: self.card_width,
            card_height: self.card_height,
            gap: self.gap,
            spacing: self.spacing,
        }
    }

    pub fn container(&self) -> ContainerRect {
        ContainerRect::sized(self.width, self.height)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// IANA zone name; `None` means detect from the host.
    pub timezone: Option<String>,
}

impl AppConfig {
    /// Map a parsed TOML document onto the config sections.
    pub fn from_toml(value: &toml::Value) -> anyhow::Result<Self> {
        Ok(value.clone().try_into()?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.watcher.poll_interval_ms)
    }

    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.intake.highlight_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridDimensions;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.highlight_duration(), Duration::from_millis(1000));
        assert_eq!(config.intake.capacity, 20);
        assert_eq!(config.board.placement, PlacementMode::Grid);

        let dims = GridDimensions::for_container(&config.board.container(), &config.board.geometry());
        assert_eq!(dims, GridDimensions { rows: 3, cols: 2 });
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let value: toml::Value = toml::from_str(
            r#"
            [watcher]
            poll_interval_ms = 250

            [board]
            placement = "free"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config.watcher.poll_interval_ms, 250);
        assert_eq!(config.board.placement, PlacementMode::Free);
        assert_eq!(config.board.card_width, DEFAULT_CARD_WIDTH);
        assert!(config.display.timezone.is_none());
    }

    #[test]
    fn test_unknown_placement_is_rejected() {
        let value: toml::Value = toml::from_str("[board]\nplacement = \"spiral\"").unwrap();
        assert!(AppConfig::from_toml(&value).is_err());
    }
}
