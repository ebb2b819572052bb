//! # sb-core
//!
//! Core domain models and placement logic for Stampboard.
//!
//! This crate contains pure logic without any OS dependencies.

pub mod board;
pub mod config;
pub mod ids;
pub mod ports;
pub mod timestamp;

// Re-export commonly used types at the crate root
pub use board::{Board, BoardError, IntakeQueue, Location, PlacedEntity, PlacementMode, TimestampEntity};
pub use config::AppConfig;
pub use ids::EntityId;
pub use timestamp::{is_valid_timestamp, render_card, CardView, TimestampDetected};
