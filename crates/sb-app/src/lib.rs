//! Stampboard application layer
//!
//! Use cases that drive the intake list and the board, plus the shared
//! workspace they operate on.

pub mod state;
pub mod usecases;

pub use state::{Section, SharedWorkspace, Workspace};
