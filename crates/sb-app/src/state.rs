//! Shared mutable state for all UI handlers.
//!
//! There is exactly one `Workspace`. Handlers lock it for the duration of
//! one operation and read intake and board through the guard, never
//! through a copy taken earlier.

use std::sync::Arc;
use tokio::sync::Mutex;

use sb_core::board::{Board, IntakeQueue};
use sb_core::config::AppConfig;

#[derive(Debug, Clone)]
pub struct Workspace {
    pub intake: IntakeQueue,
    pub board: Board,
}

impl Workspace {
    pub fn new(intake: IntakeQueue, board: Board) -> Self {
        Self { intake, board }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            intake: IntakeQueue::new(config.intake.capacity),
            board: Board::new(
                config.board.placement,
                config.board.geometry(),
                config.board.container(),
            ),
        }
    }

    pub fn into_shared(self) -> SharedWorkspace {
        Arc::new(Mutex::new(self))
    }
}

pub type SharedWorkspace = Arc<Mutex<Workspace>>;

/// The two lists a card can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Intake,
    Board,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Intake => f.write_str("intake"),
            Section::Board => f.write_str("board"),
        }
    }
}
