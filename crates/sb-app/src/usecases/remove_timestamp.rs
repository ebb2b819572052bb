//! Use cases: delete one card, or empty a whole section.

use tracing::{info, instrument};

use sb_core::ids::EntityId;

use crate::state::{Section, SharedWorkspace};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("timestamp {id} not found in {section}")]
pub struct RemoveTimestampError {
    pub section: Section,
    pub id: EntityId,
}

/// Remove a single card from the intake list or the board.
///
/// The two sections are independent: removing a card from the board
/// leaves its intake copy alone and vice versa.
pub struct RemoveTimestamp {
    workspace: SharedWorkspace,
}

impl RemoveTimestamp {
    pub fn new(workspace: SharedWorkspace) -> Self {
        Self { workspace }
    }

    #[instrument(name = "usecase.remove_timestamp.execute", skip(self), fields(entity_id = %id))]
    pub async fn execute(&self, section: Section, id: &EntityId) -> Result<(), RemoveTimestampError> {
        let mut ws = self.workspace.lock().await;
        let removed = match section {
            Section::Intake => ws.intake.remove(id).is_some(),
            Section::Board => ws.board.remove(id).is_ok(),
        };

        if !removed {
            return Err(RemoveTimestampError {
                section,
                id: id.clone(),
            });
        }
        info!(%section, "Timestamp removed");
        Ok(())
    }
}

pub struct ClearSection {
    workspace: SharedWorkspace,
}

impl ClearSection {
    pub fn new(workspace: SharedWorkspace) -> Self {
        Self { workspace }
    }

    /// Returns how many cards were removed.
    #[instrument(name = "usecase.clear_section.execute", skip(self))]
    pub async fn execute(&self, section: Section) -> usize {
        let mut ws = self.workspace.lock().await;
        let removed = match section {
            Section::Intake => ws.intake.clear(),
            Section::Board => ws.board.clear(),
        };
        info!(%section, removed, "Section cleared");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Workspace;
    use sb_core::board::TimestampEntity;
    use sb_core::config::AppConfig;

    async fn seeded() -> SharedWorkspace {
        let ws = Workspace::from_config(&AppConfig::default()).into_shared();
        {
            let mut guard = ws.lock().await;
            for id in ["a", "b"] {
                let entity = TimestampEntity::new(EntityId::from(id), "1700000000");
                guard.intake.push(entity.clone());
                guard.board.place_new(entity).unwrap();
            }
        }
        ws
    }

    #[tokio::test]
    async fn test_remove_from_board_keeps_intake_copy() {
        let ws = seeded().await;
        let id = EntityId::from("a");

        RemoveTimestamp::new(ws.clone())
            .execute(Section::Board, &id)
            .await
            .unwrap();

        let guard = ws.lock().await;
        assert!(!guard.board.contains(&id));
        assert!(guard.intake.get(&id).is_some());
        assert_eq!(guard.board.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_twice_reports_missing() {
        let ws = seeded().await;
        let uc = RemoveTimestamp::new(ws);
        let id = EntityId::from("b");

        uc.execute(Section::Intake, &id).await.unwrap();
        let err = uc.execute(Section::Intake, &id).await.unwrap_err();
        assert_eq!(err.section, Section::Intake);
        assert_eq!(err.to_string(), "timestamp b not found in intake");
    }

    #[tokio::test]
    async fn test_clear_only_touches_one_section() {
        let ws = seeded().await;

        assert_eq!(ClearSection::new(ws.clone()).execute(Section::Intake).await, 2);

        let guard = ws.lock().await;
        assert!(guard.intake.is_empty());
        assert_eq!(guard.board.len(), 2);
    }
}
