//! Use case: produce what every visible card shows right now.

use std::sync::Arc;

use chrono_tz::Tz;

use sb_core::board::Location;
use sb_core::ids::EntityId;
use sb_core::ports::ClockPort;
use sb_core::timestamp::{render_card, CardView};

use crate::state::{Section, SharedWorkspace};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub id: EntityId,
    pub section: Section,
    /// `None` for intake cards.
    pub location: Option<Location>,
    /// Still inside its post-detection highlight window.
    pub highlighted: bool,
    pub view: CardView,
}

/// Render cards from the stored raw values. Nothing rendered is ever
/// written back, so the relative line stays fresh on every call.
pub struct RenderCards {
    workspace: SharedWorkspace,
    clock: Arc<dyn ClockPort>,
    tz: Tz,
}

impl RenderCards {
    pub fn new(workspace: SharedWorkspace, clock: Arc<dyn ClockPort>, tz: Tz) -> Self {
        Self {
            workspace,
            clock,
            tz,
        }
    }

    /// Intake cards newest first.
    pub async fn intake(&self) -> Vec<RenderedCard> {
        let now_ms = self.clock.now_ms();
        let ws = self.workspace.lock().await;
        ws.intake
            .iter()
            .map(|entity| RenderedCard {
                id: entity.id.clone(),
                section: Section::Intake,
                location: None,
                highlighted: entity.created_as_new,
                view: render_card(&entity.raw_value, now_ms, &self.tz),
            })
            .collect()
    }

    /// Board cards in placement order.
    pub async fn board(&self) -> Vec<RenderedCard> {
        let now_ms = self.clock.now_ms();
        let ws = self.workspace.lock().await;
        ws.board
            .entities()
            .iter()
            .map(|placed| RenderedCard {
                id: placed.entity.id.clone(),
                section: Section::Board,
                location: Some(placed.location),
                highlighted: placed.entity.created_as_new,
                view: render_card(&placed.entity.raw_value, now_ms, &self.tz),
            })
            .collect()
    }

    pub async fn one(&self, section: Section, id: &EntityId) -> Option<RenderedCard> {
        let cards = match section {
            Section::Intake => self.intake().await,
            Section::Board => self.board().await,
        };
        cards.into_iter().find(|card| &card.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Workspace;
    use sb_core::board::{CellPosition, TimestampEntity};
    use sb_core::config::AppConfig;
    use sb_core::ports::FixedClock;

    async fn setup(now_ms: i64) -> (SharedWorkspace, RenderCards) {
        let ws = Workspace::from_config(&AppConfig::default()).into_shared();
        {
            let mut guard = ws.lock().await;
            guard
                .intake
                .push(TimestampEntity::new(EntityId::from("old"), "1700000000"));
            guard
                .intake
                .push(TimestampEntity::new(EntityId::from("new"), "1700000000000"));
            guard
                .board
                .place_new(TimestampEntity::new(EntityId::from("old"), "1700000000"))
                .unwrap();
        }
        let uc = RenderCards::new(ws.clone(), Arc::new(FixedClock(now_ms)), Tz::UTC);
        (ws, uc)
    }

    #[tokio::test]
    async fn test_intake_is_newest_first_and_highlighted() {
        let (_ws, uc) = setup(1_700_000_060_000).await;
        let cards = uc.intake().await;

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, EntityId::from("new"));
        assert!(cards[0].highlighted);
        assert_eq!(cards[0].view.raw(), "1700000000000");
        assert!(cards.iter().all(|c| c.location.is_none()));
    }

    #[tokio::test]
    async fn test_board_card_has_location_and_formatting() {
        let (_ws, uc) = setup(1_700_000_060_000).await;
        let cards = uc.board().await;

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].location, Some(Location::Cell(CellPosition::ORIGIN)));
        assert!(!cards[0].highlighted);
        match &cards[0].view {
            CardView::Formatted { lines, .. } => {
                assert_eq!(lines.utc, "GMT: Tuesday, Nov 14, 2023 10:13:20 PM");
                assert_eq!(lines.relative, "Relative: a minute ago");
            }
            other => panic!("expected formatted card, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_relative_line_follows_the_clock() {
        let (ws, _) = setup(0).await;
        let later = RenderCards::new(ws, Arc::new(FixedClock(1_700_000_000_000 + 3 * 3_600_000)), Tz::UTC);

        let card = later
            .one(Section::Board, &EntityId::from("old"))
            .await
            .unwrap();
        match card.view {
            CardView::Formatted { lines, .. } => assert_eq!(lines.relative, "Relative: 3 hours ago"),
            other => panic!("expected formatted card, got {other:?}"),
        }
    }
}
