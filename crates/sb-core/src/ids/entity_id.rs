use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier assigned to a timestamp when the watcher detects it.
///
/// Never reassigned: the same id follows the entity from the intake
/// list onto the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl_id!(EntityId);
