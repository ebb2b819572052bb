//! Intake list: recently detected timestamps waiting to be placed.

use std::collections::VecDeque;

use crate::ids::EntityId;

use super::entity::TimestampEntity;

pub const DEFAULT_INTAKE_CAPACITY: usize = 20;

/// Newest-first list bounded to `capacity` entries.
#[derive(Debug, Clone)]
pub struct IntakeQueue {
    capacity: usize,
    items: VecDeque<TimestampEntity>,
}

impl Default for IntakeQueue {
    fn default() -> Self {
        Self::new(DEFAULT_INTAKE_CAPACITY)
    }
}

impl IntakeQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add at the front. Returns the oldest entry if it fell off the end.
    pub fn push(&mut self, entity: TimestampEntity) -> Option<TimestampEntity> {
        self.items.push_front(entity);
        if self.items.len() > self.capacity {
            self.items.pop_back()
        } else {
            None
        }
    }

    pub fn get(&self, id: &EntityId) -> Option<&TimestampEntity> {
        self.items.iter().find(|e| &e.id == id)
    }

    pub fn remove(&mut self, id: &EntityId) -> Option<TimestampEntity> {
        let index = self.items.iter().position(|e| &e.id == id)?;
        self.items.remove(index)
    }

    /// Clear the highlight flag. Returns false if `id` is gone.
    pub fn settle(&mut self, id: &EntityId) -> bool {
        match self.items.iter_mut().find(|e| &e.id == id) {
            Some(entity) => {
                entity.created_as_new = false;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimestampEntity> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str) -> TimestampEntity {
        TimestampEntity::new(EntityId::from(id), "1700000000")
    }

    #[test]
    fn test_newest_first_and_bounded() {
        let mut intake = IntakeQueue::new(2);
        assert!(intake.push(entity("a")).is_none());
        assert!(intake.push(entity("b")).is_none());
        let evicted = intake.push(entity("c")).unwrap();

        assert_eq!(evicted.id.as_str(), "a");
        let ids: Vec<_> = intake.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn test_settle_clears_only_the_target() {
        let mut intake = IntakeQueue::default();
        intake.push(entity("a"));
        intake.push(entity("b"));

        assert!(intake.settle(&EntityId::from("a")));
        assert!(!intake.get(&EntityId::from("a")).unwrap().created_as_new);
        assert!(intake.get(&EntityId::from("b")).unwrap().created_as_new);
        assert!(!intake.settle(&EntityId::from("missing")));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut intake = IntakeQueue::default();
        intake.push(entity("a"));
        intake.push(entity("b"));

        assert!(intake.remove(&EntityId::from("a")).is_some());
        assert!(intake.remove(&EntityId::from("a")).is_none());
        assert_eq!(intake.clear(), 1);
        assert!(intake.is_empty());
    }
}
