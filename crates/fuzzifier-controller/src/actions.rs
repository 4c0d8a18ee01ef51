//! Action queue: pending behaviors per asteroid, head first.

use std::collections::VecDeque;

use fuzzifier_core::enums::ActionKind;
use fuzzifier_core::AsteroidId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub target: AsteroidId,
}

impl Action {
    pub fn shoot(target: AsteroidId) -> Self {
        Self {
            kind: ActionKind::Shoot,
            target,
        }
    }

    pub fn dodge(target: AsteroidId) -> Self {
        Self {
            kind: ActionKind::Dodge,
            target,
        }
    }
}

/// Result of proposing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Inserted at this position (0 is the head).
    Queued(usize),
    /// An identical action was already pending; nothing changed.
    Duplicate,
}

/// FIFO of pending actions with front insertion for urgent ones.
/// Never holds the same (kind, target) pair twice.
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    actions: VecDeque<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action, urgent: bool) -> PushOutcome {
        if self.actions.contains(&action) {
            return PushOutcome::Duplicate;
        }
        if urgent {
            self.actions.push_front(action);
            PushOutcome::Queued(0)
        } else {
            self.actions.push_back(action);
            PushOutcome::Queued(self.actions.len() - 1)
        }
    }

    /// The head action, if any.
    pub fn current(&self) -> Option<&Action> {
        self.actions.front()
    }

    /// Pop the head action.
    pub fn finish_current(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    /// Drop every action whose target no longer indexes an asteroid.
    /// Returns how many were dropped.
    pub fn retire_stale(&mut self, asteroid_count: usize) -> usize {
        let before = self.actions.len();
        self.actions.retain(|a| a.target < asteroid_count);
        before - self.actions.len()
    }

    pub fn contains(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
