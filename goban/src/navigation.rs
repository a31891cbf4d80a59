use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::history::{History, Turn};

/// What happens when stepping past the first or the last turn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Stay on the first/last turn.
    #[default]
    Clamp,
    /// Jump to the other end of the game.
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Previous,
    Next,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved(usize),
    Stay,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the game has no turns to display")]
pub struct EmptyHistory;

/// Cursor over a non-empty [`History`].
#[derive(Debug)]
pub struct Navigator {
    history: History,
    cursor: usize,
    policy: BoundaryPolicy,
}

impl Navigator {
    pub fn new(history: History, policy: BoundaryPolicy) -> Result<Self, EmptyHistory> {
        if history.is_empty() {
            return Err(EmptyHistory);
        }
        Ok(Self {
            history,
            cursor: 0,
            policy,
        })
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// The turn under the cursor.
    #[must_use]
    pub fn current(&self) -> &Turn {
        // cursor < len and len > 0 is kept by `new` and `handle`
        &self.history.turns()[self.cursor]
    }

    pub fn handle(&mut self, event: NavEvent) -> Transition {
        let len = self.len();
        let target = match (event, self.policy) {
            (NavEvent::Exit, _) => return Transition::Exit,
            (NavEvent::Previous, BoundaryPolicy::Clamp) => self.cursor.saturating_sub(1),
            (NavEvent::Next, BoundaryPolicy::Clamp) => (self.cursor + 1).min(len - 1),
            (NavEvent::Previous, BoundaryPolicy::Wrap) => (self.cursor + len - 1) % len,
            (NavEvent::Next, BoundaryPolicy::Wrap) => (self.cursor + 1) % len,
        };
        if target == self.cursor {
            return Transition::Stay;
        }
        debug!(from = self.cursor, to = target, "moved cursor");
        self.cursor = target;
        Transition::Moved(target)
    }
}
