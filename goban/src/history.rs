use goban_types::Move;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    board::{Board, Snapshot},
    record::GameRecord,
};

/// One browsable state of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// 1-based position in the record of the move that produced this state.
    pub ordinal: usize,
    pub last_move: Move,
    pub snapshot: Snapshot,
}

/// Visible turns of a replayed game.
///
/// A placement that is immediately taken back by a clear never shows up on
/// its own, only the corrected board after the clear does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    size: u8,
    turns: Vec<Turn>,
}

impl History {
    #[must_use]
    pub fn from_record(record: &GameRecord) -> Self {
        Self::build(record.size, &record.moves)
    }

    #[must_use]
    pub fn build(size: u8, moves: &[Move]) -> Self {
        let mut board = Board::new(size);
        let mut turns = Vec::with_capacity(moves.len());
        for (idx, mv) in moves.iter().enumerate() {
            board.apply(mv);
            if moves.get(idx + 1).is_some_and(Move::is_clear) {
                trace!(ordinal = idx + 1, %mv, "taken back by the next move");
                continue;
            }
            turns.push(Turn {
                ordinal: idx + 1,
                last_move: *mv,
                snapshot: board.snapshot(),
            });
        }
        debug!(
            moves = moves.len(),
            turns = turns.len(),
            "rebuilt board history"
        );
        Self { size, turns }
    }

    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Turn> {
        self.turns.get(idx)
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> + '_ {
        self.turns.iter()
    }
}
