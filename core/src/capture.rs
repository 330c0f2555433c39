//! The capture rule: placing a piece converts neighbouring opposing pieces.
//!
//! Only the four orthogonal neighbours of the placed cell are examined, so a
//! corner placement looks at two cells and an edge placement at three.

use crate::board::Board;
use crate::types::{Cell, Move, Player};
use serde::{Deserialize, Serialize};

/// Which neighbours a placement converts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureRule {
    /// Flip orthogonal neighbours holding the opponent's symbol.
    #[default]
    Orthogonal,
    /// Legacy behaviour: flip every orthogonal neighbour that is not already
    /// the mover's, empty cells included. Kept for compatibility testing only.
    FlipAll,
}

impl CaptureRule {
    /// Returns true if a neighbour holding `neighbor` is converted by `mover`.
    pub fn flips(self, neighbor: Cell, mover: Player) -> bool {
        match self {
            CaptureRule::Orthogonal => neighbor.owner() == Some(mover.opponent()),
            CaptureRule::FlipAll => neighbor != mover.cell(),
        }
    }
}

/// Applies a move to a copy of the board: sets the target cell, then runs the
/// capture rule over its orthogonal neighbours.
///
/// The target cell is overwritten whatever it held; callers that need a legal
/// placement check `Board::is_empty` first.
pub fn apply_move(board: &Board, mv: Move, rule: CaptureRule) -> Board {
    let mut next = *board;
    next.set(mv.to, mv.player.cell());

    for neighbor in mv.to.neighbors() {
        if rule.flips(board.get(neighbor), mv.player) {
            next.set(neighbor, mv.player.cell());
        }
    }

    next
}
