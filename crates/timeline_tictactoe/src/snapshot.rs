//! Immutable board snapshots recorded in the history.

use super::action::Move;
use super::types::Board;
use serde::Serialize;

/// Description of the sentinel snapshot every session starts from.
pub const GAME_START: &str = "Game start";

/// A board state plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    board: Board,
    description: String,
    last_move: Option<Move>,
}

impl Snapshot {
    /// The empty "Game start" snapshot.
    pub fn game_start() -> Self {
        Self {
            board: Board::new(),
            description: GAME_START.to_string(),
            last_move: None,
        }
    }

    /// Builds the snapshot that follows `self` once `mv` is played.
    ///
    /// Legality is the caller's concern; this only records the result.
    pub fn advance(&self, mv: Move) -> Self {
        Self {
            board: self.board.with_mark(mv.position, mv.mark),
            description: mv.to_string(),
            last_move: Some(mv),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Human-readable label of the move that produced this snapshot.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The move that produced this snapshot; `None` for game start.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}
