//! Moves and the reasons a move can be refused.

use super::{Mark, Position};
use serde::Serialize;
use tracing::instrument;

/// A move in tic-tac-toe: a mark placed at a position as the n-th move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    /// 1-based move number; equals the history step this move produces.
    pub number: usize,
    /// The mark placed.
    pub mark: Mark,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(number: usize, mark: Mark, position: Position) -> Self {
        Self {
            number,
            mark,
            position,
        }
    }
}

/// Renders as the history description, e.g. `Move 3: X to (1,2)`.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Move {}: {} to {}",
            self.number,
            self.mark,
            self.position.coordinates()
        )
    }
}

/// Why a submitted move left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum MoveRejected {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0.coordinates())]
    CellOccupied(Position),

    /// The viewed position already has a winner.
    #[display("{} has already won", _0)]
    AlreadyWon(Mark),
}

impl std::error::Error for MoveRejected {}
