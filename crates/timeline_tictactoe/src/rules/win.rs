//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// Every three-in-a-row, in evaluation order.
///
/// Rows top-to-bottom, then columns left-to-right, then the two diagonals.
/// A legal board holds at most one completed line, so the order only matters
/// for reproducibility.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Win {
    /// Mark occupying the whole line.
    pub winner: Mark,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

impl Win {
    /// Checks if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates the board for a completed line.
///
/// Returns the first line (in [`LINES`] order) whose squares all hold the
/// same mark, or `None`. A full board without a line also yields `None`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let first = board.get(a);
        match first {
            Square::Occupied(mark) if board.get(b) == first && board.get(c) == first => {
                Some(Win { winner: mark, line })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Mark> {
    evaluate(board).map(|win| win.winner)
}
