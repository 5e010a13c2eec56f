//! Full-board detection.
//!
//! The rules report no draw signal of their own: a full board without a
//! line simply has no winner. This check exists for presentation hints.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
