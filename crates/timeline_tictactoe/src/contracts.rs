//! Preconditions a move must satisfy against the viewed snapshot.
//!
//! Each check is a small named rule so the session can compose them and the
//! tests can exercise them on their own.

use super::action::MoveRejected;
use super::rules;
use super::snapshot::Snapshot;
use super::Position;
use tracing::{debug, instrument};

/// Precondition: the viewed snapshot has no completed line.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveRejected::AlreadyWon`] if the board is already won.
    #[instrument(skip(snapshot))]
    pub fn check(snapshot: &Snapshot) -> Result<(), MoveRejected> {
        match rules::check_winner(snapshot.board()) {
            Some(winner) => {
                debug!(%winner, "Board already won");
                Err(MoveRejected::AlreadyWon(winner))
            }
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveRejected::CellOccupied`] if `pos` holds a mark.
    #[instrument(skip(snapshot))]
    pub fn check(snapshot: &Snapshot, pos: Position) -> Result<(), MoveRejected> {
        if snapshot.board().is_empty(pos) {
            Ok(())
        } else {
            debug!(?pos, "Square occupied");
            Err(MoveRejected::CellOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if nobody has won yet and the
/// square is empty. The winner check runs first.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for playing at `pos`.
    #[instrument(skip(snapshot))]
    pub fn check(snapshot: &Snapshot, pos: Position) -> Result<(), MoveRejected> {
        NoWinnerYet::check(snapshot)?;
        CellIsEmpty::check(snapshot, pos)?;
        Ok(())
    }
}
