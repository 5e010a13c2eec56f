//! Game session: the history log, the step pointer and the transitions
//! between them.

use super::action::{Move, MoveRejected};
use super::contracts::LegalMove;
use super::history::History;
use super::snapshot::Snapshot;
use super::view::{CurrentView, HistoryEntry};
use super::{Mark, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveApplied {
    /// The move that was played.
    pub played: Move,
    /// Snapshots dropped because the move was made from a past step.
    pub discarded: usize,
}

/// A single game's timeline.
///
/// Owns every snapshot reached by forward play and a pointer to the one
/// being viewed. The side to move is always derived from the pointer's
/// parity, never stored.
///
/// # Example
///
/// ```
/// use timeline_tictactoe::{GameSession, Position};
///
/// let mut session = GameSession::new();
/// session.submit_move(Position::TopLeft).unwrap();
/// session.submit_move(Position::Center).unwrap();
///
/// session.jump_to(1);
/// session.submit_move(Position::BottomRight).unwrap();
///
/// assert_eq!(session.history().len(), 3);
/// assert_eq!(session.current().description(), "Move 2: O to (3,3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) history: History,
    pub(crate) step: usize,
}

impl GameSession {
    /// Starts a session at the empty "Game start" snapshot.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating new game session");
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// The full history, including snapshots after the pointer.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn step_number(&self) -> usize {
        self.step
    }

    /// The viewed snapshot.
    pub fn current(&self) -> &Snapshot {
        // The pointer never leaves history, see `PointerInBoundsInvariant`.
        &self.history[self.step]
    }

    /// Mark that plays next from the viewed snapshot.
    pub fn turn(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Plays the side to move at `pos` from the viewed snapshot.
    ///
    /// Any snapshots after the pointer are discarded first, so playing from
    /// a past step branches the game. Rejected moves leave the session
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveRejected::AlreadyWon`] if the viewed board already has a winner.
    /// - [`MoveRejected::CellOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(step = self.step, turn = %self.turn()))]
    pub fn submit_move(&mut self, pos: Position) -> Result<MoveApplied, MoveRejected> {
        LegalMove::check(self.current(), pos)?;

        let played = Move::new(self.step + 1, self.turn(), pos);
        let next = self.current().advance(played);

        let discarded = self.history.truncate_after(self.step);
        if discarded > 0 {
            info!(discarded, from_step = self.step, "Branching from past step");
        }
        self.history.push(next);
        self.step += 1;

        #[cfg(debug_assertions)]
        self.assert_invariants();

        info!(%played, "Move applied");
        Ok(MoveApplied { played, discarded })
    }

    /// Moves the pointer to `step` without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an existing history index. Callers only offer
    /// steps taken from [`GameSession::history_view`].
    #[instrument(skip(self), fields(from = self.step, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump to step {step} outside history of length {}",
            self.history.len()
        );
        debug!("Jumping to step");
        self.step = step;
    }

    /// Whether `step` names an existing snapshot.
    pub fn has_step(&self, step: usize) -> bool {
        step < self.history.len()
    }

    /// Board, status and winning line at the pointer, recomputed on every call.
    pub fn current_view(&self) -> CurrentView {
        CurrentView::of(self.current(), self.step)
    }

    /// Every history entry in ascending step order, flagging the viewed one.
    pub fn history_view(&self) -> Vec<HistoryEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                HistoryEntry::new(step, snapshot.description(), step == self.step)
            })
            .collect()
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use super::invariants::{InvariantSet, TimelineInvariants};

        if let Err(violations) = TimelineInvariants::check_all(self) {
            tracing::error!(?violations, "Session invariants violated");
            panic!("session invariants violated: {violations:?}");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
