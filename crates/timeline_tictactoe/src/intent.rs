//! User intents and the single entry point that applies them.

use super::action::MoveRejected;
use super::session::{GameSession, MoveApplied};
use super::view::{CurrentView, HistoryEntry, HistoryOrder};
use super::Position;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Something the viewer asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intent {
    /// Play the side to move at this cell.
    MoveAt(Position),
    /// View this history step. Must be an existing step.
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    ToggleSort,
}

impl Intent {
    /// Builds a move intent from a raw cell index (0-8).
    pub fn move_at_index(index: usize) -> Option<Self> {
        Position::from_index(index).map(Self::MoveAt)
    }
}

/// What handling an intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntentOutcome {
    /// A move was played.
    Moved(MoveApplied),
    /// The move was refused; nothing changed.
    Rejected(MoveRejected),
    /// The pointer moved to this step.
    Jumped(usize),
    /// The move list now uses this order.
    Sorted(HistoryOrder),
}

/// Session plus the presentation-only state that sits beside it.
///
/// Sort order lives here rather than in [`GameSession`] because it has no
/// bearing on the game itself.
#[derive(Debug, Clone, Default, Getters)]
pub struct SessionController {
    /// The game timeline.
    session: GameSession,
    /// Display order of the move list.
    order: HistoryOrder,
}

impl SessionController {
    /// Creates a controller over a fresh session.
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            session: GameSession::new(),
            order,
        }
    }

    /// Applies one intent to completion.
    ///
    /// # Panics
    ///
    /// Panics on [`Intent::JumpTo`] with a step that is not in history.
    #[instrument(skip(self), fields(step = self.session.step_number()))]
    pub fn handle(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::MoveAt(pos) => match self.session.submit_move(pos) {
                Ok(applied) => IntentOutcome::Moved(applied),
                Err(reason) => {
                    debug!(%reason, "Move ignored");
                    IntentOutcome::Rejected(reason)
                }
            },
            Intent::JumpTo(step) => {
                self.session.jump_to(step);
                IntentOutcome::Jumped(step)
            }
            Intent::ToggleSort => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "History order toggled");
                IntentOutcome::Sorted(self.order)
            }
        }
    }

    /// The current board view.
    pub fn view(&self) -> CurrentView {
        self.session.current_view()
    }

    /// History entries in display order.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.order.arrange(self.session.history_view())
    }
}
