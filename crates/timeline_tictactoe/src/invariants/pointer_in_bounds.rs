//! Pointer invariant: the viewed step always exists.

use super::Invariant;
use crate::GameSession;

/// Invariant: the step pointer indexes an existing snapshot.
pub struct PointerInBoundsInvariant;

impl Invariant<GameSession> for PointerInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.step_number() < session.history().len()
    }

    fn description() -> &'static str {
        "Step pointer stays within history"
    }
}
