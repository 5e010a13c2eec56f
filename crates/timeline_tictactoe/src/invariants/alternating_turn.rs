//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Mark};

/// Invariant: move `k` (1-based) was placed by X when `k` is odd and by O
/// when even, and is recorded at history step `k`.
///
/// The side to move is derived from the pointer, so checking the recorded
/// moves is enough for turn and parity to agree at every step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| match snapshot.last_move() {
                Some(mv) => mv.number == step && mv.mark == Mark::for_step(step - 1),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
