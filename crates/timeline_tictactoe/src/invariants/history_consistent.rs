//! History consistency invariant: each snapshot follows from the one before.

use super::Invariant;
use crate::{GameSession, Square, snapshot::GAME_START};

/// Invariant: snapshot `k` holds exactly `k` marks and differs from
/// snapshot `k - 1` only by its recorded move.
///
/// Snapshot 0 is the empty "Game start" sentinel.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let Some(start) = history.get(0) else {
            return false;
        };
        if start.description() != GAME_START || start.board().mark_count() != 0 {
            return false;
        }

        history.iter().enumerate().skip(1).all(|(step, snapshot)| {
            if snapshot.board().mark_count() != step {
                return false;
            }
            let (Some(mv), Some(previous)) = (snapshot.last_move(), history.get(step - 1)) else {
                return false;
            };
            previous.board().is_empty(mv.position)
                && previous.board().with_mark(mv.position, mv.mark) == *snapshot.board()
                && snapshot.board().get(mv.position) == Square::Occupied(mv.mark)
        })
    }

    fn description() -> &'static str {
        "Snapshot k holds k marks and extends snapshot k-1 by one move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Position, Snapshot};

    #[test]
    fn test_empty_session_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut session = GameSession::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            session.submit_move(pos).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 5);
    }

    #[test]
    fn test_snapshot_skipping_a_move_violates() {
        let mut session = GameSession::new();
        session.submit_move(Position::Center).unwrap();

        // Two marks appear in a single step.
        let jumped = session
            .current()
            .advance(Move::new(2, Mark::O, Position::TopLeft))
            .advance(Move::new(2, Mark::O, Position::TopRight));
        session.history.snapshots_mut().push(jumped);

        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut session = GameSession::new();
        let start = Snapshot::game_start().advance(Move::new(1, Mark::X, Position::Center));
        session.history.snapshots_mut()[0] = start;

        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
