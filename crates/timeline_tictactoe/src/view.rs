//! Read-only view models handed to the presentation layer.
//!
//! Views are rebuilt from the pointed snapshot on every read; nothing here
//! is cached across navigation.

use super::rules::{self, Win};
use super::snapshot::Snapshot;
use super::{Board, Mark, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line for the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum GameStatus {
    /// The viewed board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// No line yet; the given mark moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Everything needed to render the board at the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct CurrentView {
    /// Board at the viewed step.
    board: Board,
    /// The viewed step.
    step_number: usize,
    /// Mark to play from this step.
    turn: Mark,
    /// Winner on this board, if any.
    winner: Option<Mark>,
    /// The completed line, if any.
    winning_line: Option<[Position; 3]>,
    /// Status line.
    status: GameStatus,
}

impl CurrentView {
    /// Builds the view of `snapshot` as history step `step_number`.
    #[instrument(skip(snapshot))]
    pub fn of(snapshot: &Snapshot, step_number: usize) -> Self {
        let turn = Mark::for_step(step_number);
        let win: Option<Win> = rules::evaluate(snapshot.board());
        let status = match win {
            Some(win) => GameStatus::Winner(win.winner),
            None => GameStatus::NextPlayer(turn),
        };

        Self {
            board: *snapshot.board(),
            step_number,
            turn,
            winner: win.map(|w| w.winner),
            winning_line: win.map(|w| w.line),
            status,
        }
    }

    /// Status text, e.g. `Winner: X` or `Next player: O`.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Board indices of the winning line; empty when nobody has won.
    pub fn winning_indices(&self) -> Vec<usize> {
        self.winning_line
            .map(|line| line.iter().map(|p| p.to_index()).collect())
            .unwrap_or_default()
    }

    /// Checks if `pos` belongs to the winning line.
    pub fn in_winning_line(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }

    /// Per-cell render data in index order.
    pub fn cells(&self) -> [CellView; 9] {
        Position::ALL.map(|position| CellView {
            position,
            square: self.board.get(position),
            in_winning_line: self.in_winning_line(position),
        })
    }

    /// Whether every square is filled.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }
}

/// One renderable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Which cell this is.
    pub position: Position,
    /// Its content.
    pub square: Square,
    /// Whether to highlight it as part of the winning line.
    pub in_winning_line: bool,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct HistoryEntry {
    /// History index this entry jumps to.
    step_number: usize,
    /// Move label, e.g. `Move 2: O to (2,2)`.
    description: String,
    /// Whether this is the viewed step.
    is_selected: bool,
}

impl HistoryEntry {
    /// Creates a history entry.
    pub fn new(step_number: usize, description: impl Into<String>, is_selected: bool) -> Self {
        Self {
            step_number,
            description: description.into(),
            is_selected,
        }
    }
}

/// Display order of the move list. Presentation state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that flips to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort in descending order",
            Self::Descending => "Sort in ascending order",
        }
    }

    /// Arranges ascending entries in this order. Step numbers are kept.
    pub fn arrange(self, mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
        if self == Self::Descending {
            entries.reverse();
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_view_of_game_start() {
        let view = CurrentView::of(&Snapshot::game_start(), 0);
        assert_eq!(view.status_text(), "Next player: X");
        assert_eq!(*view.winner(), None);
        assert!(view.winning_indices().is_empty());
        let cells = view.cells();
        assert!(cells.iter().all(|c| c.square == Square::Empty));
        assert!(cells.iter().all(|c| !c.in_winning_line));
    }

    #[test]
    fn test_view_marks_winning_cells() {
        let snapshot = [
            (Position::TopRight, Mark::X),
            (Position::TopLeft, Mark::O),
            (Position::Center, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::BottomLeft, Mark::X),
        ]
        .iter()
        .enumerate()
        .fold(Snapshot::game_start(), |snap, (i, (pos, mark))| {
            snap.advance(Move::new(i + 1, *mark, *pos))
        });

        let view = CurrentView::of(&snapshot, 5);
        assert_eq!(view.status_text(), "Winner: X");
        assert_eq!(view.winning_indices(), vec![2, 4, 6]);
        let highlighted: Vec<usize> = view
            .cells()
            .iter()
            .filter(|c| c.in_winning_line)
            .map(|c| c.position.to_index())
            .collect();
        assert_eq!(highlighted, vec![2, 4, 6]);
    }

    #[test]
    fn test_history_order_toggle() {
        let order = HistoryOrder::default();
        assert_eq!(order, HistoryOrder::Ascending);
        assert_eq!(order.toggle_label(), "Sort in descending order");
        assert_eq!(order.toggle().toggle_label(), "Sort in ascending order");
        assert_eq!(order.toggle().toggle(), order);
    }

    #[test]
    fn test_descending_keeps_step_numbers() {
        let entries = vec![
            HistoryEntry::new(0, "Game start", false),
            HistoryEntry::new(1, "Move 1: X to (1,1)", true),
        ];
        let arranged = HistoryOrder::Descending.arrange(entries);
        assert_eq!(*arranged[0].step_number(), 1);
        assert!(*arranged[0].is_selected());
        assert_eq!(*arranged[1].step_number(), 0);
    }
}
