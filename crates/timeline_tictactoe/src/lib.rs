//! Tic-tac-toe with a navigable move history.
//!
//! A [`GameSession`] keeps every board reached so far as an immutable
//! [`Snapshot`]. Viewers can jump back to any step and play on from there;
//! doing so discards the abandoned future.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection over a single [`Board`]
//! - **Session**: history log, step pointer, move and jump transitions
//! - **Views**: read-only board/status/history data for rendering
//! - **Intents**: tagged user actions applied by [`SessionController`]
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Intent, IntentOutcome, Position, SessionController};
//!
//! let mut controller = SessionController::default();
//! for cell in [0, 1, 3, 4, 6] {
//!     controller.handle(Intent::move_at_index(cell).unwrap());
//! }
//! assert_eq!(controller.view().status_text(), "Winner: X");
//!
//! controller.handle(Intent::JumpTo(2));
//! assert_eq!(controller.view().status_text(), "Next player: X");
//!
//! let outcome = controller.handle(Intent::MoveAt(Position::Center));
//! assert!(matches!(outcome, IntentOutcome::Moved(_)));
//! assert_eq!(controller.session().history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod history;
mod intent;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;
mod view;

pub use action::{Move, MoveRejected};
pub use history::History;
pub use intent::{Intent, IntentOutcome, SessionController};
pub use position::Position;
pub use session::{GameSession, MoveApplied};
pub use snapshot::{GAME_START, Snapshot};
pub use types::{Board, Mark, Square};
pub use view::{CellView, CurrentView, GameStatus, HistoryEntry, HistoryOrder};
