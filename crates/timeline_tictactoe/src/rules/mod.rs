//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board. Rules never look at history
//! or the session pointer; the session decides what to do with the result.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Win, check_winner, evaluate};
