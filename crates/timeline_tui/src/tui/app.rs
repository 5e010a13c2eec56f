//! Application state and logic.

use super::input::{Command, Focus, command_for};
use crate::config::AppConfig;
use crossterm::event::KeyEvent;
use std::ops::ControlFlow;
use timeline_tictactoe::{HistoryEntry, Intent, IntentOutcome, Position, SessionController};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: SessionController,
    cursor: Position,
    focus: Focus,
    history_cursor: usize,
    show_coordinates: bool,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &AppConfig) -> Self {
        let mut app = Self {
            controller: SessionController::new(*config.history_order()),
            cursor: Position::Center,
            focus: Focus::default(),
            history_cursor: 0,
            show_coordinates: *config.show_coordinates(),
            message: None,
        };
        app.sync_history_cursor();
        app
    }

    /// Gets the session controller.
    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the highlighted row in the displayed move list.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Whether empty cells show their coordinates.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press. Breaks when the user quits.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        match command_for(key, self.focus, self.cursor) {
            Command::Quit => {
                info!("User quit");
                return ControlFlow::Break(());
            }
            Command::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.sync_history_cursor();
            }
            Command::Cursor(pos) => self.cursor = pos,
            Command::Scroll(delta) => self.scroll(delta),
            Command::Select => self.select(),
            Command::Dispatch(intent) => self.dispatch(intent),
            Command::Ignore => {}
        }
        ControlFlow::Continue(())
    }

    fn select(&mut self) {
        match self.focus {
            Focus::Board => self.dispatch(Intent::MoveAt(self.cursor)),
            Focus::History => {
                let entries = self.controller.history_entries();
                if let Some(entry) = entries.get(self.history_cursor) {
                    self.dispatch(Intent::JumpTo(*entry.step_number()));
                }
            }
        }
    }

    fn scroll(&mut self, delta: isize) {
        let last = self.controller.session().history().last_step();
        self.history_cursor = self.history_cursor.saturating_add_signed(delta).min(last);
    }

    fn dispatch(&mut self, intent: Intent) {
        let outcome = self.controller.handle(intent);
        debug!(?outcome, "Intent handled");

        self.message = match outcome {
            IntentOutcome::Moved(applied) if applied.discarded > 0 => Some(format!(
                "{} (discarded {} later step{})",
                applied.played,
                applied.discarded,
                if applied.discarded == 1 { "" } else { "s" }
            )),
            IntentOutcome::Moved(applied) => Some(applied.played.to_string()),
            IntentOutcome::Rejected(reason) => Some(reason.to_string()),
            IntentOutcome::Jumped(_) | IntentOutcome::Sorted(_) => None,
        };
        self.sync_history_cursor();
    }

    /// Points the move-list highlight at the viewed step.
    fn sync_history_cursor(&mut self) {
        self.history_cursor = self
            .controller
            .history_entries()
            .iter()
            .position(|entry| *entry.is_selected())
            .unwrap_or(0);
    }

    /// Entries as currently displayed.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.controller.history_entries()
    }
}
