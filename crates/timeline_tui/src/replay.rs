//! Non-interactive replay of an intent script.

use crate::cli::OutputFormat;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::str::FromStr;
use timeline_tictactoe::{
    CurrentView, HistoryEntry, HistoryOrder, Intent, IntentOutcome, SessionController,
};
use tracing::{debug, info, instrument, warn};

/// One scripted intent, parsed from `m<cell>`, `j<step>` or `s`.
///
/// Cells are numbered 1-9, matching the labels of empty squares in the
/// printed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptIntent(pub Intent);

impl FromStr for ScriptIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = |digits: &str| {
            digits
                .parse::<usize>()
                .map_err(|_| format!("expected a number after '{}' in '{s}'", &s[..1]))
        };

        match s.chars().next() {
            Some('m') => {
                let cell = number(&s[1..])?;
                cell.checked_sub(1)
                    .and_then(Intent::move_at_index)
                    .map(Self)
                    .ok_or_else(|| format!("cell {cell} is outside 1-9"))
            }
            Some('j') => Ok(Self(Intent::JumpTo(number(&s[1..])?))),
            Some('s') if s.len() == 1 => Ok(Self(Intent::ToggleSort)),
            _ => Err(format!("unrecognised intent '{s}' (use m<cell>, j<step> or s)")),
        }
    }
}

/// Everything `replay` prints in JSON mode.
#[derive(Debug, Serialize)]
struct ReplayReport {
    view: CurrentView,
    order: HistoryOrder,
    history: Vec<HistoryEntry>,
}

/// Applies `intents` to a fresh session and renders the final state.
///
/// Jumps to steps that do not exist yet are refused before they reach the
/// session.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn run(
    intents: &[ScriptIntent],
    order: HistoryOrder,
    format: OutputFormat,
) -> Result<String> {
    let mut controller = SessionController::new(order);

    for (index, ScriptIntent(intent)) in intents.iter().enumerate() {
        if let Intent::JumpTo(step) = intent {
            let len = controller.session().history().len();
            if !controller.session().has_step(*step) {
                warn!(index, step, len, "Jump outside history");
                bail!(
                    "intent {}: step {step} does not exist (history has {len} entries)",
                    index + 1
                );
            }
        }

        match controller.handle(*intent) {
            IntentOutcome::Rejected(reason) => info!(index, %reason, "Move ignored"),
            outcome => debug!(index, ?outcome, "Intent applied"),
        }
    }

    match format {
        OutputFormat::Text => Ok(render_text(&controller)),
        OutputFormat::Json => {
            let report = ReplayReport {
                view: controller.view(),
                order: *controller.order(),
                history: controller.history_entries(),
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize view")
        }
    }
}

/// Board, status and move list as plain text.
fn render_text(controller: &SessionController) -> String {
    let view = controller.view();
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(&view.status_text());
    out.push_str("\n\n");
    for entry in controller.history_entries() {
        let marker = if *entry.is_selected() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", entry.description()));
    }
    out
}
