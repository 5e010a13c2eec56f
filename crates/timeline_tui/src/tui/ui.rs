//! Stateless UI rendering for the board and its move list.

use super::app::App;
use super::input::Focus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::{CellView, CurrentView, Mark, Position, Square};

const HELP: &str = "arrows/1-9 play  tab switch panel  enter select  s sort  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.controller().view();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(11),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    draw_board(frame, panels[0], app, &view);
    draw_history(frame, panels[1], app);

    let mut status = vec![Span::styled(
        view.status_text(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(message) = app.message() {
        status.push(Span::raw(format!("  {message}")));
    }
    let status = Paragraph::new(Line::from(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, rows[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[3]);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &CurrentView) {
    let block = panel_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let cells = view.cells();

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::styled(
                "───────┼───────┼───────",
                Style::default().fg(Color::DarkGray),
            ));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(cell_span(&cells[row * 3 + col], cursor, app.show_coordinates()));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(grid, center_rect(inner, 23, 5));
}

fn cell_span(cell: &CellView, cursor: Option<Position>, show_coordinates: bool) -> Span<'static> {
    let (text, base) = match cell.square {
        Square::Empty if show_coordinates => (
            format!("{:^7}", cell.position.coordinates()),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".repeat(7), Style::default()),
        Square::Occupied(Mark::X) => (
            format!("{:^7}", "X"),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            format!("{:^7}", "O"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor == Some(cell.position) {
        base.bg(Color::White).fg(Color::Black)
    } else if cell.in_winning_line {
        base.bg(Color::Green).fg(Color::Black)
    } else {
        base
    };
    Span::styled(text, style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let order = *app.controller().order();
    let title = format!("Moves [s: {}]", order.toggle_label());
    let focused = app.focus() == Focus::History;

    let items: Vec<ListItem> = app
        .history_entries()
        .into_iter()
        .map(|entry| {
            let style = if *entry.is_selected() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if *entry.is_selected() { "> " } else { "  " };
            ListItem::new(format!("{marker}{}", entry.description())).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(panel_block(&title, focused))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.history_cursor()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        let buffer = render_buffer(app);
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_after(keys: &str) -> App {
        app_with(&AppConfig::default(), keys)
    }

    fn app_with(config: &AppConfig, keys: &str) -> App {
        let mut app = App::new(config);
        for c in keys.chars() {
            let _ = app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app
    }

    #[test]
    fn test_renders_status_and_history() {
        let screen = render(&app_after("1"));
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Game start"));
        assert!(screen.contains("> Move 1: X to (1,1)"));
        assert!(screen.contains("Sort in descending order"));
    }

    #[test]
    fn test_renders_winner() {
        let screen = render(&app_after("12457"));
        assert!(screen.contains("Winner: X"));
    }

    #[test]
    fn test_empty_cells_show_coordinates() {
        let screen = render(&app_after(""));
        assert!(screen.contains("(1,1)"));
        assert!(screen.contains("(3,3)"));
    }

    #[test]
    fn test_sort_label_flips() {
        let screen = render(&app_after("1s"));
        assert!(screen.contains("Sort in ascending order"));
    }

    #[test]
    fn test_coordinates_hidden_when_disabled() {
        let config = AppConfig::from_toml("show_coordinates = false").unwrap();
        let screen = render(&app_with(&config, ""));
        assert!(!screen.contains("(1,1)"));
        assert!(!screen.contains("(3,3)"));
        assert!(screen.contains("Next player: X"));
    }

    #[test]
    fn test_winning_cells_highlighted() {
        // X takes the left column; the cursor stays on the center O.
        let buffer = render_buffer(&app_after("12457"));
        let highlighted: Vec<&str> = buffer
            .content()
            .iter()
            .filter(|cell| cell.bg == Color::Green)
            .map(|cell| cell.symbol())
            .filter(|symbol| !symbol.trim().is_empty())
            .collect();
        assert_eq!(highlighted, vec!["X", "X", "X"]);
    }
}
