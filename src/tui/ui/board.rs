//! Board grid rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::game::{Board, Outcome, Player, Position, Square};
use crate::tui::app::App;

use super::{Click, ClickTargets};

/// Renders the 3x3 grid from the snapshot under the cursor and registers
/// every cell as a click target. Winning cells are highlighted; the rest
/// render normally regardless of value.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, targets: &mut ClickTargets) {
    let replay = app.replay();
    let board = replay.board();
    let winning = match replay.outcome() {
        Outcome::Won { line, .. } => Some(line),
        _ => None,
    };

    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], 0, board, winning, app.selected(), targets);
    render_separator(f, rows[1]);
    render_row(f, rows[2], 3, board, winning, app.selected(), targets);
    render_separator(f, rows[3]);
    render_row(f, rows[4], 6, board, winning, app.selected(), targets);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    start: usize,
    board: &Board,
    winning: Option<[Position; 3]>,
    selected: Position,
    targets: &mut ClickTargets,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (slot, offset) in [(0usize, 0usize), (2, 1), (4, 2)] {
        if let Some(pos) = Position::from_index(start + offset) {
            render_square(f, cols[slot], pos, board, winning, selected, targets);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    pos: Position,
    board: &Board,
    winning: Option<[Position; 3]>,
    selected: Position,
    targets: &mut ClickTargets,
) {
    let (text, mut style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning.is_some_and(|line| line.contains(&pos)) {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    if pos == selected {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
    targets.push(area, Click::Cell(pos));
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}
