//! Frame rendering using ratatui.
//!
//! Every widget is derived from the replay state on every frame; nothing
//! is cached between frames. Clickable regions are collected into
//! [`ClickTargets`] as they are rendered, so a single shared handler can
//! resolve a mouse event to a board cell, a history entry, or the sort
//! toggle.

mod board;
mod history;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Outcome, Position, Replay};

use super::app::App;

/// A resolved click target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// A board cell.
    Cell(Position),
    /// A history entry, by move number.
    Entry(usize),
    /// The sort-order toggle.
    SortToggle,
}

/// Screen regions accepting a left click, rebuilt every frame.
#[derive(Debug, Default)]
pub struct ClickTargets {
    targets: Vec<(Rect, Click)>,
}

impl ClickTargets {
    /// Registers a clickable region.
    pub fn push(&mut self, area: Rect, click: Click) {
        self.targets.push((area, click));
    }

    /// Resolves a screen coordinate to the target under it.
    pub fn hit(&self, column: u16, row: u16) -> Option<Click> {
        self.targets
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(_, click)| *click)
    }
}

/// Draws the full frame and returns its click targets.
pub fn draw(f: &mut Frame, app: &App) -> ClickTargets {
    let mut targets = ClickTargets::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe Replay")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let status = Paragraph::new(status_line(app.replay(), app.options().show_draw))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    board::render_board(f, columns[0], app, &mut targets);
    history::render_history(f, columns[1], app, &mut targets);

    let help =
        Paragraph::new("Click a cell or press 1-9 | Arrows+Enter: play | S: sort | Q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    targets
}

/// Status text above the grid.
///
/// A full, unwon board only announces a draw when the policy asks for it;
/// otherwise it keeps showing the next player.
pub fn status_line(replay: &Replay, show_draw: bool) -> String {
    match replay.outcome() {
        Outcome::Won { winner, .. } => format!("Winner: {winner}"),
        Outcome::Draw if show_draw => "Draw".to_string(),
        _ => format!("Next player: {}", replay.next_player()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn_replay() -> Replay {
        let mut replay = Replay::new();
        // X O X / X O O / O X X, filled in play order.
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            assert!(replay.play(pos));
        }
        replay
    }

    #[test]
    fn test_status_shows_next_player() {
        let mut replay = Replay::new();
        assert_eq!(status_line(&replay, false), "Next player: X");

        replay.play(Position::Center);
        assert_eq!(status_line(&replay, false), "Next player: O");
    }

    #[test]
    fn test_status_shows_winner() {
        let mut replay = Replay::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ] {
            assert!(replay.play(pos));
        }

        assert_eq!(status_line(&replay, false), "Winner: X");
    }

    #[test]
    fn test_draw_announcement_is_a_policy() {
        let replay = drawn_replay();

        assert_eq!(status_line(&replay, true), "Draw");
        assert_eq!(status_line(&replay, false), "Next player: O");
    }

    #[test]
    fn test_click_targets_hit_resolution() {
        let mut targets = ClickTargets::default();
        let area = Rect {
            x: 2,
            y: 3,
            width: 4,
            height: 2,
        };
        targets.push(area, Click::SortToggle);

        assert_eq!(targets.hit(2, 3), Some(Click::SortToggle));
        assert_eq!(targets.hit(5, 4), Some(Click::SortToggle));
        assert_eq!(targets.hit(6, 3), None);
        assert_eq!(targets.hit(2, 5), None);
    }
}
