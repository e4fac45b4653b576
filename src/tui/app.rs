//! View-side controller: owns the state machine and routes input events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use crate::cli::Cli;
use crate::game::{Position, Replay, SortOrder};

use super::input;
use super::ui::{Click, ClickTargets};

/// How much detail move labels carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// Move number plus the played cell's row and column.
    WithLocation,
    /// Move number only.
    Plain,
}

/// Display policies resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    /// Initial move-list order.
    pub initial_sort: SortOrder,
    /// Move-label detail.
    pub labels: LabelStyle,
    /// Whether a full, unwon board announces a draw.
    pub show_draw: bool,
}

impl From<&Cli> for ViewOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            initial_sort: if cli.descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            },
            labels: if cli.plain_labels {
                LabelStyle::Plain
            } else {
                LabelStyle::WithLocation
            },
            show_draw: cli.show_draw,
        }
    }
}

/// Application state for one session.
///
/// All game state lives in the [`Replay`]; the app only adds the
/// keyboard-selected cell, the display policies, and the current frame's
/// click targets. Every mutation goes through the replay's three
/// transitions.
pub struct App {
    replay: Replay,
    selected: Position,
    options: ViewOptions,
    targets: ClickTargets,
}

impl App {
    /// Creates the app with a fresh game.
    pub fn new(options: ViewOptions) -> Self {
        Self {
            replay: Replay::with_sort(options.initial_sort),
            selected: Position::Center,
            options,
            targets: ClickTargets::default(),
        }
    }

    /// The game state machine.
    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    /// Keyboard-selected board cell.
    pub fn selected(&self) -> Position {
        self.selected
    }

    /// Display policies.
    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// Stores the click targets produced by the frame on screen.
    pub fn set_targets(&mut self, targets: ClickTargets) {
        self.targets = targets;
    }

    /// Handles a key event. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('s') => self.replay.toggle_sort(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits address cells 1-9 in row-major order.
                let pos = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index);
                if let Some(pos) = pos {
                    self.selected = pos;
                    self.replay.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.replay.play(self.selected);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.selected = input::move_cursor(self.selected, key.code);
            }
            _ => {}
        }
        false
    }

    /// Handles a mouse event via the current frame's click targets.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(click) = self.targets.hit(mouse.column, mouse.row) else {
            return;
        };
        debug!(?click, "mouse click");
        self.dispatch(click);
    }

    /// Routes a resolved click to the state machine.
    fn dispatch(&mut self, click: Click) {
        match click {
            Click::Cell(pos) => {
                self.selected = pos;
                self.replay.play(pos);
            }
            Click::Entry(mov) => self.replay.jump_to(mov),
            Click::SortToggle => self.replay.toggle_sort(),
        }
    }
}
