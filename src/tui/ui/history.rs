//! Move-list rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{MoveEntry, SortOrder};
use crate::tui::app::{App, LabelStyle};

use super::{Click, ClickTargets};

/// Renders the sort toggle and the move list, honoring the display order.
pub fn render_history(f: &mut Frame, area: Rect, app: &App, targets: &mut ClickTargets) {
    let replay = app.replay();

    let block = Block::default().borders(Borders::ALL).title("Moves");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // The toggle labels itself with the current order.
    let toggle_area = Rect { height: 1, ..inner };
    let toggle = Paragraph::new(format!("[ sort: {} ]", replay.sort().label()))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(toggle, toggle_area);
    targets.push(toggle_area, Click::SortToggle);

    // Labels and clickability are fixed before any reversal; the flag only
    // changes the display order.
    let entries = replay.entries();
    let ordered: Vec<&MoveEntry> = match replay.sort() {
        SortOrder::Ascending => entries.iter().collect(),
        SortOrder::Descending => entries.iter().rev().collect(),
    };

    for (line, entry) in ordered.iter().enumerate() {
        let y = inner.y + 2 + line as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let line_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };
        let label = entry_label(entry, app.options().labels);
        let (text, style) = if entry.is_clickable() {
            (format!("> {label}"), Style::default().fg(Color::Gray))
        } else {
            (
                format!("  {label}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        };
        f.render_widget(Paragraph::new(text).style(style), line_area);
        if entry.is_clickable() {
            targets.push(line_area, Click::Entry(entry.index));
        }
    }
}

/// Label text for one move entry.
///
/// The current entry is an announcement rendered as static text; every
/// other entry is a jump control, with entry 0 reading "game start".
pub fn entry_label(entry: &MoveEntry, style: LabelStyle) -> String {
    let location = match (style, entry.location) {
        (LabelStyle::WithLocation, Some(pos)) => {
            format!(" location ({}, {})", pos.row(), pos.col())
        }
        _ => String::new(),
    };
    if entry.is_current {
        format!("You are at move #{}{location}", entry.index)
    } else if entry.index > 0 {
        format!("Go to move #{}{location}", entry.index)
    } else {
        "Go to game start".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_current_entry_announces_position() {
        let entry = MoveEntry {
            index: 3,
            location: Some(Position::MiddleRight),
            is_current: true,
        };

        assert_eq!(
            entry_label(&entry, LabelStyle::WithLocation),
            "You are at move #3 location (1, 2)"
        );
        assert_eq!(entry_label(&entry, LabelStyle::Plain), "You are at move #3");
    }

    #[test]
    fn test_past_entry_is_a_jump_control() {
        let entry = MoveEntry {
            index: 2,
            location: Some(Position::BottomLeft),
            is_current: false,
        };

        assert_eq!(
            entry_label(&entry, LabelStyle::WithLocation),
            "Go to move #2 location (2, 0)"
        );
        assert_eq!(entry_label(&entry, LabelStyle::Plain), "Go to move #2");
    }

    #[test]
    fn test_game_start_entry() {
        let entry = MoveEntry {
            index: 0,
            location: None,
            is_current: false,
        };

        assert_eq!(entry_label(&entry, LabelStyle::WithLocation), "Go to game start");
    }

    #[test]
    fn test_game_start_entry_when_current() {
        let entry = MoveEntry {
            index: 0,
            location: None,
            is_current: true,
        };

        assert_eq!(
            entry_label(&entry, LabelStyle::WithLocation),
            "You are at move #0"
        );
        assert!(!entry.is_clickable());
    }
}
