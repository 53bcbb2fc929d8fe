//! Translates terminal input into [`AppEvent`]s.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as ScreenPosition, Rect};
use tracing::{instrument, trace};

use super::app::{App, AppEvent, Focus};
use super::ui;
use crate::games::tictactoe::Position;

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };

    // Edges and other keys leave the cursor where it is.
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a key press to an event, given the current focus.
#[instrument(skip(app))]
pub fn key_event(key: KeyEvent, app: &App) -> Option<AppEvent> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(AppEvent::Quit),
        KeyCode::Tab | KeyCode::BackTab => return Some(AppEvent::FocusToggled),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            // Digits 1-9 click the matching cell from either pane.
            let digit = c.to_digit(10)? as usize;
            return digit
                .checked_sub(1)
                .and_then(Position::from_index)
                .map(AppEvent::CellClicked);
        }
        _ => {}
    }

    match app.focus() {
        Focus::Board => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::CellClicked(*app.cursor())),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                Some(AppEvent::CursorMoved(move_cursor(*app.cursor(), key.code)))
            }
            _ => None,
        },
        Focus::History => {
            let last = app.history().len() - 1;
            let selected = *app.selected();
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::HistoryClicked(selected)),
                KeyCode::Up => Some(AppEvent::HistorySelected(selected.saturating_sub(1))),
                KeyCode::Down => Some(AppEvent::HistorySelected((selected + 1).min(last))),
                KeyCode::Home => Some(AppEvent::HistorySelected(0)),
                KeyCode::End => Some(AppEvent::HistorySelected(last)),
                _ => None,
            }
        }
    }
}

/// Maps a left click inside `area` to a cell or history entry.
#[instrument(skip(app))]
pub fn mouse_event(mouse: MouseEvent, area: Rect, app: &App) -> Option<AppEvent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let point = ScreenPosition::new(mouse.column, mouse.row);
    let areas = ui::layout(area);

    if let Some(index) = areas.cells.iter().position(|cell| cell.contains(point)) {
        return Position::from_index(index).map(AppEvent::CellClicked);
    }

    if areas.history_list.contains(point) {
        let offset = ui::history_offset(app, areas.history_list.height);
        let index = offset + usize::from(point.y - areas.history_list.y);
        if index < app.history().len() {
            return Some(AppEvent::HistoryClicked(index));
        }
    }

    trace!(column = mouse.column, row = mouse.row, "Click outside targets");
    None
}
