//! Application state and event handling.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::games::tictactoe::{GameHistory, GameView, Position};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// A discrete user input, already resolved to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A board cell was clicked.
    CellClicked(Position),
    /// A history entry was clicked.
    HistoryClicked(usize),
    /// The board cursor moved.
    CursorMoved(Position),
    /// The history selection moved.
    HistorySelected(usize),
    /// Keyboard focus switched panes.
    FocusToggled,
    /// The user asked to leave.
    Quit,
}

/// Main application state.
///
/// Every event goes through [`App::handle`]; the caller redraws from
/// the resulting state.
#[derive(Debug, Getters)]
pub struct App {
    /// Every snapshot played so far.
    history: GameHistory,
    /// Board cell under the keyboard cursor.
    cursor: Position,
    /// Pane receiving navigation keys.
    focus: Focus,
    /// Highlighted history entry while the history pane has focus.
    selected: usize,
    /// Set once the user quits.
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_history(GameHistory::new())
    }

    /// Creates an application around an existing history.
    #[instrument(skip(history))]
    pub fn with_history(history: GameHistory) -> Self {
        let selected = history.viewed_index();
        Self {
            history,
            cursor: Position::Center,
            focus: Focus::default(),
            selected,
            should_quit: false,
        }
    }

    /// Snapshot of what should be drawn.
    pub fn view(&self) -> GameView {
        GameView::from_history(&self.history)
    }

    /// Applies one event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: AppEvent) {
        debug!(?event, "Handling app event");

        match event {
            AppEvent::CellClicked(position) => {
                self.cursor = position;
                match self.history.place(position) {
                    Ok(()) => {
                        self.selected = self.history.viewed_index();
                    }
                    Err(e) => {
                        debug!(error = %e, "Ignoring click");
                    }
                }
            }
            AppEvent::HistoryClicked(index) => {
                self.history.jump_to(index);
                self.selected = index;
            }
            AppEvent::CursorMoved(position) => {
                self.cursor = position;
            }
            AppEvent::HistorySelected(index) => {
                self.selected = index.min(self.history.len() - 1);
            }
            AppEvent::FocusToggled => {
                self.focus = self.focus.toggle();
                self.selected = self.history.viewed_index();
            }
            AppEvent::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_cell_click_places_mark() {
        let mut app = App::new();
        app.handle(AppEvent::CellClicked(Position::TopLeft));

        assert_eq!(app.history().len(), 2);
        assert_eq!(
            app.history().current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(*app.cursor(), Position::TopLeft);
        assert_eq!(*app.selected(), 1);
    }

    #[test]
    fn test_click_on_occupied_cell_is_noop() {
        let mut app = App::new();
        app.handle(AppEvent::CellClicked(Position::TopLeft));
        app.handle(AppEvent::CellClicked(Position::TopLeft));

        assert_eq!(app.history().len(), 2);
        assert_eq!(app.view().status(), "Next player: O");
    }

    #[test]
    fn test_history_click_jumps() {
        let mut app = App::new();
        app.handle(AppEvent::CellClicked(Position::TopLeft));
        app.handle(AppEvent::CellClicked(Position::Center));
        app.handle(AppEvent::HistoryClicked(0));

        assert_eq!(app.history().viewed_index(), 0);
        assert_eq!(app.history().len(), 3);
        assert_eq!(app.view().status(), "Next player: X");
    }

    #[test]
    fn test_focus_toggle_resets_selection() {
        let mut app = App::new();
        app.handle(AppEvent::CellClicked(Position::TopLeft));
        app.handle(AppEvent::FocusToggled);
        app.handle(AppEvent::HistorySelected(0));
        app.handle(AppEvent::FocusToggled);

        assert_eq!(*app.focus(), Focus::Board);
        assert_eq!(*app.selected(), 1);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::new();
        app.handle(AppEvent::Quit);
        assert!(*app.should_quit());
    }
}
