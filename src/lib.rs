//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection and copy-on-write move application
//! - **History**: every board snapshot plus the viewed index; playing from
//!   an earlier snapshot discards the snapshots after it
//! - **View**: framework-independent description of a rendered frame
//! - **TUI**: ratatui frontend driving an event → update → redraw loop
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameHistory, GameStatus, Player, Position};
//!
//! let mut history = GameHistory::new();
//! history.place(Position::Center).unwrap();
//! assert_eq!(history.status(), GameStatus::InProgress { next: Player::O });
//!
//! history.jump_to(0);
//! assert_eq!(history.next_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingMarkInvariant, Board, GameHistory, GameStatus, GameView, HistoryInvariants,
    Invariant, InvariantSet, InvariantViolation, LINES, Move, MoveError, Player, Position,
    SingleStepInvariant, Square, StartsEmptyInvariant, ViewedInBoundsInvariant, apply_move,
    check_winner, winning_line,
};

// Crate-level exports - Terminal UI
pub use tui::{
    App, AppEvent, Areas, Focus, draw, history_offset, key_event, layout, mouse_event,
    move_cursor, run_app, run_tui,
};
