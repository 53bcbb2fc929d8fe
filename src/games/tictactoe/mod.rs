//! Tic-tac-toe with a time-travelling move history.

mod action;
mod history;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use history::GameHistory;
pub use invariants::{
    AlternatingMarkInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleStepInvariant, StartsEmptyInvariant, ViewedInBoundsInvariant,
};
pub use position::Position;
pub use rules::{LINES, apply_move, check_winner, winning_line};
pub use types::{Board, GameStatus, Player, Square};
pub use view::GameView;
