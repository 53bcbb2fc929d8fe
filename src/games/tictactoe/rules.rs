//! Win detection and move application.

use super::action::{Move, MoveError};
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// The eight winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line on the board, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Lines are checked rows first, then columns,
/// then diagonals; the first completed line decides.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

/// Applies a move to a board, returning the resulting board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board already has a winner.
/// - [`MoveError::SquareOccupied`] if the target square is taken.
#[instrument(skip(board), fields(position = %action.position, player = %action.player))]
pub fn apply_move(board: &Board, action: Move) -> Result<Board, MoveError> {
    if let Some(winner) = check_winner(board) {
        debug!(%winner, "Rejecting move on finished board");
        return Err(MoveError::GameOver { winner });
    }

    if !board.is_empty(action.position) {
        debug!("Rejecting move on occupied square");
        return Err(MoveError::SquareOccupied {
            position: action.position,
        });
    }

    Ok(board.with_mark(action.position, action.player))
}
