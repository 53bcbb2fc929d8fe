//! Move history with time travel.
//!
//! [`GameHistory`] owns every board snapshot since the game started and a
//! pointer to the one currently viewed. Jumping only moves the pointer;
//! playing from an earlier snapshot discards everything after it.

use super::action::{Move, MoveError};
use super::invariants::SingleStepInvariant;
use super::rules::{apply_move, check_winner};
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, info, instrument};

/// Ordered board snapshots plus the viewed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    viewed: usize,
}

impl GameHistory {
    /// Creates a history holding a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            viewed: 0,
        }
    }

    /// Builds a history by placing marks at `positions` in order, X first.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for &position in positions {
            history.place(position)?;
        }
        Ok(history)
    }

    /// Installs `board` as the snapshot after the viewed one.
    ///
    /// Snapshots after the viewed index are discarded first. The board is
    /// not validated; callers produce it with [`apply_move`].
    #[instrument(skip(self, board), fields(viewed = self.viewed, len = self.snapshots.len()))]
    pub fn play(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.viewed + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(self.viewed + 1);
        self.snapshots.push(board);
        self.viewed = self.snapshots.len() - 1;

        if let Some(winner) = check_winner(self.current_board()) {
            info!(%winner, moves = self.viewed, "Game won");
        }

        #[cfg(debug_assertions)]
        self.warn_on_violations();
    }

    /// Places the next player's mark at `position` on the viewed board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the square is taken or the viewed board
    /// already has a winner. History is unchanged in that case.
    #[instrument(skip(self), fields(viewed = self.viewed))]
    pub fn place(&mut self, position: Position) -> Result<(), MoveError> {
        let action = Move::new(self.next_player(), position);
        let board = apply_move(self.current_board(), action)?;
        debug!(%action, "Move accepted");
        self.play(board);
        Ok(())
    }

    /// Moves the view to snapshot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`GameHistory::len`].
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.snapshots.len(),
            "history index {index} out of range for {} snapshots",
            self.snapshots.len()
        );
        debug!(from = self.viewed, to = index, "Jumping in history");
        self.viewed = index;
    }

    /// The board at the viewed index.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.viewed]
    }

    /// Whose turn it is on the viewed board.
    pub fn next_player(&self) -> Player {
        Player::for_move_count(self.viewed)
    }

    /// Winner or next player for the viewed board.
    pub fn status(&self) -> GameStatus {
        match check_winner(self.current_board()) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Label for the history entry at `index`.
    pub fn describe_move(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        }
    }

    /// Labels for every history entry, in order.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(Self::describe_move).collect()
    }

    /// The move that produced each snapshot after the first.
    ///
    /// Snapshots installed by [`GameHistory::play`] that are not a
    /// single-mark step are skipped.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| SingleStepInvariant::step(&pair[0], &pair[1]))
            .filter_map(|(index, player)| {
                Position::from_index(index).map(|position| Move::new(player, position))
            })
            .collect()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the viewed snapshot.
    pub fn viewed_index(&self) -> usize {
        self.viewed
    }

    /// Number of snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least the empty board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[cfg(debug_assertions)]
    fn warn_on_violations(&self) {
        use super::invariants::{HistoryInvariants, InvariantSet};

        if let Err(violations) = HistoryInvariants::check_all(self) {
            for violation in violations {
                tracing::warn!(description = %violation.description, "History invariant violated");
            }
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_new_history_is_empty_board() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.viewed_index(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_place_appends_and_advances() {
        let mut history = GameHistory::new();
        history.place(Position::Center).expect("legal");

        assert_eq!(history.len(), 2);
        assert_eq!(history.viewed_index(), 1);
        assert_eq!(
            history.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(history.next_player(), Player::O);
    }

    #[test]
    fn test_rejected_place_leaves_history_unchanged() {
        let mut history = GameHistory::new();
        history.place(Position::Center).expect("legal");
        let before = history.clone();

        let result = history.place(Position::Center);

        assert_eq!(
            result,
            Err(MoveError::SquareOccupied {
                position: Position::Center
            })
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_does_not_mutate_snapshots() {
        let mut history =
            GameHistory::replay(&[Position::TopLeft, Position::Center]).expect("legal");
        let snapshots = history.snapshots().to_vec();

        history.jump_to(0);

        assert_eq!(history.snapshots(), snapshots.as_slice());
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.next_player(), Player::X);
    }

    #[test]
    fn test_play_after_jump_truncates() {
        let mut history = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
        ])
        .expect("legal");
        history.jump_to(1);

        history.place(Position::BottomRight).expect("legal");

        assert_eq!(history.len(), 3);
        assert_eq!(history.viewed_index(), 2);
        assert!(history.current_board().is_empty(Position::Center));
        assert_eq!(
            history.current_board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_out_of_range_panics() {
        let mut history = GameHistory::new();
        history.jump_to(1);
    }

    #[test]
    fn test_describe_move_labels() {
        assert_eq!(GameHistory::describe_move(0), "Go to game start");
        assert_eq!(GameHistory::describe_move(1), "Go to move #1");
        assert_eq!(GameHistory::describe_move(7), "Go to move #7");
    }

    #[test]
    fn test_moves_recovers_sequence() {
        let history = GameHistory::replay(&[Position::Center, Position::TopLeft]).expect("legal");
        assert_eq!(
            history.moves(),
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
            ]
        );
    }
}
