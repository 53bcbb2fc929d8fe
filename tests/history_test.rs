//! Tests for the move history and time travel.

use tictactoe_history::{
    Board, GameHistory, GameStatus, HistoryInvariants, InvariantSet, Move, MoveError, Player,
    Position, Square, apply_move, check_winner,
};

fn top_row_game() -> GameHistory {
    GameHistory::replay(&[
        Position::TopLeft,     // X 0
        Position::Center,      // O 4
        Position::TopCenter,   // X 1
        Position::MiddleRight, // O 5
        Position::TopRight,    // X 2
    ])
    .expect("Valid replay")
}

#[test]
fn test_x_wins_top_row() {
    let history = top_row_game();

    assert_eq!(history.len(), 6);
    assert_eq!(check_winner(history.current_board()), Some(Player::X));
    assert_eq!(history.status(), GameStatus::Won(Player::X));
    assert_eq!(history.status().to_string(), "Winner: X");
}

#[test]
fn test_branching_discards_future_moves() {
    let mut history = top_row_game();

    history.jump_to(2);
    assert_eq!(history.next_player(), Player::X);
    history.place(Position::MiddleLeft).expect("Cell 3 is free");

    assert_eq!(history.len(), 4);
    assert_eq!(history.viewed_index(), 3);
    let board = history.current_board();
    assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Player::X));
    assert!(board.is_empty(Position::TopCenter));
    assert!(board.is_empty(Position::MiddleRight));
    assert_eq!(history.status().to_string(), "Next player: O");
}

#[test]
fn test_play_after_jump_prunes_snapshots() {
    let mut history = top_row_game();
    let kept = history.snapshots()[..=1].to_vec();
    history.jump_to(1);

    let board = apply_move(
        history.current_board(),
        Move::new(Player::O, Position::BottomLeft),
    )
    .expect("legal");
    history.play(board.clone());

    assert_eq!(&history.snapshots()[..2], kept.as_slice());
    assert_eq!(history.snapshots()[2], board);
    assert_eq!(history.len(), 3);
}

#[test]
fn test_moves_after_win_are_rejected() {
    let mut history = top_row_game();
    let before = history.clone();

    let result = history.place(Position::BottomLeft);

    assert_eq!(result, Err(MoveError::GameOver { winner: Player::X }));
    assert_eq!(history, before);
}

#[test]
fn test_jump_back_reopens_finished_game() {
    let mut history = top_row_game();
    history.jump_to(4);

    assert_eq!(history.status(), GameStatus::InProgress { next: Player::X });
    assert_eq!(history.len(), 6);

    history.jump_to(5);
    assert!(history.status().is_finished());
}

#[test]
fn test_next_player_alternates_with_viewed_index() {
    let mut history = GameHistory::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::BottomRight,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
    ])
    .expect("Valid replay");

    for index in 0..history.len() {
        history.jump_to(index);
        let expected = if index % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(history.next_player(), expected, "at index {index}");
    }
}

#[test]
fn test_full_board_without_winner_keeps_prompting() {
    let history = GameHistory::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .expect("Valid replay");

    assert_eq!(history.current_board().occupied(), 9);
    assert_eq!(history.status(), GameStatus::InProgress { next: Player::O });
}

#[test]
fn test_replay_reports_first_illegal_move() {
    let result = GameHistory::replay(&[Position::Center, Position::Center]);
    assert_eq!(
        result,
        Err(MoveError::SquareOccupied {
            position: Position::Center
        })
    );
}

#[test]
fn test_invariants_hold_through_branching() {
    let mut history = top_row_game();
    history.jump_to(3);
    history.place(Position::BottomLeft).expect("legal");
    history.jump_to(0);

    assert!(HistoryInvariants::check_all(&history).is_ok());
    assert_eq!(history.snapshots()[0], Board::new());
}

#[test]
fn test_move_labels() {
    let history = top_row_game();
    assert_eq!(
        history.move_labels(),
        vec![
            "Go to game start",
            "Go to move #1",
            "Go to move #2",
            "Go to move #3",
            "Go to move #4",
            "Go to move #5",
        ]
    );
}
