//! Tests for the board engine through its public API.

use strictly_connect_four::{Board, BoardError, ConnectFourModel, GameStatus, MoveError, Player};

/// Plays `columns` in order, panicking on any rejected move.
fn board_after(columns: &[i64]) -> Board {
    let mut board = Board::default();
    for &column in columns {
        board
            .make_move(column)
            .unwrap_or_else(|e| panic!("Move {column} rejected: {e}"));
    }
    board
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(5, 8).unwrap();
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.turn(), Some(Player::Red));
    assert_eq!(board.winner(), None);
    assert!(!board.is_game_over());
    assert!(board.board_state().iter().flatten().all(Option::is_none));
    assert_eq!(board.board_state().len(), 5);
    assert_eq!(board.board_state()[0].len(), 8);
}

#[test]
fn test_invalid_dimensions_message() {
    let err = Board::new(4, 2).unwrap_err();
    assert_eq!(err, BoardError::InvalidDimensions { rows: 4, columns: 2 });
    assert_eq!(err.to_string(), "Board size must be at least 4x4");
}

#[test]
fn test_move_fills_exactly_one_cell() {
    let mut board = board_after(&[4, 4, 5]);
    let before = board.board_state();

    let player = board.make_move(4).unwrap();
    let after = board.board_state();

    assert_eq!(player, Player::Yellow);
    assert_eq!(board.move_count(), 4);
    let changed: Vec<(usize, usize)> = (0..board.rows())
        .flat_map(|r| (0..board.columns()).map(move |c| (r, c)))
        .filter(|&(r, c)| before[r][c] != after[r][c])
        .collect();
    assert_eq!(changed, vec![(2, 3)]);
    assert_eq!(after[2][3], Some(Player::Yellow));
}

#[test]
fn test_turn_alternates_by_parity() {
    let mut board = Board::default();
    for n in 0..10 {
        let expected = if n % 2 == 0 { Player::Red } else { Player::Yellow };
        assert_eq!(board.turn(), Some(expected));
        board.make_move((n % 7) + 1).unwrap();
    }
}

#[test]
fn test_out_of_bounds_leaves_board_unchanged() {
    let mut board = board_after(&[1, 2, 3]);
    let before = board.clone();
    for column in [0, 8, -1, i64::MAX] {
        assert_eq!(
            board.make_move(column),
            Err(MoveError::ColumnOutOfBounds { column })
        );
    }
    assert_eq!(board, before);
    assert_eq!(
        MoveError::ColumnOutOfBounds { column: 8 }.to_string(),
        "Column out of bounds"
    );
}

#[test]
fn test_full_column_leaves_board_unchanged() {
    let mut board = board_after(&[3, 3, 3, 3, 3, 3]);
    let before = board.clone();
    let err = board.make_move(3).unwrap_err();
    assert_eq!(err, MoveError::ColumnFull { column: 3 });
    assert_eq!(err.to_string(), "Column is full");
    assert_eq!(board, before);
    assert_eq!(board.turn(), Some(Player::Red));
}

#[test]
fn test_horizontal_win_ends_game() {
    let board = board_after(&[1, 1, 2, 2, 3, 3, 4]);
    assert_eq!(board.winner(), Some(Player::Red));
    assert!(board.is_game_over());
    assert_eq!(board.turn(), None);
    assert_eq!(board.status(), GameStatus::Won(Player::Red));
}

#[test]
fn test_diagonal_win_for_second_player() {
    // Yellow rises from column 2 to column 5.
    let mut board = board_after(&[1, 2, 3, 3, 4, 5, 4, 4, 5, 7, 5]);
    assert_eq!(board.winner(), None);
    assert_eq!(board.turn(), Some(Player::Yellow));

    board.make_move(5).unwrap();
    assert_eq!(board.winner(), Some(Player::Yellow));
    assert_eq!(board.make_move(6), Err(MoveError::GameOver));
    assert_eq!(board.move_count(), 12);
}

#[test]
fn test_reset_restores_empty_board() {
    let mut board = Board::new(4, 5).unwrap();
    for column in [1, 2, 3, 4, 5] {
        board.make_move(column).unwrap();
    }
    board.reset_board();
    assert_eq!(board, Board::new(4, 5).unwrap());
    assert_eq!((board.rows(), board.columns()), (4, 5));
    assert_eq!(board.turn(), Some(Player::Red));
}

#[test]
fn test_initialize_keeps_move_count() {
    let mut board = board_after(&[1, 2]);
    board.initialize_board();
    assert!(board.board_state().iter().flatten().all(Option::is_none));
    assert_eq!(board.move_count(), 2);
}

#[test]
fn test_board_state_is_a_copy() {
    let mut board = board_after(&[4]);
    let rendered = board.render();

    let mut state = board.board_state();
    state[0][3] = Some(Player::Yellow);
    state[5][0] = Some(Player::Red);

    assert_eq!(board.board_state()[0][3], Some(Player::Red));
    assert_eq!(board.board_state()[5][0], None);
    assert_eq!(board.render(), rendered);
    board.make_move(4).unwrap();
    assert_eq!(state[1][3], None);
}

#[test]
fn test_render_lists_top_row_first() {
    let board = board_after(&[1, 7, 1]);
    assert_eq!(
        board.render(),
        "5: . . . . . . .\n\
         4: . . . . . . .\n\
         3: . . . . . . .\n\
         2: . . . . . . .\n\
         1: R . . . . . .\n\
         0: R . . . . . Y\n"
    );
}

#[test]
fn test_winner_takes_precedence_over_full_board() {
    // 4x4: Yellow's last disc fills the board and completes column 1.
    let mut board = Board::new(4, 4).unwrap();
    for column in [2, 1, 2, 2, 4, 3, 3, 4, 3, 1, 4, 2, 4, 1, 3] {
        board.make_move(column).unwrap();
    }
    assert_eq!(board.status(), GameStatus::InProgress);
    board.make_move(1).unwrap();
    assert_eq!(board.move_count(), 16);
    assert_eq!(board.status(), GameStatus::Won(Player::Yellow));
    assert!(board.is_game_over());
    assert!(board.status().is_over());
}

#[test]
fn test_trait_object_dispatch() {
    let mut board = Board::default();
    let model: &mut dyn ConnectFourModel = &mut board;
    model.make_move(2).unwrap();
    assert_eq!(model.turn(), Some(Player::Yellow));
    model.reset_board();
    assert_eq!(model.render(), Board::default().render());
}
