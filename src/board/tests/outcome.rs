//! Win detection tests.

use super::sq;
use crate::board::{Board, BoardBuilder, Side};

#[test]
fn test_new_game_has_no_winner() {
    let board = Board::new();
    assert_eq!(board.winner(), None);
    assert!(!board.is_game_over());
}

#[test]
fn test_side_without_pieces_loses() {
    let board = BoardBuilder::new()
        .man(sq("C3"), Side::White)
        .side_to_move(Side::Black)
        .build()
        .unwrap();
    assert_eq!(board.winner(), Some(Side::White));

    let board = BoardBuilder::new()
        .man(sq("C3"), Side::White)
        .side_to_move(Side::White)
        .build()
        .unwrap();
    assert_eq!(board.winner(), Some(Side::White));
}

#[test]
fn test_blocked_player_loses() {
    // White's man on A7 faces Black's man on B8 with nowhere to land.
    let board = BoardBuilder::new()
        .man(sq("A7"), Side::White)
        .man(sq("B8"), Side::Black)
        .build()
        .unwrap();

    assert_eq!(board.piece_count(Side::White), 1);
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.winner(), Some(Side::Black));
}

#[test]
fn test_blocked_only_matters_for_side_to_move() {
    // Same position, Black to move: Black can still step to C7.
    let board = BoardBuilder::new()
        .man(sq("A7"), Side::White)
        .man(sq("B8"), Side::Black)
        .side_to_move(Side::Black)
        .build()
        .unwrap();
    assert_eq!(board.winner(), None);
}

#[test]
fn test_empty_board_goes_to_white() {
    for side in Side::BOTH {
        let board = BoardBuilder::new().side_to_move(side).build().unwrap();
        assert_eq!(board.winner(), Some(Side::White));
    }
}

#[test]
fn test_winner_check_does_not_mutate() {
    let board = BoardBuilder::new()
        .man(sq("E5"), Side::White)
        .man(sq("D4"), Side::Black)
        .man(sq("A7"), Side::Black)
        .chaining(sq("E5"))
        .build()
        .unwrap();
    let before = board.clone();

    assert_eq!(board.winner(), None);
    assert_eq!(board, before);
}
