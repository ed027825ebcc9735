//! Legal move generation tests.

use super::{notation, sq};
use crate::board::{Board, BoardBuilder, Side};

#[test]
fn test_starting_position_moves() {
    let board = Board::new();
    let moves = board.legal_moves();
    assert_eq!(
        notation(&moves),
        vec!["A3-B4", "C3-B4", "C3-D4", "E3-D4", "E3-F4", "G3-F4", "G3-H4"]
    );
    assert!(moves.iter().all(|mv| !mv.is_capture()));
    assert!(!board.has_capture());
}

#[test]
fn test_black_men_move_down_the_board() {
    let board = BoardBuilder::new()
        .man(sq("F6"), Side::Black)
        .man(sq("A1"), Side::White)
        .side_to_move(Side::Black)
        .build()
        .unwrap();
    assert_eq!(notation(&board.legal_moves()), vec!["F6-E5", "F6-G5"]);
}

#[test]
fn test_man_first_capture_is_forward_only() {
    let board = BoardBuilder::new()
        .man(sq("C3"), Side::White)
        .man(sq("D4"), Side::Black)
        .man(sq("B2"), Side::Black)
        .build()
        .unwrap();

    let moves = board.legal_moves();
    assert_eq!(notation(&moves), vec!["C3xE5"]);
    assert_eq!(moves[0].captured(), Some(sq("D4")));
    assert!(!moves.contains(sq("C3"), sq("A1")));
}

#[test]
fn test_man_continuation_may_capture_backward() {
    let board = BoardBuilder::new()
        .man(sq("C3"), Side::White)
        .man(sq("B2"), Side::Black)
        .build()
        .unwrap();

    assert!(board.captures_for(sq("C3"), true).is_empty());
    assert_eq!(notation(&board.captures_for(sq("C3"), false)), vec!["C3xA1"]);
}

#[test]
fn test_man_capture_needs_empty_landing() {
    let board = BoardBuilder::new()
        .man(sq("C3"), Side::White)
        .man(sq("D4"), Side::Black)
        .man(sq("E5"), Side::Black)
        .build()
        .unwrap();
    assert!(board.captures_for(sq("C3"), true).is_empty());
    assert!(!board.has_capture());
}

#[test]
fn test_man_cannot_jump_own_piece() {
    let board = BoardBuilder::new()
        .man(sq("C3"), Side::White)
        .man(sq("D4"), Side::White)
        .man(sq("H8"), Side::Black)
        .build()
        .unwrap();
    assert!(board.legal_moves().iter().all(|mv| !mv.is_capture()));
}

#[test]
fn test_capture_is_mandatory_across_the_side() {
    let board = BoardBuilder::new()
        .man(sq("C3"), Side::White)
        .man(sq("A1"), Side::White)
        .man(sq("D4"), Side::Black)
        .build()
        .unwrap();

    // A1 has a free step to B2 but C3 must capture.
    assert_eq!(notation(&board.legal_moves()), vec!["C3xE5"]);
    assert!(board.has_capture());
    assert_eq!(notation(&board.quiet_moves_for(sq("A1"))), vec!["A1-B2"]);
}

#[test]
fn test_captures_from_several_pieces_are_all_offered() {
    let board = BoardBuilder::new()
        .man(sq("C3"), Side::White)
        .man(sq("G3"), Side::White)
        .man(sq("D4"), Side::Black)
        .man(sq("F4"), Side::Black)
        .build()
        .unwrap();

    assert_eq!(notation(&board.legal_moves()), vec!["C3xE5", "G3xE5"]);
}

#[test]
fn test_flying_king_lands_directly_behind_victim() {
    let board = BoardBuilder::new()
        .king(sq("A1"), Side::White)
        .man(sq("D4"), Side::Black)
        .build()
        .unwrap();

    let moves = board.legal_moves();
    assert_eq!(notation(&moves), vec!["A1xE5"]);
    assert_eq!(moves[0].captured(), Some(sq("D4")));
    assert!(!moves.contains(sq("A1"), sq("F6")));
    assert!(!moves.contains(sq("A1"), sq("G7")));
}

#[test]
fn test_flying_king_captures_in_every_direction() {
    let board = BoardBuilder::new()
        .king(sq("D4"), Side::White)
        .man(sq("F6"), Side::Black)
        .man(sq("B6"), Side::Black)
        .man(sq("F2"), Side::Black)
        .man(sq("C3"), Side::Black)
        .build()
        .unwrap();

    assert_eq!(
        notation(&board.legal_moves()),
        vec!["D4xA7", "D4xB2", "D4xG1", "D4xG7"]
    );
}

#[test]
fn test_king_cannot_jump_two_in_a_row() {
    let board = BoardBuilder::new()
        .king(sq("A1"), Side::White)
        .man(sq("D4"), Side::Black)
        .man(sq("E5"), Side::Black)
        .build()
        .unwrap();
    assert!(board.captures_for(sq("A1"), true).is_empty());
}

#[test]
fn test_king_cannot_capture_through_own_piece() {
    let board = BoardBuilder::new()
        .king(sq("A1"), Side::White)
        .man(sq("C3"), Side::White)
        .man(sq("E5"), Side::Black)
        .build()
        .unwrap();
    assert!(board.captures_for(sq("A1"), true).is_empty());
}

#[test]
fn test_king_cannot_capture_against_the_edge() {
    let board = BoardBuilder::new()
        .king(sq("A1"), Side::White)
        .man(sq("H8"), Side::Black)
        .build()
        .unwrap();
    assert!(!board.has_capture());
}

#[test]
fn test_king_slides_until_obstruction() {
    let board = BoardBuilder::new()
        .king(sq("D4"), Side::White)
        .man(sq("H8"), Side::Black)
        .build()
        .unwrap();
    // NE stops before H8 (3), NW 3, SE 3, SW 3.
    assert_eq!(board.legal_moves().len(), 12);
    assert!(board.legal_moves().contains(sq("D4"), sq("G7")));
    assert!(!board.legal_moves().contains(sq("D4"), sq("H8")));
}

#[test]
fn test_chain_restricts_moves_to_active_piece() {
    let board = BoardBuilder::new()
        .man(sq("E5"), Side::White)
        .man(sq("A3"), Side::White)
        .man(sq("D4"), Side::Black)
        .man(sq("B4"), Side::Black)
        .chaining(sq("E5"))
        .build()
        .unwrap();

    // A3 could take B4 on a fresh turn; during the chain only E5 may move.
    let moves = board.legal_moves();
    assert_eq!(notation(&moves), vec!["E5xC3"]);
    assert!(moves.iter().all(|mv| mv.from() == sq("E5") && mv.is_capture()));
}

#[test]
fn test_side_without_pieces_has_no_moves() {
    let board = BoardBuilder::new()
        .man(sq("D4"), Side::Black)
        .build()
        .unwrap();
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_generation_does_not_promote() {
    let board = BoardBuilder::new()
        .man(sq("C7"), Side::White)
        .man(sq("H2"), Side::Black)
        .build()
        .unwrap();
    let before = board.clone();
    assert_eq!(notation(&board.legal_moves()), vec!["C7-B8", "C7-D8"]);
    assert_eq!(board, before);
}
