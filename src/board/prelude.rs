//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use draughts_engine::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Side::White);
//! ```

pub use super::{
    Board, BoardBuilder, Move, MoveError, MoveList, MoveOutcome, Piece, Rank, Side, Square,
    SquareError, Turn,
};
