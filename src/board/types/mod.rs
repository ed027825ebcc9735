//! Core draughts types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Side`, `Rank` and `Piece` - who owns a piece and whether it is crowned
//! - `Square` - a validated board coordinate with `{A-H}{1-8}` notation
//! - `Bitboard` - 64-bit square set used as the per-side piece index
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Piece, Rank, Side};
pub use square::Square;
