//! Rules engine for 8x8 draughts with flying kings.
//!
//! The engine owns board state, legal-move generation, move execution and
//! win detection. Rendering, input handling and networking belong to the
//! host, which drives the engine through [`Board`] (or [`SharedBoard`] when
//! several threads share one game).

#[macro_use]
mod logging;

pub mod board;
pub mod sync;

pub use board::{Board, Move, MoveError, MoveOutcome, Piece, Side, Square};
pub use sync::SharedBoard;
