//! Draughts board representation and rules.
//!
//! An 8x8 grid with per-side bitboard indices, mandatory captures, capture
//! chains, flying kings and promotion on the far row.
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, MoveOutcome, Side};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves().len(), 7);
//!
//! let outcome = board.submit("C3", "D4").unwrap();
//! assert_eq!(
//!     outcome,
//!     MoveOutcome::Continue { capture_pending: false, promoted: false }
//! );
//! assert_eq!(board.side_to_move(), Side::Black);
//! ```

mod builder;
mod display;
mod error;
mod execute;
mod movegen;
mod mutate;
mod outcome;
pub mod prelude;
mod rays;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveError, PlacementError, SquareError};
pub use execute::MoveOutcome;
pub use state::{Board, Snapshot, Turn};
pub use types::{
    Bitboard, BitboardIter, Move, MoveList, MoveListIntoIter, Piece, Rank, Side, Square,
};
