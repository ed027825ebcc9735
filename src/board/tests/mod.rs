//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation, capture precedence, flying kings
//! - `execute.rs` - Move submission, chains, promotion, rejection
//! - `outcome.rs` - Win detection
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;
mod outcome;

use crate::board::{Move, MoveList, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Moves rendered as `C3-D4` / `C3xE5`, sorted for comparison.
pub(super) fn notation(moves: &MoveList) -> Vec<String> {
    let mut out: Vec<String> = moves.iter().map(Move::to_string).collect();
    out.sort();
    out
}
