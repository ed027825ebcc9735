#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Piece, Side, Square};

/// Read-only copy of the grid, `[row][col]` with row 0 = notation row `1`.
pub type Snapshot = [[Option<Piece>; 8]; 8];

/// Capture-chain state layered on top of normal turn alternation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Turn {
    /// Any piece of the side to move may move.
    #[default]
    Idle,
    /// The side to move must keep capturing with the piece on `piece`.
    Chaining { piece: Square },
}

impl Turn {
    /// The piece that must continue capturing, if a chain is active.
    #[must_use]
    pub const fn active_piece(self) -> Option<Square> {
        match self {
            Turn::Idle => None,
            Turn::Chaining { piece } => Some(piece),
        }
    }

    #[must_use]
    pub const fn is_chaining(self) -> bool {
        matches!(self, Turn::Chaining { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: Snapshot,
    /// Per-side piece index, kept in lock-step with `cells`.
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) side_to_move: Side,
    pub(crate) turn: Turn,
}

impl Board {
    /// Standard starting layout, White to move.
    ///
    /// White men fill the dark squares of rows 1-3, Black men rows 6-8.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for side in Side::BOTH {
            for sq in Square::dark().filter(|sq| side.home_rows().contains(&sq.row())) {
                board.place(sq, Piece::man(side));
            }
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            occupied: [Bitboard::EMPTY; 2],
            side_to_move: Side::White,
            turn: Turn::Idle,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Squares occupied by `side`.
    #[inline]
    #[must_use]
    pub fn pieces(&self, side: Side) -> Bitboard {
        self.occupied[side.index()]
    }

    /// Live piece count for `side`.
    #[inline]
    #[must_use]
    pub fn piece_count(&self, side: Side) -> u32 {
        self.pieces(side).popcount()
    }

    /// Read-only copy of every cell, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
