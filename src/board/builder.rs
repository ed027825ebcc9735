//! Fluent builder for constructing draughts positions.
//!
//! Allows setting up positions piece by piece instead of playing them out.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Piece, Side};
//!
//! let board = BoardBuilder::new()
//!     .king("A1".parse().unwrap(), Side::White)
//!     .man("D4".parse().unwrap(), Side::Black)
//!     .side_to_move(Side::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(Side::Black), 1);
//! ```

use super::{Board, Piece, PlacementError, Side, Square, Turn};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Side,
    chain: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder, White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Side::White,
            chain: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for sq in Square::all() {
            if let Some(piece) = board.piece_at(sq) {
                builder.pieces.push((sq, piece));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever the builder already put on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    #[must_use]
    pub fn man(self, square: Square, side: Side) -> Self {
        self.piece(square, Piece::man(side))
    }

    #[must_use]
    pub fn king(self, square: Square, side: Side) -> Self {
        self.piece(square, Piece::king(side))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Start in the middle of a capture chain with the piece on `square`.
    #[must_use]
    pub const fn chaining(mut self, square: Square) -> Self {
        self.chain = Some(square);
        self
    }

    /// Build the board.
    ///
    /// Fails if a piece stands on a light square, or if the chain piece does
    /// not belong to the side to move or has nothing left to capture.
    pub fn build(self) -> Result<Board, PlacementError> {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.add_piece(square, piece)?;
        }
        board.side_to_move = self.side_to_move;

        if let Some(square) = self.chain {
            let owned = board
                .piece_at(square)
                .is_some_and(|piece| piece.side == self.side_to_move);
            if !owned || board.captures_for(square, false).is_empty() {
                return Err(PlacementError::InvalidChain { square });
            }
            board.turn = Turn::Chaining { piece: square };
        }

        Ok(board)
    }
}
