//! The single mutation surface for the grid and the piece index.
//!
//! Every write to `cells` goes through these functions so the per-side
//! bitboards never drift from the grid.

use super::{Bitboard, Board, Piece, PlacementError, Side, Square};

impl Board {
    /// Put `piece` on an empty dark square.
    pub(crate) fn add_piece(&mut self, sq: Square, piece: Piece) -> Result<(), PlacementError> {
        if !sq.is_dark() {
            return Err(PlacementError::LightSquare { square: sq });
        }
        if !self.is_empty(sq) {
            return Err(PlacementError::Occupied { square: sq });
        }
        self.place(sq, piece);
        Ok(())
    }

    /// Unchecked placement for layouts known to be valid.
    pub(crate) fn place(&mut self, sq: Square, piece: Piece) {
        debug_assert!(sq.is_dark() && self.is_empty(sq), "bad placement on {sq}");
        self.cells[sq.row()][sq.col()] = Some(piece);
        self.occupied[piece.side.index()].insert(sq);
    }

    /// Take the piece off `sq` and return it.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Piece {
        let Some(piece) = self.cells[sq.row()][sq.col()].take() else {
            unreachable!("remove_piece on empty square {sq}");
        };
        self.occupied[piece.side.index()].remove(sq);
        piece
    }

    /// Relocate the piece on `from` to the empty square `to`.
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) {
        debug_assert!(self.is_empty(to), "move_piece onto occupied square {to}");
        let piece = self.remove_piece(from);
        self.place(to, piece);
    }

    /// Crown the man on `sq`. The index is unaffected since the side is unchanged.
    pub(crate) fn promote(&mut self, sq: Square) {
        if let Some(piece) = self.cells[sq.row()][sq.col()].as_mut() {
            *piece = piece.crowned();
        }
    }

    /// Returns true if each side's index holds exactly the squares its pieces stand on.
    pub(crate) fn index_is_consistent(&self) -> bool {
        let grid_matches = Side::BOTH.iter().all(|&side| {
            let from_grid: Bitboard = Square::all()
                .filter(|&sq| self.piece_at(sq).is_some_and(|p| p.side == side))
                .collect();
            from_grid == self.pieces(side)
        });
        let all = self.pieces(Side::White).or(self.pieces(Side::Black));
        grid_matches && all.and(Bitboard::DARK_SQUARES) == all
    }
}
