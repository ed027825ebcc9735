//! Legal move generation.
//!
//! Priority order for the side to move:
//! 1. an active capture chain restricts play to the chaining piece's captures;
//! 2. otherwise captures anywhere on the side are mandatory;
//! 3. otherwise every quiet move is legal.

mod kings;
mod men;

use super::{Board, MoveList, Side, Square};

impl Board {
    /// Every legal move for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if let Some(piece) = self.turn.active_piece() {
            return self.captures_for(piece, false);
        }

        let side = self.side_to_move;
        let captures = self.side_captures(side);
        if !captures.is_empty() {
            return captures;
        }

        let mut moves = MoveList::new();
        for from in self.pieces(side) {
            self.push_quiet_moves(from, &mut moves);
        }
        moves
    }

    /// Returns true if the side to move is bound by the mandatory-capture rule.
    #[must_use]
    pub fn has_capture(&self) -> bool {
        self.turn.is_chaining() || !self.side_captures(self.side_to_move).is_empty()
    }

    /// Captures available to the piece on `from`.
    ///
    /// With `first_capture` set a man may only jump forward, as on the first
    /// jump of a turn; otherwise it may jump in all four directions. Kings
    /// ignore the flag. An empty square yields no moves.
    #[must_use]
    pub fn captures_for(&self, from: Square, first_capture: bool) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.piece_at(from) {
            if piece.is_king() {
                self.king_captures(from, piece.side, &mut moves);
            } else {
                self.man_captures(from, piece.side, first_capture, &mut moves);
            }
        }
        moves
    }

    /// Non-capturing moves for the piece on `from`, ignoring the
    /// mandatory-capture rule.
    #[must_use]
    pub fn quiet_moves_for(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.push_quiet_moves(from, &mut moves);
        moves
    }

    fn push_quiet_moves(&self, from: Square, out: &mut MoveList) {
        match self.piece_at(from) {
            Some(piece) if piece.is_king() => self.king_slides(from, out),
            Some(piece) => self.man_steps(from, piece.side, out),
            None => {}
        }
    }

    /// First captures for every piece of `side`.
    fn side_captures(&self, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.pieces(side) {
            moves.extend_from(&self.captures_for(from, true));
        }
        moves
    }

    #[inline]
    fn is_enemy(&self, sq: Square, side: Side) -> bool {
        self.piece_at(sq).is_some_and(|piece| piece.side != side)
    }
}
