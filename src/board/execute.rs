//! Move execution.
//!
//! A submitted move is first matched against the current legal set. Only a
//! match mutates the board: relocate, remove the jumped piece, crown, then
//! decide whether the capture chain continues or the turn passes.

use super::{Board, Move, MoveError, Side, Square, Turn};

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play goes on. With `capture_pending` the same side must keep capturing
    /// with the piece that just landed.
    Continue {
        capture_pending: bool,
        promoted: bool,
    },
    /// The move decided the game.
    GameOver { winner: Side },
}

impl Board {
    /// Play `from` -> `to` for the side to move.
    ///
    /// Fails with [`MoveError::IllegalMove`] if the pair is not in
    /// [`Board::legal_moves`], or [`MoveError::GameOver`] once the game is
    /// decided. A rejected move leaves the board untouched.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let mv = self.validate(from, to)?;
        Ok(self.execute(mv))
    }

    /// Like [`Board::submit_move`], taking `{A-H}{1-8}` notation.
    pub fn submit(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        let from: Square = from.trim().parse()?;
        let to: Square = to.trim().parse()?;
        self.submit_move(from, to)
    }

    /// Play a move taken from [`Board::legal_moves`]. A move generated for a
    /// different position is rejected.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let legal = self.validate(mv.from(), mv.to())?;
        if legal != mv {
            return Err(MoveError::IllegalMove {
                from: mv.from(),
                to: mv.to(),
            });
        }
        Ok(self.execute(legal))
    }

    fn validate(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        if let Some(winner) = self.material_winner() {
            return Err(MoveError::GameOver { winner });
        }
        let legal = self.legal_moves();
        if legal.is_empty() {
            return Err(MoveError::GameOver {
                winner: self.side_to_move.opponent(),
            });
        }
        legal.find(from, to).ok_or(MoveError::IllegalMove { from, to })
    }

    fn execute(&mut self, mv: Move) -> MoveOutcome {
        let side = self.side_to_move;
        let to = mv.to();

        self.move_piece(mv.from(), to);
        if let Some(captured) = mv.captured() {
            let removed = self.remove_piece(captured);
            debug_assert_eq!(removed.side, side.opponent());
        }
        engine_log!(debug, "{side} played {mv}");

        let promoted = self.crown_if_last_row(to, side);

        // Only a capture can open a chain; the landed piece continues with
        // direction-unrestricted jumps.
        let capture_pending = mv.is_capture() && !self.captures_for(to, false).is_empty();
        if capture_pending {
            self.turn = Turn::Chaining { piece: to };
            engine_log!(trace, "{side} must continue capturing from {to}");
        } else {
            self.turn = Turn::Idle;
            self.side_to_move = side.opponent();
        }
        debug_assert!(self.index_is_consistent());

        match self.winner() {
            Some(winner) => {
                engine_log!(info, "{winner} wins");
                MoveOutcome::GameOver { winner }
            }
            None => MoveOutcome::Continue {
                capture_pending,
                promoted,
            },
        }
    }

    fn crown_if_last_row(&mut self, sq: Square, side: Side) -> bool {
        let is_man = self.piece_at(sq).is_some_and(|piece| !piece.is_king());
        if !is_man || sq.row() != side.promotion_row() {
            return false;
        }
        self.promote(sq);
        engine_log!(debug, "{side} man crowned on {sq}");
        true
    }
}
