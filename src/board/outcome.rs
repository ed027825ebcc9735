//! Win detection.

use super::{Board, Side};

impl Board {
    /// The winning side, or `None` while the game continues.
    ///
    /// A side with no pieces left loses. Otherwise the side to move loses when
    /// it has no legal move. Never mutates the board.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if let Some(winner) = self.material_winner() {
            return Some(winner);
        }
        if self.legal_moves().is_empty() {
            return Some(self.side_to_move.opponent());
        }
        None
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Winner by elimination only. Black is checked first, so a board with
    /// no pieces at all goes to White.
    pub(crate) fn material_winner(&self) -> Option<Side> {
        if self.piece_count(Side::Black) == 0 {
            Some(Side::White)
        } else if self.piece_count(Side::White) == 0 {
            Some(Side::Black)
        } else {
            None
        }
    }
}
