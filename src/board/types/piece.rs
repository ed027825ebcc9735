//! Side, rank and piece types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two players.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides in index order (White=0, Black=1)
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row on which a man of this side is crowned (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Rows filled with men at the start of a game.
    #[inline]
    #[must_use]
    pub(crate) const fn home_rows(self) -> std::ops::RangeInclusive<usize> {
        match self {
            Side::White => 0..=2,
            Side::Black => 5..=7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Man or King.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board: one of WhiteMan, BlackMan, WhiteKing, BlackKing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    pub const WHITE_MAN: Piece = Piece::man(Side::White);
    pub const BLACK_MAN: Piece = Piece::man(Side::Black);
    pub const WHITE_KING: Piece = Piece::king(Side::White);
    pub const BLACK_KING: Piece = Piece::king(Side::Black);

    #[inline]
    #[must_use]
    pub const fn man(side: Side) -> Self {
        Piece {
            side,
            rank: Rank::Man,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king(side: Side) -> Self {
        Piece {
            side,
            rank: Rank::King,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Same side, crowned.
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Self {
        Piece::king(self.side)
    }

    /// Board character: `w`/`b` for men, `W`/`B` for kings.
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.side, self.rank) {
            (Side::White, Rank::Man) => 'w',
            (Side::Black, Rank::Man) => 'b',
            (Side::White, Rank::King) => 'W',
            (Side::Black, Rank::King) => 'B',
        }
    }

    /// Inverse of [`Piece::to_char`].
    #[must_use]
    pub const fn from_char(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::WHITE_MAN),
            'b' => Some(Piece::BLACK_MAN),
            'W' => Some(Piece::WHITE_KING),
            'B' => Some(Piece::BLACK_KING),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            Rank::Man => "man",
            Rank::King => "king",
        };
        write!(f, "{} {rank}", self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char_round_trip() {
        for piece in [
            Piece::WHITE_MAN,
            Piece::BLACK_MAN,
            Piece::WHITE_KING,
            Piece::BLACK_KING,
        ] {
            assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
        }
        assert_eq!(Piece::from_char('.'), None);
    }

    #[test]
    fn test_side_directions() {
        assert_eq!(Side::White.promotion_row(), 7);
        assert_eq!(Side::Black.promotion_row(), 0);
        assert_eq!(Side::White.opponent(), Side::Black);
    }

    #[test]
    fn test_crowning_keeps_side() {
        assert_eq!(Piece::BLACK_MAN.crowned(), Piece::BLACK_KING);
        assert!(Piece::WHITE_KING.crowned().is_king());
    }
}
