//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

const SQUARE_MASK: u32 = 0x3F;
const TO_SHIFT: u32 = 6;
const CAPTURED_SHIFT: u32 = 12;
const FLAG_CAPTURE: u32 = 1 << 18;

/// Compact move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-17: captured square (0-63, meaningful only with the capture flag)
/// - bit 18:     capture flag
///
/// A `Move` is computed fresh by each legal-move query and is never stored by
/// the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// Create a quiet (non-capturing) move
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move(from.as_index() as u32 | ((to.as_index() as u32) << TO_SHIFT))
    }

    /// Create a capture of the piece on `captured`, landing on `to`
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square, captured: Square) -> Self {
        Move(
            Move::quiet(from, to).0
                | ((captured.as_index() as u32) << CAPTURED_SHIFT)
                | FLAG_CAPTURE,
        )
    }

    /// Get the origin square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & SQUARE_MASK) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> TO_SHIFT) & SQUARE_MASK) as usize)
    }

    /// Get the square of the jumped piece, if this is a capture
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Square> {
        if self.is_capture() {
            Some(Square::from_index_unchecked(
                ((self.0 >> CAPTURED_SHIFT) & SQUARE_MASK) as usize,
            ))
        } else {
            None
        }
    }

    /// Returns true if this move removes an enemy piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.0 & FLAG_CAPTURE != 0
    }

    /// Returns true if the move goes from `from` to `to`
    #[inline]
    #[must_use]
    pub fn connects(self, from: Square, to: Square) -> bool {
        self.from() == from && self.to() == to
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(captured) = self.captured() {
            write!(f, " x{captured}")?;
        }
        write!(f, ")")
    }
}

/// `C3-D4` for quiet moves, `C3xE5` for captures.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{sep}{}", self.from(), self.to())
    }
}

/// With 32 playable squares no position produces more moves than this.
pub(crate) const MAX_MOVES: usize = 256;
const EMPTY_MOVE: Move = Move(0);

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub(crate) fn extend_from(&mut self, other: &MoveList) {
        for mv in other {
            self.push(*mv);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Find the move connecting `from` and `to`.
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().copied().find(|mv| mv.connects(from, to))
    }

    /// Returns true if the list holds the move connecting `from` and `to`.
    #[must_use]
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.find(from, to).is_some()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over the moves of a `MoveList`.
pub type MoveListIntoIter = std::iter::Take<std::array::IntoIter<Move, MAX_MOVES>>;

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter().take(self.len)
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}
