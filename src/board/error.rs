//! Error types for board operations.

use std::fmt;

use super::{Side, Square};

/// Error type for coordinate parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Text is not a two-character `{A-H}{1-8}` coordinate
    InvalidCoordinate { notation: String },
    /// Numeric (row, col) pair outside the 8x8 grid
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidCoordinate { notation } => {
                write!(f, "Invalid coordinate '{notation}', expected A1-H8")
            }
            SquareError::OutOfRange { row, col } => {
                write!(f, "Square ({row}, {col}) is off the board (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected move submissions. A rejected move never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// One of the submitted coordinates could not be parsed
    InvalidSquare(SquareError),
    /// The from/to pair is not in the current legal-move set
    IllegalMove { from: Square, to: Square },
    /// The game is already decided
    GameOver { winner: Side },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare(err) => write!(f, "{err}"),
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}-{to}")
            }
            MoveError::GameOver { winner } => {
                write!(f, "Game is over, {winner} has won")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::InvalidSquare(err)
    }
}

/// Error type for position setup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Square already holds a piece
    Occupied { square: Square },
    /// Pieces may only stand on dark squares
    LightSquare { square: Square },
    /// Chain piece is missing, belongs to the wrong side, or has nothing to capture
    InvalidChain { square: Square },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Occupied { square } => {
                write!(f, "Square {square} is already occupied")
            }
            PlacementError::LightSquare { square } => {
                write!(f, "Square {square} is not a playable dark square")
            }
            PlacementError::InvalidChain { square } => {
                write!(f, "No capture can continue from {square}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
