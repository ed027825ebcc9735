//! Diagonal ray tables for move generation.
//!
//! Every square gets four rays, one per diagonal direction, listing the
//! squares met when walking outward until the edge. Men look at the first
//! two cells of a ray, kings walk the whole ray.

use once_cell::sync::Lazy;

use super::{Side, Square};

/// The four diagonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub(crate) const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    const fn index(self) -> usize {
        match self {
            Direction::NorthEast => 0,
            Direction::NorthWest => 1,
            Direction::SouthEast => 2,
            Direction::SouthWest => 3,
        }
    }

    /// (row, col) step
    const fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, -1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// The two directions a man of `side` moves in.
    pub(crate) const fn forward(side: Side) -> [Direction; 2] {
        match side {
            Side::White => [Direction::NorthEast, Direction::NorthWest],
            Side::Black => [Direction::SouthEast, Direction::SouthWest],
        }
    }
}

/// Squares along one direction, nearest first. A diagonal holds at most 7.
#[derive(Clone, Copy)]
struct Ray {
    squares: [Square; 7],
    len: usize,
}

static DIAGONAL_RAYS: Lazy<Vec<[Ray; 4]>> = Lazy::new(|| {
    Square::all()
        .map(|origin| {
            Direction::ALL.map(|dir| {
                let (d_row, d_col) = dir.delta();
                let mut ray = Ray {
                    squares: [origin; 7],
                    len: 0,
                };
                let mut current = origin.offset(d_row, d_col);
                while let Some(sq) = current {
                    ray.squares[ray.len] = sq;
                    ray.len += 1;
                    current = sq.offset(d_row, d_col);
                }
                ray
            })
        })
        .collect()
});

/// Squares from `from` (exclusive) to the board edge along `dir`.
#[inline]
pub(crate) fn ray(from: Square, dir: Direction) -> &'static [Square] {
    let ray = &DIAGONAL_RAYS[from.as_index()][dir.index()];
    &ray.squares[..ray.len]
}
