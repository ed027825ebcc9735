use std::fmt;

use super::{Board, Square};

/// Text diagram, row 8 at the top. Men are `w`/`b`, kings `W`/`B`, empty cells `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{}", row + 1)?;
            for col in 0..8 {
                let cell = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  A B C D E F G H")
    }
}
