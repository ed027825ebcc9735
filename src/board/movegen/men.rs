use super::super::rays::{ray, Direction};
use super::super::{Board, Move, MoveList, Side, Square};

impl Board {
    /// Short jumps: enemy on the adjacent diagonal, empty landing square right behind it.
    pub(super) fn man_captures(
        &self,
        from: Square,
        side: Side,
        first_capture: bool,
        out: &mut MoveList,
    ) {
        let forward = Direction::forward(side);
        let directions: &[Direction] = if first_capture {
            &forward
        } else {
            &Direction::ALL
        };

        for &dir in directions {
            if let &[over, land, ..] = ray(from, dir) {
                if self.is_enemy(over, side) && self.is_empty(land) {
                    out.push(Move::capture(from, land, over));
                }
            }
        }
    }

    /// One diagonal step forward onto an empty square.
    pub(super) fn man_steps(&self, from: Square, side: Side, out: &mut MoveList) {
        for dir in Direction::forward(side) {
            if let Some(&to) = ray(from, dir).first() {
                if self.is_empty(to) {
                    out.push(Move::quiet(from, to));
                }
            }
        }
    }
}
