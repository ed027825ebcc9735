use super::super::rays::{ray, Direction};
use super::super::{Board, Move, MoveList, Side, Square};

impl Board {
    /// Flying captures. The king slides over empty squares to the first
    /// occupied one; if that is an enemy with an empty square directly
    /// behind it, the king jumps and lands there and nowhere further.
    pub(super) fn king_captures(&self, from: Square, side: Side, out: &mut MoveList) {
        for dir in Direction::ALL {
            let ray = ray(from, dir);
            let Some(hit) = ray.iter().position(|&sq| !self.is_empty(sq)) else {
                continue;
            };
            if !self.is_enemy(ray[hit], side) {
                continue;
            }
            if let Some(&land) = ray.get(hit + 1) {
                if self.is_empty(land) {
                    out.push(Move::capture(from, land, ray[hit]));
                }
            }
        }
    }

    /// Flying quiet moves: every empty square up to the first obstruction.
    pub(super) fn king_slides(&self, from: Square, out: &mut MoveList) {
        for dir in Direction::ALL {
            for &to in ray(from, dir).iter().take_while(|&&sq| self.is_empty(sq)) {
                out.push(Move::quiet(from, to));
            }
        }
    }
}
