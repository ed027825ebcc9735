//! Synchronization wrapper for hosts that share one game between threads.
//!
//! The board itself does no locking. `SharedBoard` holds the lock for the
//! whole generate-then-execute step, so a move is never validated against a
//! legal set that another caller has since made stale.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Board, MoveError, MoveList, MoveOutcome, Side, Snapshot, Square};

/// A game shared behind a mutex. Clones refer to the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    /// Share a fresh game in the starting position.
    #[must_use]
    pub fn new() -> Self {
        SharedBoard::from(Board::new())
    }

    /// Validate and play a move under a single lock acquisition.
    pub fn submit_move(&self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.0.lock().submit_move(from, to)
    }

    /// Notation form of [`SharedBoard::submit_move`].
    pub fn submit(&self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        self.0.lock().submit(from, to)
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.0.lock().legal_moves()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.0.lock().winner()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.0.lock().snapshot()
    }

    /// Run `f` with exclusive access to the board.
    pub fn with<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_one_game() {
        let game = SharedBoard::new();
        let other = game.clone();

        game.submit("C3", "D4").unwrap();
        assert_eq!(other.with(|board| board.side_to_move()), Side::Black);
    }

    #[test]
    fn test_racing_submissions_apply_once() {
        let game = SharedBoard::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let game = game.clone();
                thread::spawn(move || game.submit("C3", "D4").is_ok())
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();

        assert_eq!(accepted, 1);
        assert_eq!(game.with(|board| board.side_to_move()), Side::Black);
    }

    #[test]
    fn test_snapshot_reflects_moves() {
        let game = SharedBoard::new();
        let c3: Square = "C3".parse().unwrap();
        let d4: Square = "D4".parse().unwrap();
        game.submit_move(c3, d4).unwrap();

        let grid = game.snapshot();
        assert!(grid[c3.row()][c3.col()].is_none());
        assert!(grid[d4.row()][d4.col()].is_some());
        assert_eq!(game.winner(), None);
        assert_eq!(game.legal_moves().len(), 7);
    }
}
