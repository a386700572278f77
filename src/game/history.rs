// src/game/history.rs

use std::collections::HashMap;

use crate::game::board::Board;

/// How often each board has been on the path from the game's start, for
/// threefold-repetition detection. The search clones this into every child
/// frame rather than undoing; paths are short and the map stays small.
#[derive(Clone, Debug, Default)]
pub struct Repetitions {
    counts: HashMap<Board, u32>,
}

impl Repetitions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count(&self, board: Board) -> u32 {
        self.counts.get(&board).copied().unwrap_or(0)
    }

    /// A board seen three or more times is a draw at lookup time.
    #[inline]
    pub fn is_threefold(&self, board: Board) -> bool {
        self.count(board) >= 3
    }

    #[inline]
    pub fn bump(&mut self, board: Board) {
        *self.counts.entry(board).or_insert(0) += 1;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threefold_triggers_at_three() {
        let mut seen = Repetitions::new();
        assert_eq!(seen.count(Board::START), 0);
        seen.bump(Board::START);
        seen.bump(Board::START);
        assert!(!seen.is_threefold(Board::START));
        seen.bump(Board::START);
        assert!(seen.is_threefold(Board::START));
        assert!(!seen.is_threefold(Board(0)));
    }

    #[test]
    fn clones_are_independent() {
        let mut seen = Repetitions::new();
        seen.bump(Board::START);
        let mut child = seen.clone();
        child.bump(Board::START);
        assert_eq!(seen.count(Board::START), 1);
        assert_eq!(child.count(Board::START), 2);
    }
}
