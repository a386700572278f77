// src/game/outcome.rs

use std::fmt;

use crate::game::board::{queries, Position};
use crate::game::defs::Color;
use crate::game::moves::{generate_legal_moves, MoveList};

/// Result of classifying a position. The integer codes are part of the
/// engine's contract: the high bit pair distinguishes wins from draws, the
/// low bits give the reason.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress = 0,
    /// Hard cap: the game is drawn at 150 fullmoves.
    FullmoveCap = 4,
    Stalemate = 5,
    FiftyMoveRule = 6,
    InsufficientMaterial = 7,
    BlackWin = 8,
    WhiteWin = 9,
}

impl Outcome {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    #[inline]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::WhiteWin | Outcome::BlackWin)
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            Outcome::FullmoveCap
                | Outcome::Stalemate
                | Outcome::FiftyMoveRule
                | Outcome::InsufficientMaterial
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::InProgress => "in progress",
            Outcome::FullmoveCap => "draw, 150-fullmove cap",
            Outcome::Stalemate => "draw, stalemate",
            Outcome::FiftyMoveRule => "draw, 50-move rule",
            Outcome::InsufficientMaterial => "draw, insufficient material",
            Outcome::BlackWin => "black wins, checkmate",
            Outcome::WhiteWin => "white wins, checkmate",
        };
        write!(f, "{}", text)
    }
}

/// Piece sets with no potential mating attack, empirically enumerated:
/// both kings alone, and kings plus a single bishop of either color.
pub const INSUFFICIENT_MATERIAL_SETS: [u16; 3] = [2080, 2336, 2084];

/// Classify a position. Assumes it arose from an actual game, so only the
/// side to move can be checkmated. The 50-move rule is enforced as an
/// automatic draw; threefold repetition cannot be seen from a single
/// position and is handled by the search.
pub fn check_position(pos: &Position) -> Outcome {
    if pos.fullmove >= 150 {
        return Outcome::FullmoveCap;
    }

    let mut moves = MoveList::new();
    if generate_legal_moves(pos.board, pos.active, &mut moves) == 0 {
        return if queries::in_check(pos.board, pos.active) {
            match pos.active {
                Color::White => Outcome::BlackWin,
                Color::Black => Outcome::WhiteWin,
            }
        } else {
            Outcome::Stalemate
        };
    }

    if pos.halfmove >= 100 {
        return Outcome::FiftyMoveRule;
    }
    if INSUFFICIENT_MATERIAL_SETS.contains(&queries::piece_set(pos.board)) {
        return Outcome::InsufficientMaterial;
    }
    Outcome::InProgress
}
