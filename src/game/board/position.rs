// src/game/board/position.rs

use std::fmt;
use colored::*;

use crate::game::board::Board;
use crate::game::defs::{self, code, Color, BOARD_SIZE};
use crate::game::moves::Move;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Position {
    pub board: Board,
    pub active: Color,
    /// Plies since the last capture or pawn move, for the fifty-move rule.
    pub halfmove: u32,
    /// Starts at 1, incremented after black moves.
    pub fullmove: u32,
}

impl Position {
    /// Naively apply a move; assumes it is legal. Resets the halfmove clock
    /// on a pawn move or capture, advances the fullmove count after black,
    /// and passes the turn.
    pub fn apply(self, mv: Move) -> Position {
        let from_nibble = self.board.nibble_at(mv.from_sq().0);
        let to_nibble = self.board.nibble_at(mv.to_sq().0);

        let halfmove = if defs::is_pawn(from_nibble) || !defs::is_empty(to_nibble) {
            0
        } else {
            self.halfmove + 1
        };
        let fullmove = if self.active == Color::Black {
            self.fullmove + 1
        } else {
            self.fullmove
        };

        Position {
            board: self.board.apply(mv),
            active: !self.active,
            halfmove,
            fullmove,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::START,
            active: Color::White,
            halfmove: 0,
            fullmove: 1,
        }
    }
}

fn glyph(nibble: u8) -> &'static str {
    match nibble {
        code::WHITE_KING => "\u{2654}\u{FE0E}",
        code::WHITE_QUEEN => "\u{2655}\u{FE0E}",
        code::WHITE_ROOK => "\u{2656}\u{FE0E}",
        code::WHITE_BISHOP => "\u{2657}\u{FE0E}",
        code::WHITE_KNIGHT => "\u{2658}\u{FE0E}",
        code::WHITE_PAWN => "\u{2659}\u{FE0E}",
        code::BLACK_KING => "\u{265A}\u{FE0E}",
        code::BLACK_QUEEN => "\u{265B}\u{FE0E}",
        code::BLACK_ROOK => "\u{265C}\u{FE0E}",
        code::BLACK_BISHOP => "\u{265D}\u{FE0E}",
        code::BLACK_KNIGHT => "\u{265E}\u{FE0E}",
        code::BLACK_PAWN => "\u{265F}\u{FE0E}",
        _ => " ",
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let light = (240, 217, 181);
        let dark = (181, 136, 99);

        for i in 0..BOARD_SIZE {
            let (r, g, b) = if i % 2 == 0 { light } else { dark };
            let square = format!(" {} ", glyph(self.board.nibble_at(i)))
                .on_truecolor(r, g, b)
                .truecolor(0, 0, 0);
            write!(f, "{}", square)?;
        }
        writeln!(f)?;

        let mut footer = String::new();
        for i in 0..BOARD_SIZE {
            footer.push_str(&format!("{:^3}", i));
        }
        writeln!(f, "{}", footer.red())?;
        write!(
            f,
            "{} to move, halfmove {}, fullmove {}",
            self.active.letter(),
            self.halfmove,
            self.fullmove
        )
    }
}
