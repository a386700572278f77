// src/search/eval.rs

use crate::game::board::{queries, Board, Position};
use crate::game::defs::Color;
use crate::game::outcome::{check_position, Outcome};

pub type Score = i32;

pub const SCORE_WIN: Score = 100;
pub const SCORE_LOSS: Score = -100;
pub const SCORE_DRAW: Score = 0;

/// Piece values from regular chess, low piece-set bits first (pawn up to
/// king).
const PIECE_VALUES: [Score; 6] = [1, 3, 3, 5, 9, 100];

/// Material estimate from `root`'s point of view: white minus black, negated
/// for a black root. Computed by walking the piece-set bitflag, so at most
/// one of each piece per side counts, which the no-promotion rule
/// guarantees.
pub fn material_estimate(root: Color, board: Board) -> Score {
    let mut set = queries::piece_set(board);
    let mut score = 0;

    // Black pieces occupy the low six bits, white the high six.
    for value in PIECE_VALUES {
        score -= (set & 1) as Score * value;
        set >>= 1;
    }
    for value in PIECE_VALUES {
        score += (set & 1) as Score * value;
        set >>= 1;
    }

    if root == Color::White {
        score
    } else {
        -score
    }
}

/// Exact score when the game is over, `None` while it is still in progress.
pub fn definite_score(root: Color, pos: &Position) -> Option<Score> {
    match check_position(pos) {
        Outcome::InProgress => None,
        Outcome::WhiteWin => Some(if root == Color::White { SCORE_WIN } else { SCORE_LOSS }),
        Outcome::BlackWin => Some(if root == Color::White { SCORE_LOSS } else { SCORE_WIN }),
        _ => Some(SCORE_DRAW),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::io::position_from_fence;

    fn board_of(fence: &str) -> Board {
        position_from_fence(fence).unwrap().board
    }

    #[test]
    fn balanced_material_scores_zero() {
        assert_eq!(material_estimate(Color::White, Board::START), 0);
        assert_eq!(material_estimate(Color::Black, Board::START), 0);
    }

    #[test]
    fn material_is_signed_by_the_root_player() {
        // White is up a queen and a rook, down a knight.
        let board = board_of("KQR.....n......k w 0 1");
        assert_eq!(material_estimate(Color::White, board), 9 + 5 - 3);
        assert_eq!(material_estimate(Color::Black, board), -(9 + 5 - 3));
    }

    #[test]
    fn definite_scores_map_outcomes_to_the_root() {
        // Checkmate against black.
        let mate = position_from_fence("K..........N..Pk b 39 20").unwrap();
        assert_eq!(definite_score(Color::White, &mate), Some(SCORE_WIN));
        assert_eq!(definite_score(Color::Black, &mate), Some(SCORE_LOSS));

        // Stalemate is a draw for either root.
        let stale = position_from_fence("K.k............q w 39 20").unwrap();
        assert_eq!(definite_score(Color::White, &stale), Some(SCORE_DRAW));
        assert_eq!(definite_score(Color::Black, &stale), Some(SCORE_DRAW));

        // Live position.
        let live = position_from_fence("KQRBNP....pnbrqk w 0 1").unwrap();
        assert_eq!(definite_score(Color::White, &live), None);
    }
}
