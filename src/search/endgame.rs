// src/search/endgame.rs

use serde::{Deserialize, Serialize};

use crate::game::board::{queries, Board, Position};
use crate::game::defs::{self, Color, BOARD_SIZE, PAWN_START_BLACK, PAWN_START_WHITE};
use crate::game::io::position_to_fence;
use crate::game::outcome::{check_position, Outcome};

/// One classified candidate from the endgame sweep, as dumped to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndgameEntry {
    pub fence: String,
    pub outcome_code: u8,
}

/// Advance `seq` to its lexicographic successor in place. Returns `false`
/// once the sequence is weakly decreasing, i.e. every distinct arrangement
/// has been visited. Narayana Pandita's algorithm, as in
/// `std::next_permutation`.
pub fn next_permutation(seq: &mut [u8]) -> bool {
    if seq.len() < 2 {
        return false;
    }

    // Rightmost ascent.
    let mut k = seq.len() - 2;
    while seq[k] >= seq[k + 1] {
        if k == 0 {
            return false;
        }
        k -= 1;
    }

    // Rightmost element above it.
    let mut i = seq.len() - 1;
    while seq[i] <= seq[k] {
        i -= 1;
    }

    seq.swap(k, i);
    seq[k + 1..].reverse();
    true
}

/// Enumerate every placement of both kings plus `extra_pieces` on the board
/// and collect the ones that are checkmate or stalemate, with either side to
/// move. Placements that cannot come from play are skipped: touching kings,
/// a white pawn left of its start square or past the black king, a black
/// pawn right of its start square or past the white king, and boards where
/// both sides stand in check at once.
pub fn mate_positions(
    extra_pieces: &str,
    find_checkmates: bool,
    find_stalemates: bool,
) -> Vec<EndgameEntry> {
    let mut cells: Vec<u8> = b"Kk".to_vec();
    cells.extend(extra_pieces.bytes());
    assert!(cells.len() <= BOARD_SIZE as usize, "too many pieces for the board");
    cells.resize(BOARD_SIZE as usize, b'.');
    cells.sort_unstable();

    let mut entries = Vec::new();
    loop {
        scan_candidate(&cells, find_checkmates, find_stalemates, &mut entries);
        if !next_permutation(&mut cells) {
            break;
        }
    }
    entries
}

fn scan_candidate(
    cells: &[u8],
    find_checkmates: bool,
    find_stalemates: bool,
    entries: &mut Vec<EndgameEntry>,
) {
    let index_of = |piece: u8| cells.iter().position(|&c| c == piece);
    let (Some(white_king), Some(black_king)) = (index_of(b'K'), index_of(b'k')) else {
        return;
    };

    // Kings can't be adjacent.
    if white_king.abs_diff(black_king) == 1 {
        return;
    }

    // Pawns can't move backwards, and can't have passed the enemy king.
    if let Some(pawn) = index_of(b'P') {
        if pawn < PAWN_START_WHITE as usize || pawn > black_king {
            return;
        }
    }
    if let Some(pawn) = index_of(b'p') {
        if pawn > PAWN_START_BLACK as usize || pawn < white_king {
            return;
        }
    }

    let mut board = Board(0);
    for &cell in cells {
        let Some(code) = defs::piece_to_code(cell as char) else {
            return;
        };
        board = Board((board.0 << 4) | code as u64);
    }

    // Rule out simultaneous check.
    if queries::in_check(board, Color::White) && queries::in_check(board, Color::Black) {
        return;
    }

    for active in [Color::White, Color::Black] {
        let pos = Position { board, active, halfmove: 0, fullmove: 1 };
        let outcome = check_position(&pos);
        let keep = match outcome {
            Outcome::WhiteWin | Outcome::BlackWin => find_checkmates,
            Outcome::Stalemate => find_stalemates,
            _ => false,
        };
        if keep {
            entries.push(EndgameEntry {
                fence: position_to_fence(&pos),
                outcome_code: outcome.code(),
            });
        }
    }
}
