// src/search/search.rs

use crate::game::board::Position;
use crate::game::defs::Color;
use crate::game::history::Repetitions;
use crate::game::moves::{generate_legal_moves, Move, MoveList};
use crate::search::eval::{
    definite_score, material_estimate, Score, SCORE_DRAW, SCORE_LOSS, SCORE_WIN,
};

/// Score a position for its side to move by searching `max_depth` plies,
/// returning the score and the principal variation. `find_shortest_line`
/// trades speed for the shortest line among equally scored ones; with it off
/// the search may return any optimal line but can abort a subtree as soon as
/// a forced win appears.
pub fn score_position(
    root: Color,
    max_depth: u32,
    pos: &Position,
    find_shortest_line: bool,
) -> (Score, Vec<Move>) {
    score_position_with_history(root, max_depth, pos, find_shortest_line, &Repetitions::new())
}

/// Like `score_position`, with the boards already seen in the game so far.
/// Threefold repetition is evaluated against this map inside the search.
pub fn score_position_with_history(
    root: Color,
    max_depth: u32,
    pos: &Position,
    find_shortest_line: bool,
    seen: &Repetitions,
) -> (Score, Vec<Move>) {
    score_node(
        root,
        max_depth,
        pos,
        SCORE_LOSS - 1,
        SCORE_WIN + 1,
        0,
        &[],
        seen,
        find_shortest_line,
    )
}

#[allow(clippy::too_many_arguments)]
fn score_node(
    root: Color,
    max_depth: u32,
    pos: &Position,
    mut alpha: Score,
    mut beta: Score,
    depth: u32,
    line: &[Move],
    seen: &Repetitions,
    find_shortest_line: bool,
) -> (Score, Vec<Move>) {
    // Draw by threefold repetition of boards seen along the path.
    if seen.is_threefold(pos.board) {
        return (SCORE_DRAW, line.to_vec());
    }

    // Game over by any other means.
    if let Some(score) = definite_score(root, pos) {
        return (score, line.to_vec());
    }

    // At the horizon, fall back to the material estimate.
    if depth == max_depth {
        return (material_estimate(root, pos.board), line.to_vec());
    }

    let mut moves = MoveList::new();
    generate_legal_moves(pos.board, pos.active, &mut moves);
    debug_assert!(!moves.is_empty(), "in-progress position has no moves");

    let maximizing = pos.active == root;
    let mut best_score = if maximizing { SCORE_LOSS - 1 } else { SCORE_WIN + 1 };
    let mut best_line: Vec<Move> = Vec::new();

    for &mv in moves.iter() {
        let child = pos.apply(mv);

        let mut child_line = line.to_vec();
        child_line.push(mv);

        // The child sees this board once more on its path.
        let mut child_seen = seen.clone();
        child_seen.bump(pos.board);

        let (score, pv) = score_node(
            root,
            max_depth,
            &child,
            alpha,
            beta,
            depth + 1,
            &child_line,
            &child_seen,
            find_shortest_line,
        );
        let pv_len = pv.len();

        if maximizing {
            if score > best_score
                || (find_shortest_line && score == best_score && pv_len < best_line.len())
            {
                best_score = score;
                best_line = pv;
            }
            // Prune, unless this line is a shorter route to the same score.
            if best_score >= beta && (!find_shortest_line || pv_len >= best_line.len()) {
                break;
            }
            alpha = alpha.max(best_score);
            if !find_shortest_line && best_score == SCORE_WIN {
                return (best_score, best_line);
            }
        } else {
            if score < best_score
                || (find_shortest_line && score == best_score && pv_len < best_line.len())
            {
                best_score = score;
                best_line = pv;
            }
            if best_score <= alpha && (!find_shortest_line || pv_len >= best_line.len()) {
                break;
            }
            beta = beta.min(best_score);
            if !find_shortest_line && best_score == SCORE_LOSS {
                return (best_score, best_line);
            }
        }
    }

    (best_score, best_line)
}
