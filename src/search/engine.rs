// src/search/engine.rs

use rand::seq::SliceRandom;

use crate::game::board::{queries, Position};
use crate::game::defs::{self, code, Color};
use crate::game::io::{playback, position_from_fence};
use crate::game::moves::{generate_legal_moves, Move, MoveList};
use crate::game::outcome::{check_position, Outcome};
use crate::search::eval::Score;
use crate::search::search::score_position;

/// Score a FENCE string for its side to move and print the principal
/// variation as a playback. Returns the score and line for callers that want
/// them.
pub fn evaluate_fence(fence: &str, max_depth: u32) -> Result<(Score, Vec<Move>), String> {
    let pos = position_from_fence(fence)?;
    let (score, line) = score_position(pos.active, max_depth, &pos, true);

    println!(
        "[{}] {}{}  (depth={})",
        pos.active.letter(),
        if score > 0 { "+" } else { "" },
        score,
        max_depth
    );
    print!("{}", playback(&pos, &line));
    println!();

    Ok((score, line))
}

fn piece_value(nibble: u8) -> Score {
    match defs::fold(nibble) {
        code::WHITE_PAWN | code::BLACK_PAWN => 1,
        code::WHITE_KNIGHT | code::WHITE_BISHOP => 3,
        code::WHITE_ROOK => 5,
        code::WHITE_QUEEN => 9,
        code::WHITE_KING => 100,
        _ => 0,
    }
}

/// A capture-greedy opponent: shuffle the legal moves, score each by the
/// value of whatever stands on the destination, discounted by the mover's
/// own value when the destination is defended, and play the best.
pub fn greedy_move(pos: &Position) -> Option<Move> {
    let mut list = MoveList::new();
    generate_legal_moves(pos.board, pos.active, &mut list);
    if list.is_empty() {
        return None;
    }

    let mut moves: Vec<Move> = list.iter().copied().collect();
    moves.shuffle(&mut rand::thread_rng());

    let enemy_attacked = queries::attacked_squares(pos.board, !pos.active);
    moves.into_iter().max_by_key(|mv| {
        let origin = piece_value(pos.board.nibble_at(mv.from_sq().0));
        let target = piece_value(pos.board.nibble_at(mv.to_sq().0));
        if mv.to_sq().flag() & enemy_attacked != 0 {
            target - origin
        } else {
            target
        }
    })
}

/// Self-play from `init_pos`: the searcher drives white, the greedy opponent
/// drives black. Prints each position and the final verdict.
pub fn run_game_simulated(init_pos: Position, depth: u32) -> Outcome {
    let mut pos = init_pos;
    loop {
        println!("{}", pos);

        let outcome = check_position(&pos);
        if outcome.is_over() {
            println!("{}", outcome);
            return outcome;
        }

        let chosen = if pos.active == Color::White {
            let (_, line) = score_position(pos.active, depth, &pos, false);
            line.first().copied().or_else(|| greedy_move(&pos))
        } else {
            greedy_move(&pos)
        };

        match chosen {
            Some(mv) => pos = pos.apply(mv),
            // An in-progress position always has a move; bail rather than
            // spin if that invariant ever breaks.
            None => return outcome,
        }
    }
}
