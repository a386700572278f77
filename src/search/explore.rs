// src/search/explore.rs

use std::collections::HashSet;

use crate::game::board::Board;
use crate::game::defs::Color;
use crate::game::moves::{generate_legal_moves, MoveList};

/// Boards reachable in one move of `player`, in generator order.
pub fn next_boards(board: Board, player: Color) -> Vec<Board> {
    let mut moves = MoveList::new();
    generate_legal_moves(board, player, &mut moves);
    moves.iter().map(|&mv| board.apply(mv)).collect()
}

/// Walk the game tree breadth-first from the start position and count the
/// new boards reachable at each ply. Side to move alternates with ply
/// parity, so boards are deduplicated per parity: the same arrangement with
/// the other player to move is a different position.
pub fn explore(max_level: u32) -> Vec<usize> {
    let mut seen_white: HashSet<Board> = HashSet::new();
    let mut seen_black: HashSet<Board> = HashSet::new();
    let mut boards: HashSet<Board> = HashSet::from([Board::START]);
    let mut counts = Vec::new();

    let mut level = 0;
    while !boards.is_empty() && level < max_level {
        let white_to_move = level % 2 == 0;
        let player = if white_to_move { Color::White } else { Color::Black };
        let (seen, seen_next) = if white_to_move {
            (&mut seen_white, &mut seen_black)
        } else {
            (&mut seen_black, &mut seen_white)
        };
        seen.extend(boards.iter().copied());

        let mut next: HashSet<Board> = HashSet::new();
        for &board in &boards {
            for candidate in next_boards(board, player) {
                if !seen_next.contains(&candidate) {
                    next.insert(candidate);
                }
            }
        }

        boards = next;
        level += 1;
        counts.push(boards.len());
    }

    counts
}
