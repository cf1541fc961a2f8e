//! Move-path enumeration ("perft").
//!
//! Counts the positions reachable in exactly `depth` plies by playing every legal move of the
//! side to move. Finished games are leaves: they contribute nothing below their own depth.

use crate::core::coord::Coord;
use crate::draughts::movegen::Move;
use crate::game::Game;

pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if game.is_over() {
        return 0;
    }

    let moves = game.side_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|(from, mv)| {
            let mut next = game.clone();
            next.commit(*from, mv);
            perft(&next, depth - 1)
        })
        .sum()
}

/// Per-move breakdown of [`perft`] at the root.
pub fn divide(game: &Game, depth: u32) -> Vec<(Coord, Move, u64)> {
    if depth == 0 || game.is_over() {
        return Vec::new();
    }

    game.side_moves()
        .into_iter()
        .map(|(from, mv)| {
            let mut next = game.clone();
            next.commit(from, &mv);
            let nodes = perft(&next, depth - 1);
            (from, mv, nodes)
        })
        .collect()
}
