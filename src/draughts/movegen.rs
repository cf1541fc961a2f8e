//! Slide and jump generation for a single piece.
//!
//! Generation never mutates the board: jumped pieces stay where they are and the moving piece
//! still occupies its origin until the move is applied.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::draughts::piece::Piece;
use crate::draughts::rules::ChainPolicy;

/// One hop of a capture sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    /// Square of the opponent piece being removed.
    pub capture: Coord,
    /// Empty square the piece lands on.
    pub landing: Coord,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Move {
    Slide { to: Coord },
    /// Consecutive captures; the landing of each hop is the origin of the next.
    Jump { chain: Vec<Jump> },
}

impl Move {
    #[inline]
    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }

    /// Square the piece ends on when the move starts at `from`.
    pub fn destination(&self, from: Coord) -> Coord {
        match self {
            Move::Slide { to } => *to,
            Move::Jump { chain } => chain.last().map_or(from, |j| j.landing),
        }
    }

    pub fn captures(&self) -> impl Iterator<Item = Coord> + '_ {
        let chain: &[Jump] = match self {
            Move::Slide { .. } => &[],
            Move::Jump { chain } => chain,
        };
        chain.iter().map(|j| j.capture)
    }

    pub fn capture_count(&self) -> usize {
        match self {
            Move::Slide { .. } => 0,
            Move::Jump { chain } => chain.len(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Slide { to } => write!(f, "slide to {to}"),
            Move::Jump { chain } => {
                f.write_str("jump")?;
                for (i, j) in chain.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{sep}over {} to {}", j.capture, j.landing)?;
                }
                Ok(())
            }
        }
    }
}

/// A slide onto `to` is legal iff the square is on the board and empty.
///
/// Direction filtering is the caller's job.
#[inline]
pub fn check_slide(board: &Board, to: Coord) -> bool {
    board.is_vacant(to)
}

/// Depth-first search for capture sequences of `piece` standing at `at`.
///
/// `chain` holds the hops already taken in this sequence; each accepted hop extends a private
/// copy of it, so sibling branches never share a capture list. Under
/// [`ChainPolicy::AnyPrefix`] every sequence is emitted before its continuations; under
/// [`ChainPolicy::MaximalOnly`] only sequences with no continuation are emitted.
///
/// Returns whether at least one hop was possible from `at`.
pub fn explore_jumps(
    board: &Board,
    piece: Piece,
    at: Coord,
    chain: &[Jump],
    policy: ChainPolicy,
    out: &mut Vec<Move>,
) -> bool {
    let mut extended = false;

    for &dir in piece.directions() {
        let capture = at + dir;
        let landing = at + dir * 2;

        if !board.is_vacant(landing) {
            continue;
        }
        match board.get(capture) {
            Some(victim) if victim.is_opponent_of(piece) => {}
            _ => continue,
        }
        // Jumped pieces are only lifted once the move is applied.
        if chain.iter().any(|j| j.capture == capture) {
            continue;
        }

        extended = true;

        let mut next = chain.to_vec();
        next.push(Jump { capture, landing });

        if policy == ChainPolicy::AnyPrefix {
            out.push(Move::Jump {
                chain: next.clone(),
            });
        }
        let continued = explore_jumps(board, piece, landing, &next, policy, out);
        if policy == ChainPolicy::MaximalOnly && !continued {
            out.push(Move::Jump { chain: next });
        }
    }

    extended
}
