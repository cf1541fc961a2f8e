use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::draughts::movegen::{check_slide, explore_jumps, Move};
use crate::draughts::piece::{Color, Piece};

/// Which capture sequences are offered as moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainPolicy {
    /// Every prefix of a capture sequence is a legal place to stop.
    #[default]
    AnyPrefix,
    /// Only sequences that cannot be continued are offered.
    MaximalOnly,
}

/// Rule options for move generation and application.
///
/// The default keeps the permissive rules: any chain prefix may be played, men are never
/// crowned, and capturing is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub chain_policy: ChainPolicy,
    /// Crown a man whose move ends on the far rank.
    pub promotion: bool,
    /// When any capture is available to the side to move, slides are not offered.
    pub forced_capture: bool,
}

impl Rules {
    /// Tournament-style rules: maximal chains, promotion and compulsory capture.
    pub fn standard() -> Self {
        Self {
            chain_policy: ChainPolicy::MaximalOnly,
            promotion: true,
            forced_capture: true,
        }
    }

    pub fn with_chain_policy(mut self, policy: ChainPolicy) -> Self {
        self.chain_policy = policy;
        self
    }

    pub fn with_promotion(mut self, enabled: bool) -> Self {
        self.promotion = enabled;
        self
    }

    pub fn with_forced_capture(mut self, enabled: bool) -> Self {
        self.forced_capture = enabled;
        self
    }

    /// Legal moves of whatever stands on `at`; empty if the square is empty.
    ///
    /// Panics if `at` is off the board.
    pub fn legal_moves(&self, board: &Board, at: Coord) -> Vec<Move> {
        match board.square(at) {
            Some(piece) => self.legal_moves_for(board, piece, at),
            None => Vec::new(),
        }
    }

    /// Legal moves for `piece` standing on `at`: slides first, then captures, each in
    /// direction order.
    ///
    /// Panics if `at` is off the board.
    pub fn legal_moves_for(&self, board: &Board, piece: Piece, at: Coord) -> Vec<Move> {
        assert!(
            board.contains(at),
            "coord {at} is outside the {n}x{n} board",
            n = board.dimension()
        );
        let mut out = Vec::new();

        for &dir in piece.directions() {
            let to = at + dir;
            if check_slide(board, to) {
                out.push(Move::Slide { to });
            }
        }
        let slides = out.len();

        explore_jumps(board, piece, at, &[], self.chain_policy, &mut out);

        trace!(
            %at,
            ?piece,
            slides,
            jumps = out.len() - slides,
            "generated moves"
        );
        out
    }

    /// Every legal `(origin, move)` for `color`, in board order.
    ///
    /// With `forced_capture`, slides are dropped whenever a capture exists.
    pub fn side_moves(&self, board: &Board, color: Color) -> Vec<(Coord, Move)> {
        let mut out: Vec<(Coord, Move)> = Vec::new();
        for (at, piece) in board.pieces() {
            if piece.color != color {
                continue;
            }
            out.extend(
                self.legal_moves_for(board, piece, at)
                    .into_iter()
                    .map(|mv| (at, mv)),
            );
        }

        if self.forced_capture && out.iter().any(|(_, mv)| mv.is_jump()) {
            out.retain(|(_, mv)| mv.is_jump());
        }
        out
    }

    /// Whether `color` has any capture available anywhere on the board.
    pub fn has_capture(&self, board: &Board, color: Color) -> bool {
        let mut scratch = Vec::new();
        board.pieces().any(|(at, piece)| {
            piece.color == color
                && explore_jumps(board, piece, at, &[], self.chain_policy, &mut scratch)
        })
    }

    /// True if `piece` ending its move on `to` is crowned under these rules.
    #[inline]
    pub fn promotes(&self, piece: Piece, to: Coord, dimension: usize) -> bool {
        self.promotion && !piece.is_king() && to.y == piece.color.far_rank(dimension)
    }
}
