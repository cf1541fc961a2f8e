use tracing::debug;

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::draughts::movegen::Move;
use crate::draughts::piece::Piece;
use crate::draughts::rules::Rules;

/// What applying a move did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Coord,
    pub to: Coord,
    /// Removed opponent pieces, in chain order.
    pub captured: Vec<(Coord, Piece)>,
    pub promoted: bool,
}

/// Plays `mv` for the piece on `from`.
///
/// Nothing is validated: `mv` is expected to come from the move generator for this origin.
/// Captured squares are emptied, the origin is emptied and the piece is put on the final
/// landing square; intermediate landings are never occupied.
pub fn apply_move(board: &mut Board, from: Coord, mv: &Move, rules: &Rules) -> MoveOutcome {
    let captured: Vec<(Coord, Piece)> = mv
        .captures()
        .filter_map(|c| board.take(c).map(|p| (c, p)))
        .collect();

    let to = mv.destination(from);
    let mut moving = board.take(from);
    let mut promoted = false;

    if let Some(piece) = moving {
        if rules.promotes(piece, to, board.dimension()) {
            moving = Some(piece.crowned());
            promoted = true;
        }
    }
    board.set(to, moving);

    debug!(
        %from,
        %to,
        captured = captured.len(),
        promoted,
        "applied move"
    );

    MoveOutcome {
        from,
        to,
        captured,
        promoted,
    }
}
