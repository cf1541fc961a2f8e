use tracing::{debug, info};

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::draughts::apply::{apply_move, MoveOutcome};
use crate::draughts::config::GameConfig;
use crate::draughts::movegen::Move;
use crate::draughts::piece::Color;
use crate::draughts::rules::Rules;
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Won(Color),
}

/// One game: the board, the rules it is played under, whose turn it is and whether it is over.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rules: Rules,
    turn: Color,
    winner: Option<Color>,
}

impl Game {
    /// A game in the opening position described by `config`.
    pub fn new(config: &GameConfig) -> EngineResult<Self> {
        let board = config.opening_board()?;
        Ok(Self::from_board(board, config.rules, config.first_to_move))
    }

    /// A game continuing from an arbitrary position.
    pub fn from_board(board: Board, rules: Rules, turn: Color) -> Self {
        Self {
            board,
            rules,
            turn,
            winner: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// `(black, white)` piece counts, kings included.
    pub fn piece_counts(&self) -> (usize, usize) {
        (
            self.board.count(Color::Black),
            self.board.count(Color::White),
        )
    }

    /// Legal moves for the piece on `at`, whoever owns it. An empty square has none.
    pub fn legal_moves(&self, at: Coord) -> EngineResult<Vec<Move>> {
        self.ensure_on_board(at)?;
        Ok(self.rules.legal_moves(&self.board, at))
    }

    /// Every legal `(origin, move)` for the side to move.
    pub fn side_moves(&self) -> Vec<(Coord, Move)> {
        self.rules.side_moves(&self.board, self.turn)
    }

    /// Applies `mv` to the piece on `from` without any validation.
    pub fn apply_move(&mut self, from: Coord, mv: &Move) -> MoveOutcome {
        apply_move(&mut self.board, from, mv, &self.rules)
    }

    /// Hands the move to the other side, unconditionally.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.other();
    }

    /// Declares a winner once one side has no pieces left.
    ///
    /// White is checked first, so an (unreachable) empty board counts as a black win. Once the
    /// game is over the recorded result is returned as is.
    pub fn check_victory(&mut self) -> GameResult {
        if let Some(winner) = self.winner {
            return GameResult::Won(winner);
        }

        let (black, white) = self.piece_counts();
        let winner = if white == 0 {
            Color::Black
        } else if black == 0 {
            Color::White
        } else {
            return GameResult::Ongoing;
        };

        info!(%winner, "game over");
        self.winner = Some(winner);
        GameResult::Won(winner)
    }

    /// Applies a move, passes the turn and checks for a winner. No validation.
    pub fn commit(&mut self, from: Coord, mv: &Move) -> MoveOutcome {
        let outcome = self.apply_move(from, mv);
        self.advance_turn();
        self.check_victory();
        outcome
    }

    /// Validates `mv` against the move generator, then commits it.
    pub fn play(&mut self, from: Coord, mv: &Move) -> EngineResult<MoveOutcome> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        self.ensure_on_board(from)?;

        let piece = self
            .board
            .square(from)
            .ok_or(EngineError::EmptySquare { coord: from })?;
        if piece.color != self.turn {
            return Err(EngineError::WrongSide {
                coord: from,
                expected: self.turn,
                found: piece.color,
            });
        }

        let legal = self.rules.legal_moves_for(&self.board, piece, from);
        if !legal.contains(mv) {
            return Err(EngineError::IllegalMove {
                from,
                reason: format!("{mv} is not one of the {} legal moves", legal.len()),
            });
        }
        if self.rules.forced_capture
            && !mv.is_jump()
            && self.rules.has_capture(&self.board, self.turn)
        {
            return Err(EngineError::IllegalMove {
                from,
                reason: "a capture is available".to_string(),
            });
        }

        debug!(turn = %self.turn, %from, %mv, "playing");
        Ok(self.commit(from, mv))
    }

    fn ensure_on_board(&self, at: Coord) -> EngineResult<()> {
        if self.board.contains(at) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                coord: at,
                dimension: self.board.dimension(),
            })
        }
    }
}
