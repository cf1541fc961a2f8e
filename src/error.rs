//! Error types for the draughts engine.

use thiserror::Error;

use crate::core::coord::Coord;
use crate::draughts::piece::Color;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("square {coord} is outside the {dimension}x{dimension} board")]
    OutOfBounds { coord: Coord, dimension: usize },

    #[error("no piece on square {coord}")]
    EmptySquare { coord: Coord },

    #[error("piece on {coord} belongs to {found}, but {expected} is to move")]
    WrongSide {
        coord: Coord,
        expected: Color,
        found: Color,
    },

    #[error("illegal move from {from}: {reason}")]
    IllegalMove { from: Coord, reason: String },

    #[error("game is already over")]
    GameOver,

    #[error("invalid layout: {reason}")]
    InvalidLayout { reason: String },

    #[error("bad diagram at row {row}: {reason}")]
    Diagram { row: usize, reason: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
