use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::draughts::layout::{self, DEFAULT_DIMENSION, DEFAULT_ROWS_PER_SIDE};
use crate::draughts::piece::Color;
use crate::draughts::rules::Rules;
use crate::error::{EngineError, EngineResult};

/// Game configuration.
///
/// Can be built in code with the `with_*` methods or read from JSON, where every field is
/// optional:
///
/// ```json
/// { "dimension": 8, "rows_per_side": 3, "rules": { "chain_policy": "maximal_only" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub dimension: usize,
    pub rows_per_side: usize,
    pub first_to_move: Color,
    pub rules: Rules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            rows_per_side: DEFAULT_ROWS_PER_SIDE,
            first_to_move: Color::Black,
            rules: Rules::default(),
        }
    }
}

impl GameConfig {
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_rows_per_side(mut self, rows: usize) -> Self {
        self.rows_per_side = rows;
        self
    }

    pub fn with_first_to_move(mut self, color: Color) -> Self {
        self.first_to_move = color;
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn from_json_str(text: &str) -> EngineResult<Self> {
        let cfg: GameConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> EngineResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> EngineResult<()> {
        layout::validate(self.dimension, self.rows_per_side)
    }

    pub fn opening_board(&self) -> EngineResult<Board> {
        layout::opening_board(self.dimension, self.rows_per_side)
    }
}
