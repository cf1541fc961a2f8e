//! Opening position and the plain-text board diagram format.
//!
//! A diagram has one line per row, top row first, one character per square:
//! `.` or `-` for empty, `b`/`B` for a black man/king and `w`/`W` for a white man/king.
//! Spaces inside a line are ignored and blank lines are skipped. Errors name the offending
//! text line, counted from zero with blank lines included.

use std::fmt;

use crate::core::board::{Board, MAX_DIMENSION};
use crate::core::coord::Coord;
use crate::draughts::piece::{Color, Piece};
use crate::error::{EngineError, EngineResult};

pub const DEFAULT_DIMENSION: usize = 10;
pub const DEFAULT_ROWS_PER_SIDE: usize = 3;

/// Smallest board that still leaves a gap between two one-row armies.
pub const MIN_DIMENSION: usize = 4;

pub fn validate(dimension: usize, rows_per_side: usize) -> EngineResult<()> {
    if dimension < MIN_DIMENSION {
        return Err(EngineError::InvalidLayout {
            reason: format!("dimension {dimension} is below the minimum of {MIN_DIMENSION}"),
        });
    }
    if dimension > MAX_DIMENSION {
        return Err(EngineError::InvalidLayout {
            reason: format!("dimension {dimension} is above the maximum of {MAX_DIMENSION}"),
        });
    }
    if rows_per_side == 0 {
        return Err(EngineError::InvalidLayout {
            reason: "each side needs at least one row of men".to_string(),
        });
    }
    if !matches!(rows_per_side.checked_mul(2), Some(both) if both < dimension) {
        return Err(EngineError::InvalidLayout {
            reason: format!(
                "{rows_per_side} rows per side leave no empty row on a {dimension}x{dimension} board"
            ),
        });
    }
    Ok(())
}

/// Black men on the playable squares of the top `rows_per_side` rows, white men on the bottom
/// ones.
pub fn opening_board(dimension: usize, rows_per_side: usize) -> EngineResult<Board> {
    validate(dimension, rows_per_side)?;

    let mut board = Board::empty(dimension);
    let n = dimension as i32;
    let rows = rows_per_side as i32;

    for y in 0..n {
        let color = if y < rows {
            Color::Black
        } else if y >= n - rows {
            Color::White
        } else {
            continue;
        };
        for x in 0..n {
            let c = Coord::new(x, y);
            if c.is_playable() {
                board.place(c, Piece::man(color));
            }
        }
    }

    Ok(board)
}

impl Board {
    pub fn from_diagram(text: &str) -> EngineResult<Board> {
        let rows: Vec<(usize, Vec<char>)> = text
            .lines()
            .enumerate()
            .map(|(line, l)| {
                let squares = l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
                (line, squares)
            })
            .filter(|(_, r)| !r.is_empty())
            .collect();

        let n = rows.len();
        if n == 0 {
            return Err(EngineError::Diagram {
                row: 0,
                reason: "diagram has no rows".to_string(),
            });
        }

        if n > MAX_DIMENSION {
            return Err(EngineError::Diagram {
                row: rows[MAX_DIMENSION].0,
                reason: format!("more than {MAX_DIMENSION} rows"),
            });
        }

        let mut board = Board::empty(n);
        for (y, (line, row)) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(EngineError::Diagram {
                    row: *line,
                    reason: format!("expected {n} squares, found {}", row.len()),
                });
            }
            for (x, &ch) in row.iter().enumerate() {
                match ch {
                    '.' | '-' => {}
                    _ => {
                        let piece = Piece::from_symbol(ch).ok_or_else(|| EngineError::Diagram {
                            row: *line,
                            reason: format!("unknown square symbol {ch:?}"),
                        })?;
                        board.place(Coord::new(x as i32, y as i32), piece);
                    }
                }
            }
        }
        Ok(board)
    }

    pub fn to_diagram(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension() as i32;
        for y in 0..n {
            for x in 0..n {
                let ch = self.square(Coord::new(x, y)).map_or('.', Piece::symbol);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
