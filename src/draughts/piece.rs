use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, DIAGONAL_STEPS, DOWNWARD_STEPS, UPWARD_STEPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Starts on the top rows and moves down the board (+y). Moves first.
    Black,
    /// Starts on the bottom rows and moves up the board (-y).
    White,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row a man of this colour is promoted on, for a board of the given dimension.
    #[inline]
    pub fn far_rank(self, dimension: usize) -> i32 {
        match self {
            Color::Black => dimension as i32 - 1,
            Color::White => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const BLACK_MAN: Piece = Piece::man(Color::Black);
    pub const WHITE_MAN: Piece = Piece::man(Color::White);
    pub const BLACK_KING: Piece = Piece::king(Color::Black);
    pub const WHITE_KING: Piece = Piece::king(Color::White);

    #[inline]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    #[inline]
    pub const fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Rank is irrelevant: any piece of the other colour can be captured.
    #[inline]
    pub fn is_opponent_of(self, other: Piece) -> bool {
        self.color != other.color
    }

    #[inline]
    pub fn crowned(self) -> Self {
        Self::king(self.color)
    }

    /// Diagonal steps this piece may take, for both slides and jumps.
    #[inline]
    pub fn directions(self) -> &'static [Coord] {
        match (self.rank, self.color) {
            (Rank::King, _) => &DIAGONAL_STEPS,
            (Rank::Man, Color::Black) => &DOWNWARD_STEPS,
            (Rank::Man, Color::White) => &UPWARD_STEPS,
        }
    }

    /// Single-character tag used by board diagrams.
    pub fn symbol(self) -> char {
        match (self.color, self.rank) {
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::King) => 'W',
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            'b' => Some(Piece::BLACK_MAN),
            'B' => Some(Piece::BLACK_KING),
            'w' => Some(Piece::WHITE_MAN),
            'W' => Some(Piece::WHITE_KING),
            _ => None,
        }
    }
}
