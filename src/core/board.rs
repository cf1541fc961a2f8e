use crate::core::coord::Coord;
use crate::draughts::piece::{Color, Piece};

/// Largest supported board side.
pub const MAX_DIMENSION: usize = 64;

/// A square grid of `dimension * dimension` squares, stored row-major.
///
/// Each square is either empty (`None`) or holds exactly one piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    squares: Vec<Option<Piece>>,
}

impl Board {
    pub fn empty(dimension: usize) -> Self {
        assert!(
            (1..=MAX_DIMENSION).contains(&dimension),
            "board dimension {dimension} is outside 1..={MAX_DIMENSION}"
        );
        Self {
            dimension,
            squares: vec![None; dimension * dimension],
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        let n = self.dimension as i32;
        c.x >= 0 && c.y >= 0 && c.x < n && c.y < n
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.y as usize * self.dimension + c.x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn checked_index(&self, c: Coord) -> usize {
        self.index(c).unwrap_or_else(|| {
            panic!(
                "coord {c} is outside the {n}x{n} board",
                n = self.dimension
            )
        })
    }

    /// Contents of an in-bounds square.
    ///
    /// Panics if `c` is off the board; use [`Board::get`] to probe.
    #[inline]
    pub fn square(&self, c: Coord) -> Option<Piece> {
        self.squares[self.checked_index(c)]
    }

    /// Contents of `c`, or `None` if it is empty or off the board.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Piece> {
        self.index(c).and_then(|i| self.squares[i])
    }

    /// In bounds and unoccupied.
    #[inline]
    pub fn is_vacant(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| self.squares[i].is_none())
    }

    pub fn set(&mut self, c: Coord, content: Option<Piece>) {
        let i = self.checked_index(c);
        self.squares[i] = content;
    }

    pub fn place(&mut self, c: Coord, piece: Piece) {
        self.set(c, Some(piece));
    }

    /// Empties `c`, returning whatever stood there.
    pub fn take(&mut self, c: Coord) -> Option<Piece> {
        let i = self.checked_index(c);
        self.squares[i].take()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        let n = self.dimension;
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(i, sq)| {
                sq.map(|p| (Coord::new((i % n) as i32, (i / n) as i32), p))
            })
    }

    pub fn count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.color == color)
            .count()
    }
}
