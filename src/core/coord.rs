use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A board coordinate: `x` is the column, `y` the row, `(0, 0)` the top-left square.
///
/// Coordinates are signed so that stepping off the edge of the board yields a value that
/// bounds checks can reject instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True for the squares pieces stand on.
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.x + self.y).rem_euclid(2) == 1
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"`, e.g. `"2,6"`.
impl FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
        let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in '{s}': {e}"))?;
        let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in '{s}': {e}"))?;
        Ok(Coord::new(x, y))
    }
}

/// Diagonal unit steps toward larger `y` (down the board).
pub const DOWNWARD_STEPS: [Coord; 2] = [Coord { x: -1, y: 1 }, Coord { x: 1, y: 1 }];

/// Diagonal unit steps toward smaller `y` (up the board).
pub const UPWARD_STEPS: [Coord; 2] = [Coord { x: -1, y: -1 }, Coord { x: 1, y: -1 }];

/// All four diagonal steps, in move-generation order: downward first, then upward.
pub const DIAGONAL_STEPS: [Coord; 4] = [
    DOWNWARD_STEPS[0],
    DOWNWARD_STEPS[1],
    UPWARD_STEPS[0],
    UPWARD_STEPS[1],
];
