//! Board coordinates and movement directions.
//!
//! ## Coord
//!
//! A `(row, col)` value. Neighbor lookups are unclamped: the neighbor of an
//! edge cell is still a valid `Coord`, just one that lies off the board.
//! Bounds are the board's concern, not the coordinate's.
//!
//! ## Direction
//!
//! The four orthogonal directions. Declaration order (`Up`, `Right`, `Down`,
//! `Left`) is the order in which legal moves are scanned.
//!
//! ```
//! use corner_puzzle::core::{Coord, Direction};
//!
//! let origin = Coord::new(0, 0);
//! assert_eq!(origin.up(), Coord::new(-1, 0));
//! assert_eq!(origin.neighbor(Direction::Right), Coord::new(0, 1));
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! ```

use serde::{Deserialize, Serialize};

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        })
    }
}

/// A cell address on (or off) the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    #[must_use]
    pub const fn up(self) -> Self {
        Self::new(self.row - 1, self.col)
    }

    #[inline]
    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    #[inline]
    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    #[inline]
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// The adjacent coordinate in `direction`.
    #[inline]
    #[must_use]
    pub const fn neighbor(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.up(),
            Direction::Right => self.right(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
