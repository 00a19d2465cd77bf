//! Piece identities and directed moves.
//!
//! The board always holds the same five pieces. Each has a fixed role and a
//! fixed index, and every per-piece array in the crate is laid out in this
//! index order.

use serde::{Deserialize, Serialize};

use super::coord::Direction;

/// Number of pieces on the board.
pub const TILE_COUNT: usize = 5;

/// One of the five pieces.
///
/// Ordered by index, so maps keyed by `Tile` iterate from `Square` to
/// `BottomRight`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// The 2×2 block.
    Square = 0,
    /// L-piece open toward the bottom-right.
    TopLeft = 1,
    /// L-piece open toward the bottom-left.
    TopRight = 2,
    /// L-piece open toward the top-right.
    BottomLeft = 3,
    /// L-piece open toward the top-left. Its anchor cell is the notch and is
    /// not part of its footprint.
    BottomRight = 4,
}

impl Tile {
    /// All tiles in index order.
    pub const ALL: [Tile; TILE_COUNT] = [
        Tile::Square,
        Tile::TopLeft,
        Tile::TopRight,
        Tile::BottomLeft,
        Tile::BottomRight,
    ];

    /// Index of this tile (0..5).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a tile by index.
    ///
    /// ```
    /// use corner_puzzle::core::Tile;
    ///
    /// assert_eq!(Tile::from_index(4), Some(Tile::BottomRight));
    /// assert_eq!(Tile::from_index(5), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < TILE_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Single-letter label used when drawing the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Tile::Square => 'S',
            Tile::TopLeft => 'A',
            Tile::TopRight => 'B',
            Tile::BottomLeft => 'C',
            Tile::BottomRight => 'D',
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Tile::Square => "Square",
            Tile::TopLeft => "TopLeft",
            Tile::TopRight => "TopRight",
            Tile::BottomLeft => "BottomLeft",
            Tile::BottomRight => "BottomRight",
        })
    }
}

/// A piece slid one cell in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub tile: Tile,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(tile: Tile, direction: Direction) -> Self {
        Self { tile, direction }
    }

    /// The move that puts the tile back where it was.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.tile, self.direction.opposite())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.tile, self.direction)
    }
}
