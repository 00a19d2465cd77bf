//! Errors raised when building a board.

use super::coord::Coord;
use super::tile::{Tile, TILE_COUNT};

/// An invalid piece layout.
///
/// Only ever produced by board construction. Once a `PuzzleState` exists it
/// is valid, and no later operation can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Not exactly one anchor per piece.
    WrongPieceCount { found: usize },
    /// A piece's anchor lies outside the board.
    OffBoard { tile: Tile, position: Coord },
    /// Two footprints share a cell.
    Overlap { first: Tile, second: Tile, cell: Coord },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::WrongPieceCount { found } => {
                write!(f, "expected {TILE_COUNT} piece positions, got {found}")
            }
            ConfigError::OffBoard { tile, position } => {
                write!(f, "{tile} anchor {position} is off the board")
            }
            ConfigError::Overlap { first, second, cell } => {
                write!(f, "{first} and {second} both cover {cell}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
