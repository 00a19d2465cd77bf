//! Core puzzle types: coordinates, directions, tiles, board state, errors.
//!
//! Everything here is plain `Copy` data. Nothing in the core allocates
//! per-move or shares mutable state, so states can be freely copied into
//! search nodes and handed across threads.

pub mod coord;
pub mod tile;
pub mod error;
pub mod state;

pub use coord::{Coord, Direction};
pub use tile::{Move, Tile, TILE_COUNT};
pub use error::ConfigError;
pub use state::{Footprint, LegalMoves, MoveList, PuzzleState, BOARD_HEIGHT, BOARD_WIDTH};
