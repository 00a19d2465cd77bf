//! # corner-puzzle
//!
//! Board model and search tree for a sliding-tile packing puzzle.
//!
//! A 4×6 board holds one 2×2 square and four L-shaped corner pieces. Pieces
//! slide one cell at a time into free space. The puzzle is solved when all
//! four corners sit flush against the square, one from each diagonal.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: A board is a `Copy` value. Moving a piece yields
//!    a new snapshot; nothing holding an older snapshot sees it change.
//!
//! 2. **Validated Construction**: A `PuzzleState` can only be built from a
//!    layout with five on-board anchors and disjoint footprints. After that
//!    every query is total.
//!
//! 3. **Arena Search Tree**: Search nodes live in a flat arena and refer to
//!    their parent by handle, so paths are rebuilt without shared pointers.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, tiles, board state, errors
//! - `search`: Search nodes, arena tree, configuration, reference solver

pub mod core;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Coord, Direction, LegalMoves, Move, MoveList, PuzzleState, Tile,
    BOARD_HEIGHT, BOARD_WIDTH, TILE_COUNT,
};

pub use crate::search::{
    MoveSet, NodeId, SearchConfig, SearchNode, SearchStats, SearchTree, Solver, Strategy,
    TreeStats,
};
