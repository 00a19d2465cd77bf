//! Search tree for brute-force solving.
//!
//! ## Overview
//!
//! - **Nodes** wrap one board snapshot and a queue of untried moves.
//!   `next_child` pops one move and builds the child node.
//! - **Tree** is an arena of nodes. Parents are `NodeId` handles, so a
//!   solution is recovered by walking handles back to the root.
//! - **Solver** is a reference driver (breadth-first or depth-first) that
//!   uses nothing but the node and tree primitives.
//!
//! ## Usage
//!
//! ```rust
//! use corner_puzzle::core::PuzzleState;
//! use corner_puzzle::search::{SearchTree, NodeId};
//!
//! let mut tree = SearchTree::new(PuzzleState::default());
//! let root = tree.root();
//!
//! let mut children: Vec<NodeId> = Vec::new();
//! while tree.has_next_child(root) {
//!     if let Some(child) = tree.next_child(root) {
//!         children.push(child);
//!     }
//! }
//! assert_eq!(children.len(), 2);
//! assert_eq!(tree.path_to(children[0]).len(), 1);
//! ```
//!
//! ```rust,no_run
//! use corner_puzzle::core::PuzzleState;
//! use corner_puzzle::search::{SearchConfig, Solver, Strategy};
//!
//! let config = SearchConfig::default().with_strategy(Strategy::BreadthFirst);
//! let mut solver = Solver::new(config);
//! if let Some(moves) = solver.solve(PuzzleState::default()) {
//!     for mv in moves {
//!         println!("{mv}");
//!     }
//! }
//! ```

pub mod config;
pub mod node;
pub mod solver;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::{SearchConfig, Strategy};
pub use node::{MoveSet, NodeId, PendingMoves, SearchNode};
pub use solver::Solver;
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
