//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use super::node::MoveSet;

/// Order in which the solver expands nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// FIFO frontier; the first solution found is a shortest one.
    #[default]
    BreadthFirst,
    /// Stack with backtracking, bounded by `max_depth`.
    DepthFirst,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth" | "depth-first" => Ok(Strategy::DepthFirst),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

/// Solver configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Expansion order.
    pub strategy: Strategy,

    /// Maximum solution length (0 = unlimited).
    pub max_depth: u32,

    /// Maximum nodes to allocate in the tree.
    /// Prevents memory exhaustion on large searches.
    pub max_nodes: usize,

    /// Which moves each node queues for expansion.
    /// Defaults to every legal move; the one-direction-per-tile set cannot
    /// reach a solution from the starting layout.
    pub move_set: MoveSet,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::BreadthFirst,
            max_depth: 0,
            max_nodes: 1_000_000,
            move_set: MoveSet::Exhaustive,
        }
    }
}

impl SearchConfig {
    /// Read overrides from `PUZZLE_STRATEGY`, `PUZZLE_MAX_DEPTH`,
    /// `PUZZLE_MAX_NODES` and `PUZZLE_ALL_MOVES`, starting from the defaults.
    ///
    /// Values that fail to parse are logged and skipped.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup("PUZZLE_STRATEGY") {
            match value.parse() {
                Ok(strategy) => self.strategy = strategy,
                Err(err) => log::warn!("ignoring PUZZLE_STRATEGY: {err}"),
            }
        }
        if let Some(value) = lookup("PUZZLE_MAX_DEPTH") {
            match value.parse() {
                Ok(depth) => self.max_depth = depth,
                Err(err) => log::warn!("ignoring PUZZLE_MAX_DEPTH={value}: {err}"),
            }
        }
        if let Some(value) = lookup("PUZZLE_MAX_NODES") {
            match value.parse() {
                Ok(nodes) => self.max_nodes = nodes,
                Err(err) => log::warn!("ignoring PUZZLE_MAX_NODES={value}: {err}"),
            }
        }
        if let Some(value) = lookup("PUZZLE_ALL_MOVES") {
            match value.as_str() {
                "1" | "true" | "yes" => self.move_set = MoveSet::Exhaustive,
                "0" | "false" | "no" => self.move_set = MoveSet::Primary,
                _ => log::warn!("ignoring PUZZLE_ALL_MOVES={value}"),
            }
        }
        self
    }

    /// Set the expansion order.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the maximum solution length.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the node allocation limit.
    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Set which moves nodes queue.
    pub fn with_move_set(mut self, move_set: MoveSet) -> Self {
        self.move_set = move_set;
        self
    }

    /// Whether a node at `depth` may still be expanded.
    #[must_use]
    pub fn allows_expansion(&self, depth: u32) -> bool {
        self.max_depth == 0 || depth < self.max_depth
    }
}
