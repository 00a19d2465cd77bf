//! Solver statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a solve.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Child nodes produced by expansion, duplicates included.
    pub nodes_expanded: u64,

    /// Children discarded because their board was already visited.
    pub duplicates: u64,

    /// Maximum depth reached during search.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate node expansions per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of expansions that hit an already visited board.
    #[must_use]
    pub fn duplicate_ratio(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.duplicates as f64 / self.nodes_expanded as f64
        }
    }
}
