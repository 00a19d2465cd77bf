//! Brute-force solver built on the search tree.
//!
//! Drives a [`SearchTree`] with one of two traversal orders and a visited
//! table keyed by board. Everything it does goes through the node
//! primitives: `has_next_child`, `next_child` and parent-handle walks.

use std::collections::VecDeque;
use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Move, PuzzleState};

use super::config::{SearchConfig, Strategy};
use super::node::{NodeId, SearchNode};
use super::stats::SearchStats;
use super::tree::SearchTree;

/// Solver context.
///
/// Owns the configuration, the tree of the most recent solve, and its
/// statistics.
pub struct Solver {
    /// Search configuration.
    config: SearchConfig,

    /// The search tree of the last call to `solve`.
    tree: Option<SearchTree>,

    /// Search statistics.
    stats: SearchStats,
}

impl Solver {
    /// Create a new solver.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            tree: None,
            stats: SearchStats::default(),
        }
    }

    /// Search for a move sequence taking `start` to a goal board.
    ///
    /// Returns an empty sequence if `start` is already solved, and `None`
    /// if the search space (within the depth and node limits) holds no goal.
    pub fn solve(&mut self, start: PuzzleState) -> Option<Vec<Move>> {
        let started = Instant::now();
        self.stats.reset();
        log::debug!(
            "solving {start} with {:?}, max_depth {}, max_nodes {}, {:?} moves",
            self.config.strategy,
            self.config.max_depth,
            self.config.max_nodes,
            self.config.move_set
        );

        let mut tree = SearchTree::with_move_set(start, self.config.move_set);
        let found = if start.is_goal() {
            Some(tree.root())
        } else {
            match self.config.strategy {
                Strategy::BreadthFirst => self.breadth_first(&mut tree),
                Strategy::DepthFirst => self.depth_first(&mut tree),
            }
        };
        let solution = found.map(|id| tree.path_to(id));

        self.stats.time_us = started.elapsed().as_micros() as u64;
        match &solution {
            Some(moves) => log::debug!(
                "solved in {} moves after {} expansions",
                moves.len(),
                self.stats.nodes_expanded
            ),
            None => log::debug!(
                "no solution after {} expansions ({} nodes)",
                self.stats.nodes_expanded,
                tree.len()
            ),
        }

        self.tree = Some(tree);
        solution
    }

    /// Get the search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the tree built by the last search.
    #[must_use]
    pub fn tree(&self) -> Option<&SearchTree> {
        self.tree.as_ref()
    }

    /// Take the next child of `id`, counting it in the statistics.
    fn expand(&mut self, tree: &mut SearchTree, id: NodeId) -> Option<SearchNode> {
        let child = tree.get_mut(id).next_child(id)?;
        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(child.depth);
        log::trace!("{id} -> {child}");
        Some(child)
    }

    fn out_of_nodes(&self, tree: &SearchTree) -> bool {
        if tree.len() >= self.config.max_nodes {
            log::debug!("node limit {} reached", self.config.max_nodes);
            true
        } else {
            false
        }
    }

    fn breadth_first(&mut self, tree: &mut SearchTree) -> Option<NodeId> {
        let mut visited = FxHashSet::default();
        visited.insert(*tree.root_node().state());
        let mut frontier = VecDeque::from([tree.root()]);

        while let Some(id) = frontier.pop_front() {
            if !self.config.allows_expansion(tree.get(id).depth) {
                continue;
            }
            while tree.has_next_child(id) {
                if self.out_of_nodes(tree) {
                    return None;
                }
                let Some(child) = self.expand(tree, id) else {
                    continue;
                };
                if child.state().is_goal() {
                    return Some(tree.alloc(child));
                }
                if !visited.insert(*child.state()) {
                    self.stats.duplicates += 1;
                    continue;
                }
                frontier.push_back(tree.alloc(child));
            }
        }
        None
    }

    fn depth_first(&mut self, tree: &mut SearchTree) -> Option<NodeId> {
        // Shallowest depth each board has been reached at. A board reached
        // again at a smaller depth is searched again, so the depth bound
        // never hides a solution.
        let mut visited: FxHashMap<PuzzleState, u32> = FxHashMap::default();
        visited.insert(*tree.root_node().state(), 0);
        let mut stack = vec![tree.root()];

        while let Some(&id) = stack.last() {
            let node = tree.get(id);
            if !self.config.allows_expansion(node.depth) || !node.has_next_child() {
                stack.pop();
                continue;
            }
            if self.out_of_nodes(tree) {
                return None;
            }
            let Some(child) = self.expand(tree, id) else {
                continue;
            };
            if child.state().is_goal() {
                return Some(tree.alloc(child));
            }
            match visited.get(child.state()) {
                Some(&seen) if seen <= child.depth => {
                    self.stats.duplicates += 1;
                    continue;
                }
                _ => {
                    visited.insert(*child.state(), child.depth);
                }
            }
            stack.push(tree.alloc(child));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Direction, Tile};
    use crate::search::node::MoveSet;

    fn goal() -> PuzzleState {
        PuzzleState::new(&[(1, 1), (0, 0), (0, 2), (2, 0), (2, 2)].map(Coord::from)).unwrap()
    }

    fn one_move_away() -> PuzzleState {
        goal().moved(Tile::BottomRight, Direction::Right)
    }

    #[test]
    fn test_goal_start_is_empty_solution() {
        let mut solver = Solver::new(SearchConfig::default());

        assert_eq!(solver.solve(goal()), Some(vec![]));
        assert_eq!(solver.stats().nodes_expanded, 0);
        assert_eq!(solver.tree().unwrap().len(), 1);
    }

    #[test]
    fn test_bfs_one_move() {
        let mut solver = Solver::new(SearchConfig::default());

        let solution = solver.solve(one_move_away()).unwrap();

        assert_eq!(solution, vec![Move::new(Tile::BottomRight, Direction::Left)]);
        assert!(solver.stats().nodes_expanded >= 1);
        assert_eq!(solver.stats().max_depth, 1);
    }

    #[test]
    fn test_dfs_one_move_with_depth_bound() {
        let config = SearchConfig::default()
            .with_strategy(Strategy::DepthFirst)
            .with_max_depth(1);
        let mut solver = Solver::new(config);

        let solution = solver.solve(one_move_away()).unwrap();

        assert_eq!(solution, vec![Move::new(Tile::BottomRight, Direction::Left)]);
    }

    #[test]
    fn test_dfs_solution_replays_to_goal() {
        let config = SearchConfig::default()
            .with_strategy(Strategy::DepthFirst)
            .with_max_depth(6);
        let mut solver = Solver::new(config);

        let solution = solver.solve(one_move_away()).unwrap();

        assert!(!solution.is_empty());
        assert!(solution.len() <= 6);
        let end = solution
            .iter()
            .fold(one_move_away(), |state, &mv| state.apply(mv));
        assert!(end.is_goal());
    }

    #[test]
    fn test_depth_bound_limits_solution() {
        // A bound of one move cannot solve a two-move position
        let start = one_move_away().moved(Tile::TopRight, Direction::Right);
        let config = SearchConfig::default()
            .with_move_set(MoveSet::Exhaustive)
            .with_max_depth(1);

        let mut solver = Solver::new(config);
        assert_eq!(solver.solve(start), None);

        let mut solver = Solver::new(SearchConfig::default().with_move_set(MoveSet::Exhaustive));
        let solution = solver.solve(start).unwrap();
        assert_eq!(solution.len(), 2);
    }

    #[test]
    fn test_node_limit() {
        let config = SearchConfig::default().with_max_nodes(1);
        let mut solver = Solver::new(config);

        assert_eq!(solver.solve(one_move_away()), None);
        assert_eq!(solver.tree().unwrap().len(), 1);
    }

    #[test]
    fn test_tree_is_kept() {
        let mut solver = Solver::new(SearchConfig::default());
        assert!(solver.tree().is_none());

        solver.solve(one_move_away());

        let tree = solver.tree().unwrap();
        assert_eq!(*tree.root_node().state(), one_move_away());
        assert!(tree.stats().goal_count >= 1);
    }
}
