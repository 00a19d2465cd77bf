//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based parent links. Nodes are
//! never removed, so a `NodeId` stays valid for the life of the tree and
//! path reconstruction is a walk over parent handles.

use serde::{Deserialize, Serialize};

use super::node::{MoveSet, NodeId, SearchNode};
use crate::core::{Move, PuzzleState};

/// Arena-based search tree.
///
/// Deserialization checks the arena: the root is node 0, and every other
/// node's parent comes before it with a depth one less.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "TreeArena")]
pub struct SearchTree {
    /// All nodes in the tree.
    nodes: Vec<SearchNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl SearchTree {
    /// Create a tree rooted at `state`, expanding one direction per tile.
    pub fn new(state: PuzzleState) -> Self {
        Self::with_move_set(state, MoveSet::Primary)
    }

    /// Create a tree whose nodes queue moves from `move_set`.
    pub fn with_move_set(state: PuzzleState, move_set: MoveSet) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(SearchNode::root_with(state, move_set));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether node `id` still has untried moves.
    #[must_use]
    pub fn has_next_child(&self, id: NodeId) -> bool {
        self.get(id).has_next_child()
    }

    /// Expand the next untried move of `id` and store the child.
    ///
    /// Returns `None` when nothing is pending or the pending move no longer
    /// checks out; see [`SearchNode::next_child`].
    pub fn next_child(&mut self, id: NodeId) -> Option<NodeId> {
        let child = self.get_mut(id).next_child(id)?;
        Some(self.alloc(child))
    }

    /// Moves from the root to `id`, root first.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.get(id).depth as usize);
        let mut current = id;
        while !current.is_none() {
            let node = self.get(current);
            if let Some(mv) = node.move_taken {
                moves.push(mv);
            }
            current = node.parent;
        }
        moves.reverse();
        moves
    }

    /// Boards from the root to `id`, inclusive, root first.
    #[must_use]
    pub fn states_to(&self, id: NodeId) -> Vec<PuzzleState> {
        let mut states = Vec::with_capacity(self.get(id).depth as usize + 1);
        let mut current = id;
        while !current.is_none() {
            let node = self.get(current);
            states.push(*node.state());
            current = node.parent;
        }
        states.reverse();
        states
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            goal_count: self.nodes.iter().filter(|n| n.state().is_goal()).count(),
            pending_moves: self.nodes.iter().map(|n| n.pending().len()).sum(),
        }
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Unchecked form of a serialized tree.
#[derive(Deserialize)]
struct TreeArena {
    nodes: Vec<SearchNode>,
    root: NodeId,
}

impl TryFrom<TreeArena> for SearchTree {
    type Error = String;

    fn try_from(arena: TreeArena) -> Result<Self, Self::Error> {
        if arena.root != NodeId::new(0) {
            return Err(format!("root must be NodeId(0), got {}", arena.root));
        }
        let Some(root) = arena.nodes.first() else {
            return Err("tree has no nodes".to_string());
        };
        if !root.parent.is_none() || root.depth != 0 {
            return Err("root node has a parent or nonzero depth".to_string());
        }
        for (i, node) in arena.nodes.iter().enumerate().skip(1) {
            let parent = node.parent.raw() as usize;
            if node.parent.is_none() || parent >= i {
                return Err(format!("node {i} has parent {} allocated after it", node.parent));
            }
            if node.depth != arena.nodes[parent].depth + 1 {
                return Err(format!("node {i} has depth {} under parent {}", node.depth, node.parent));
            }
        }
        Ok(Self {
            nodes: arena.nodes,
            root: arena.root,
        })
    }
}

/// Statistics about the search tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u32,

    /// Nodes whose board is solved.
    pub goal_count: usize,

    /// Untried moves left across all nodes.
    pub pending_moves: usize,
}
