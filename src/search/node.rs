//! Search node structures.
//!
//! Nodes live in a [`SearchTree`](super::tree::SearchTree) arena and point at
//! their parent with a `NodeId` handle instead of a reference. Each node owns
//! its board snapshot and a queue of moves it has not tried yet.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, Move, PuzzleState};

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Which moves a node queues for expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSet {
    /// One direction per tile, as reported by `PuzzleState::legal_moves`.
    #[default]
    Primary,
    /// Every legal (tile, direction) pair.
    Exhaustive,
}

/// Moves a node has not expanded yet, in ascending tile order.
pub type PendingMoves = SmallVec<[Move; 8]>;

fn pending_moves(state: &PuzzleState, move_set: MoveSet) -> PendingMoves {
    match move_set {
        MoveSet::Primary => state
            .legal_moves()
            .into_iter()
            .map(|(tile, direction)| Move::new(tile, direction))
            .collect(),
        MoveSet::Exhaustive => state.all_legal_moves(),
    }
}

/// A board snapshot in the search tree.
///
/// Equality and hashing look only at the board, so nodes reached by
/// different paths compare equal and can share a visited-set entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    state: PuzzleState,

    /// Untried moves, drained front to back by `next_child`.
    pending: PendingMoves,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Move that led here from the parent (None for root).
    pub move_taken: Option<Move>,

    /// Depth in tree (root = 0).
    pub depth: u32,

    move_set: MoveSet,
}

impl SearchNode {
    /// Create a root node.
    pub fn root(state: PuzzleState) -> Self {
        Self::root_with(state, MoveSet::Primary)
    }

    /// Create a root node queueing moves from `move_set`.
    pub fn root_with(state: PuzzleState, move_set: MoveSet) -> Self {
        Self {
            pending: pending_moves(&state, move_set),
            state,
            parent: NodeId::NONE,
            move_taken: None,
            depth: 0,
            move_set,
        }
    }

    /// Create the node reached from `parent` (stored at `parent_id`) by `mv`.
    ///
    /// `state` is the parent's board with `mv` applied.
    pub fn child(parent: &SearchNode, parent_id: NodeId, mv: Move, state: PuzzleState) -> Self {
        Self {
            pending: pending_moves(&state, parent.move_set),
            state,
            parent: parent_id,
            move_taken: Some(mv),
            depth: parent.depth + 1,
            move_set: parent.move_set,
        }
    }

    /// The board at this node.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Direction of the move that led here.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.move_taken.map(|mv| mv.direction)
    }

    /// Moves not tried yet.
    #[must_use]
    pub fn pending(&self) -> &[Move] {
        &self.pending
    }

    #[must_use]
    pub fn move_set(&self) -> MoveSet {
        self.move_set
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether any untried move remains.
    #[must_use]
    pub fn has_next_child(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take the next untried move and build the resulting child.
    ///
    /// `self_id` is this node's handle and becomes the child's parent. The
    /// move is checked again against this node's board; if that check fails
    /// the move is still consumed and `None` is returned, so callers keep
    /// calling while `has_next_child` holds.
    pub fn next_child(&mut self, self_id: NodeId) -> Option<SearchNode> {
        if self.pending.is_empty() {
            return None;
        }
        let mv = self.pending.remove(0);
        if !self.state.can_move(mv.tile, mv.direction) {
            return None;
        }
        let state = self.state.apply(mv);
        Some(SearchNode::child(self, self_id, mv, state))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for SearchNode {}

impl std::hash::Hash for SearchNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl std::fmt::Display for SearchNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.move_taken {
            Some(mv) => write!(f, "{} {}", mv.direction, self.state),
            None => write!(f, "{}", self.state),
        }
    }
}
