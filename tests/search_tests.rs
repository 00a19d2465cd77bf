//! Search node, tree and solver integration tests.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use corner_puzzle::core::{Coord, Direction, Move, PuzzleState, Tile};
use corner_puzzle::search::{
    MoveSet, NodeId, SearchConfig, SearchNode, SearchTree, Solver, Strategy,
};
use proptest::prelude::*;
use proptest::strategy::Strategy as _;

fn goal() -> PuzzleState {
    PuzzleState::new(&[(1, 1), (0, 0), (0, 2), (2, 0), (2, 2)].map(Coord::from)).unwrap()
}

fn hash_of(node: &SearchNode) -> u64 {
    let mut h = DefaultHasher::new();
    node.hash(&mut h);
    h.finish()
}

fn reachable_state() -> impl proptest::strategy::Strategy<Value = PuzzleState> {
    prop::collection::vec(any::<prop::sample::Index>(), 0..40).prop_map(|picks| {
        picks.into_iter().fold(PuzzleState::default(), |state, pick| {
            let moves = state.all_legal_moves();
            if moves.is_empty() {
                state
            } else {
                state.apply(moves[pick.index(moves.len())])
            }
        })
    })
}

// =============================================================================
// Node draining
// =============================================================================

#[test]
fn test_drain_yields_every_legal_move() {
    let state = PuzzleState::default();
    let k = state.legal_moves().len();
    let mut node = SearchNode::root(state);

    let mut produced = 0;
    for _ in 0..k {
        assert!(node.has_next_child());
        assert!(node.next_child(NodeId::new(0)).is_some());
        produced += 1;
    }

    assert_eq!(produced, k);
    assert!(!node.has_next_child());
    assert!(node.next_child(NodeId::new(0)).is_none());
}

#[test]
fn test_children_are_legal_successors() {
    let state = PuzzleState::new(&[(2, 4), (0, 0), (0, 2), (2, 0), (0, 4)].map(Coord::from)).unwrap();
    let mut node = SearchNode::root(state);

    let mut moves = Vec::new();
    while let Some(child) = node.next_child(NodeId::new(0)) {
        let mv = child.move_taken.unwrap();
        assert_eq!(*child.state(), state.apply(mv));
        moves.push(mv);
    }

    assert_eq!(
        moves,
        vec![
            Move::new(Tile::Square, Direction::Left),
            Move::new(Tile::TopRight, Direction::Down),
            Move::new(Tile::BottomLeft, Direction::Right),
        ]
    );
}

// =============================================================================
// Node equality
// =============================================================================

#[test]
fn test_nodes_equal_by_board_only() {
    let start = PuzzleState::default();
    let root = SearchNode::root(start);

    // Reach the starting board again through a different parent and move
    let down = start.moved(Tile::Square, Direction::Down);
    let mid = SearchNode::child(&root, NodeId::new(0), Move::new(Tile::Square, Direction::Down), down);
    let back = SearchNode::child(&mid, NodeId::new(1), Move::new(Tile::Square, Direction::Up), start);

    assert_eq!(back, root);
    assert_eq!(hash_of(&back), hash_of(&root));
    assert_ne!(back.parent, root.parent);
    assert_ne!(back.move_taken, root.move_taken);

    let mut visited = HashSet::new();
    assert!(visited.insert(root));
    assert!(!visited.insert(back));
    assert!(visited.insert(mid));
}

// =============================================================================
// Tree paths
// =============================================================================

#[test]
fn test_path_walks_to_root() {
    let mut tree = SearchTree::with_move_set(PuzzleState::default(), MoveSet::Exhaustive);
    let mut id = tree.root();
    let mut taken = Vec::new();

    for _ in 0..5 {
        let Some(child) = tree.next_child(id) else { break };
        taken.push(tree.get(child).move_taken.unwrap());
        id = child;
    }

    assert_eq!(tree.path_to(id), taken);
    assert_eq!(tree.get(id).depth as usize, taken.len());

    let states = tree.states_to(id);
    assert_eq!(states.first(), Some(&PuzzleState::default()));
    assert_eq!(states.last(), Some(tree.get(id).state()));
}

// =============================================================================
// Solver
// =============================================================================

#[test]
fn test_bfs_and_dfs_agree_on_short_position() {
    let start = goal()
        .moved(Tile::BottomRight, Direction::Right)
        .moved(Tile::TopRight, Direction::Right);

    let bfs_config = SearchConfig::default().with_move_set(MoveSet::Exhaustive);
    let mut bfs = Solver::new(bfs_config);
    let shortest = bfs.solve(start).unwrap();
    assert_eq!(shortest.len(), 2);

    let dfs_config = SearchConfig::default()
        .with_strategy(Strategy::DepthFirst)
        .with_move_set(MoveSet::Exhaustive)
        .with_max_depth(2);
    let mut dfs = Solver::new(dfs_config);
    let found = dfs.solve(start).unwrap();
    assert_eq!(found.len(), 2);

    for moves in [shortest, found] {
        let end = moves.iter().fold(start, |s, &mv| s.apply(mv));
        assert!(end.is_goal());
    }
}

#[test]
fn test_default_config_solves_starting_layout() {
    let start = PuzzleState::default();
    let mut solver = Solver::new(SearchConfig::default());

    let moves = solver.solve(start).unwrap();

    assert!(!moves.is_empty());
    let mut state = start;
    for mv in &moves {
        assert!(state.can_move(mv.tile, mv.direction), "{mv} from {state}");
        state = state.apply(*mv);
    }
    assert!(state.is_goal());
    assert_eq!(solver.stats().max_depth as usize, moves.len());
}

#[test]
fn test_primary_moves_cannot_solve_starting_layout() {
    // Keeping one direction per tile cuts off every solution
    let config = SearchConfig::default().with_move_set(MoveSet::Primary);
    let mut solver = Solver::new(config);

    assert_eq!(solver.solve(PuzzleState::default()), None);
}

#[test]
fn test_solver_reports_stats() {
    let start = goal().moved(Tile::BottomRight, Direction::Right);
    let mut solver = Solver::new(SearchConfig::default());

    solver.solve(start);

    let stats = solver.stats();
    assert!(stats.nodes_expanded >= 1);
    assert!(stats.duplicate_ratio() <= 1.0);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_primary_drain_count(state in reachable_state()) {
        let k = state.legal_moves().len();
        let mut node = SearchNode::root(state);

        let mut produced = 0;
        while node.has_next_child() {
            prop_assert!(node.next_child(NodeId::new(0)).is_some());
            produced += 1;
        }
        prop_assert_eq!(produced, k);
    }

    #[test]
    fn prop_exhaustive_drain_count(state in reachable_state()) {
        let k = state.all_legal_moves().len();
        let mut node = SearchNode::root_with(state, MoveSet::Exhaustive);

        let mut produced = 0;
        while let Some(child) = node.next_child(NodeId::new(0)) {
            prop_assert_eq!(child.depth, 1);
            produced += 1;
        }
        prop_assert_eq!(produced, k);
    }
}
