//! Search tree nodes
//!
//! Nodes live in the arena owned by [`crate::mcts::tree::SearchTree`] and refer to
//! each other by [`NodeId`]. A node owns its children through the id map; the parent
//! link is a plain id used only for backpropagation and UCT's parent-visit term.

use crate::game::board::{Board, BoardKey, Move};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Index of a node in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A visited position
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Board snapshot of this position
    pub board: Board,

    /// Number of iterations that went through this node
    pub visits: u32,

    /// Cumulative score, credited to the player who moved into this node
    pub score: f64,

    /// Children keyed by their full (x, o) board key
    pub children: BTreeMap<BoardKey, NodeId>,

    /// Parent link, `None` for the root
    pub parent: Option<NodeId>,

    /// Move that led here from the parent
    pub last_move: Option<Move>,
}

impl SearchNode {
    pub fn new_root(board: Board) -> Self {
        Self {
            board,
            visits: 0,
            score: 0.0,
            children: BTreeMap::new(),
            parent: None,
            last_move: None,
        }
    }

    pub fn new_child(board: Board, parent: NodeId, last_move: Move) -> Self {
        Self {
            board,
            visits: 0,
            score: 0.0,
            children: BTreeMap::new(),
            parent: Some(parent),
            last_move: Some(last_move),
        }
    }

    /// Average score, 0 for an unvisited node
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / self.visits as f64
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visits > 0
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// UCT value seen from the parent:
    /// `score / visits + sqrt(exploration * ln(parent_visits) / visits)`.
    ///
    /// Only defined for visited nodes; selection never calls it otherwise.
    pub fn uct_score(&self, parent_visits: u32, exploration: f64) -> f64 {
        debug_assert!(self.visits > 0, "UCT evaluated on an unvisited node");
        let visits = self.visits as f64;
        let parent_visits = (parent_visits.max(1)) as f64;
        self.score / visits + (exploration * parent_visits.ln() / visits).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{create_board_empty, MOVES};

    #[test]
    fn test_new_root() {
        let node = SearchNode::new_root(create_board_empty());
        assert_eq!(node.visits, 0);
        assert_eq!(node.score, 0.0);
        assert!(node.is_leaf());
        assert!(node.parent.is_none());
        assert!(node.last_move.is_none());
        assert_eq!(node.win_rate(), 0.0);
    }

    #[test]
    fn test_win_rate() {
        let mut node = SearchNode::new_child(create_board_empty(), NodeId(0), MOVES[4]);
        node.visits = 10;
        node.score = 7.5;
        assert!((node.win_rate() - 0.75).abs() < 1e-9);
        assert_eq!(node.parent, Some(NodeId(0)));
    }

    #[test]
    fn test_uct_formula() {
        let mut node = SearchNode::new_child(create_board_empty(), NodeId(0), MOVES[0]);
        node.visits = 4;
        node.score = 2.0;
        let expected = 0.5 + (2.0 * (16.0f64).ln() / 4.0).sqrt();
        assert!((node.uct_score(16, 2.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_uct_with_single_parent_visit_is_pure_exploitation() {
        let mut node = SearchNode::new_child(create_board_empty(), NodeId(0), MOVES[0]);
        node.visits = 1;
        node.score = 1.0;
        assert!((node.uct_score(1, 2.0) - 1.0).abs() < 1e-12);
    }
}
