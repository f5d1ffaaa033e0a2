//! Arena-backed search tree.
//!
//! Nodes are stored in a `Vec` and referenced by [`NodeId`]; parent links are ids,
//! never owning references. Nodes are only ever added, except when the tree is
//! compacted to a subtree with [`SearchTree::prune_to`].

use crate::game::board::{Board, BoardKey, Move};
use crate::mcts::node::{NodeId, SearchNode};
use crate::scoring::scoring::result;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    root: NodeId,
}

impl SearchTree {
    /// Creates a tree holding only `root_board`
    pub fn new(root_board: Board) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(root_board)],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Child of `parent` holding the board with `key`, if already created
    pub fn child(&self, parent: NodeId, key: BoardKey) -> Option<NodeId> {
        self.get(parent).children.get(&key).copied()
    }

    /// Children of `parent` in key order
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.get(parent).children.values().copied().collect()
    }

    /// Returns the child for `board`, creating it under `parent` if absent.
    pub fn find_or_add_child(&mut self, parent: NodeId, board: Board, last_move: Move) -> NodeId {
        if let Some(existing) = self.child(parent, board.key()) {
            return existing;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new_child(board, parent, last_move));
        self.get_mut(parent).children.insert(board.key(), id);
        id
    }

    /// Walks from `leaf` up to the root adding one visit and the score of `terminal`.
    ///
    /// The outcome is scored for the player to move at `leaf`. Every node on the way
    /// is credited from the point of view of the player who moved into it, so the
    /// value flips at each level.
    pub fn backpropagate(&mut self, leaf: NodeId, terminal: &Board) {
        let leaf_turn = self.get(leaf).board.turn();
        let leaf_score = result(terminal, leaf_turn);

        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            node.score += if node.board.turn() == leaf_turn {
                1.0 - leaf_score
            } else {
                leaf_score
            };
            current = node.parent;
        }
    }

    /// Number of nodes from `id` up to the root, root depth being 0
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent).parent;
        }
        depth
    }

    /// Compacts the arena to the subtree under `new_root`, which becomes the root.
    /// Every other node is dropped and ids are reassigned; the new root id is returned.
    pub fn prune_to(&mut self, new_root: NodeId) -> NodeId {
        if new_root == self.root && self.get(new_root).parent.is_none() {
            return self.root;
        }

        let mut remap: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([new_root]);
        while let Some(id) = queue.pop_front() {
            remap[id.index()] = Some(NodeId(order.len() as u32));
            order.push(id);
            queue.extend(self.get(id).children.values().copied());
        }

        let mut compacted = Vec::with_capacity(order.len());
        for old in order {
            let mut node = self.nodes[old.index()].clone();
            node.parent = node.parent.and_then(|p| remap[p.index()]);
            for child in node.children.values_mut() {
                if let Some(mapped) = remap[child.index()] {
                    *child = mapped;
                }
            }
            compacted.push(node);
        }

        let dropped = self.nodes.len() - compacted.len();
        self.nodes = compacted;
        self.root = NodeId(0);
        self.get_mut(self.root).parent = None;
        log::debug!(
            "Tree pruned: kept {} nodes, dropped {}",
            self.nodes.len(),
            dropped
        );
        self.root
    }
}
