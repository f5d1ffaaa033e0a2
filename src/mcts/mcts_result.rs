use crate::game::board::{Board, Move};
use crate::game::board_outcome::GameOutcome;
use serde::Serialize;

/// Counters accumulated by an engine across all its iterations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub iterations: u64,
    /// Nodes created by the expansion step
    pub expansions: u64,
    /// Iterations whose selection stopped on an already terminal node
    pub terminal_selections: u64,
    pub uct_evaluations: u64,
    /// Must stay at zero: UCT is undefined for unvisited nodes
    pub zero_visit_uct_evaluations: u64,
}

/// Statistics of one candidate move at the searched position
#[derive(Debug, Clone, Serialize)]
pub struct ChildSummary {
    pub cell: usize,
    pub visits: u32,
    pub score: f64,
    pub win_rate: f64,
}

/// What a call to `think` did
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub board: Board,
    pub iterations_run: usize,
    pub tree_size: usize,
    pub node_visits: u32,
    /// Candidate moves, most visited first
    pub children: Vec<ChildSummary>,
    /// Set when `think` was asked to search a finished game
    pub terminal: Option<GameOutcome>,
}

impl SearchReport {
    /// Most visited candidate, if any
    pub fn best(&self) -> Option<&ChildSummary> {
        self.children.first()
    }

    pub fn best_move(&self) -> Option<Move> {
        self.best().and_then(|child| Move::from_cell_number(child.cell))
    }

    pub fn total_child_visits(&self) -> u64 {
        self.children.iter().map(|c| c.visits as u64).sum()
    }
}
