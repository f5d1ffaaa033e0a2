//! Selection policies
//!
//! - In-tree selection: UCT over fully visited children, ties broken uniformly at random
//! - Final move selection: most visited child, or a child sampled by win rate

use crate::mcts::hyperparameters::FinalMovePolicy;
use crate::mcts::mcts_result::SearchStats;
use crate::mcts::node::NodeId;
use crate::mcts::tree::SearchTree;
use crate::{Result, TicTacToeError};
use rand::seq::IndexedRandom;
use rand::Rng;

const TIE_EPSILON: f64 = 1e-12;

/// Picks the child with the highest UCT score among `candidates`.
///
/// Every candidate must have been visited at least once. Returns `None` only for an
/// empty candidate list.
pub fn select_uct_child<R: Rng>(
    tree: &SearchTree,
    parent: NodeId,
    candidates: &[NodeId],
    exploration: f64,
    rng: &mut R,
    stats: &mut SearchStats,
) -> Option<NodeId> {
    let parent_visits = tree.get(parent).visits;

    let scored: Vec<(NodeId, f64)> = candidates
        .iter()
        .map(|&id| {
            let child = tree.get(id);
            stats.uct_evaluations += 1;
            if !child.is_visited() {
                stats.zero_visit_uct_evaluations += 1;
            }
            (id, child.uct_score(parent_visits, exploration))
        })
        .collect();

    let best = scored
        .iter()
        .map(|&(_, score)| score)
        .fold(f64::NEG_INFINITY, f64::max);

    let ties: Vec<NodeId> = scored
        .iter()
        .filter(|&&(_, score)| (score - best).abs() <= TIE_EPSILON)
        .map(|&(id, _)| id)
        .collect();

    ties.choose(rng).copied()
}

/// Final move selection over the children of `node` according to `policy`.
///
/// Fails with [`TicTacToeError::EngineMisuse`] when `node` has no children.
pub fn select_final_child<R: Rng>(
    tree: &SearchTree,
    node: NodeId,
    policy: FinalMovePolicy,
    rng: &mut R,
) -> Result<NodeId> {
    let children = tree.children(node);
    if children.is_empty() {
        return Err(TicTacToeError::EngineMisuse(format!(
            "no children to choose from at node {}",
            node
        )));
    }

    let chosen = match policy {
        FinalMovePolicy::MaxVisits => select_most_visited(tree, &children, rng),
        FinalMovePolicy::WinRateWeighted => select_by_win_rate(tree, &children, rng),
    };

    chosen.ok_or_else(|| TicTacToeError::EngineMisuse(format!("no move selected at node {}", node)))
}

fn select_most_visited<R: Rng>(tree: &SearchTree, children: &[NodeId], rng: &mut R) -> Option<NodeId> {
    let most = children.iter().map(|&id| tree.get(id).visits).max()?;
    let best: Vec<NodeId> = children
        .iter()
        .copied()
        .filter(|&id| tree.get(id).visits == most)
        .collect();
    best.choose(rng).copied()
}

/// Samples proportionally to `score / visits`. Falls back to a uniform pick when
/// every child has a zero win rate.
fn select_by_win_rate<R: Rng>(tree: &SearchTree, children: &[NodeId], rng: &mut R) -> Option<NodeId> {
    match children.choose_weighted(rng, |&id| tree.get(id).win_rate()) {
        Ok(&id) => Some(id),
        Err(_) => children.choose(rng).copied(),
    }
}
