//! Monte Carlo Tree Search engine.
//!
//! The engine owns a persistent [`SearchTree`] and a cursor on the position currently
//! being played. Each iteration runs the four classic phases:
//! 1. Selection: descend with UCT until an unexplored child or a terminal node
//! 2. Expansion: create one unexplored child, chosen uniformly at random
//! 3. Simulation: random rollout from the selected node (skipped when terminal)
//! 4. Backpropagation: visits and flipped scores up to the root
//!
//! The tree survives across moves and games, so earlier thinking is reused.

use crate::game::apply_move::apply_move;
use crate::game::board::{create_board_empty, Board, Move};
use crate::game::board_outcome::{is_terminal, outcome};
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::simulate_game::simulate_game;
use crate::mcts::hyperparameters::EngineConfig;
use crate::mcts::mcts_result::{ChildSummary, SearchReport, SearchStats};
use crate::mcts::node::NodeId;
use crate::mcts::selection::{select_final_child, select_uct_child};
use crate::mcts::tree::SearchTree;
use crate::{Result, TicTacToeError};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

pub struct MctsEngine {
    config: EngineConfig,
    tree: SearchTree,
    current: NodeId,
    rng: StdRng,
    stats: SearchStats,
}

impl MctsEngine {
    /// Engine rooted at the empty board
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_root(config, create_board_empty())
    }

    /// Engine rooted at an arbitrary position
    pub fn with_root(config: EngineConfig, root: Board) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let tree = SearchTree::new(root);
        let current = tree.root();
        log::debug!("MCTS engine ready: {}", config.to_config_string());
        Ok(Self {
            config,
            tree,
            current,
            rng,
            stats: SearchStats::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Node of the position being played
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_board(&self) -> Board {
        self.tree.get(self.current).board
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Runs one full iteration from the current node
    pub fn iterate(&mut self) {
        let selected = self.select_and_expand();
        let board = self.tree.get(selected).board;

        let terminal = if is_terminal(&board) {
            board
        } else {
            simulate_game(board, &mut self.rng)
        };

        self.tree.backpropagate(selected, &terminal);
        self.stats.iterations += 1;
    }

    /// Selection and expansion. Returns the node the rollout starts from.
    fn select_and_expand(&mut self) -> NodeId {
        let mut node_id = self.current;

        loop {
            let board = self.tree.get(node_id).board;
            if is_terminal(&board) {
                self.stats.terminal_selections += 1;
                return node_id;
            }

            let mut unexplored: Vec<(Move, Board)> = Vec::new();
            let mut explored: Vec<NodeId> = Vec::new();
            for mv in get_legal_moves(&board) {
                let child_board = board.place(mv);
                match self.tree.child(node_id, child_board.key()) {
                    Some(id) if self.tree.get(id).is_visited() => explored.push(id),
                    _ => unexplored.push((mv, child_board)),
                }
            }

            if let Some(&(mv, child_board)) = unexplored.choose(&mut self.rng) {
                let before = self.tree.len();
                let child = self.tree.find_or_add_child(node_id, child_board, mv);
                if self.tree.len() > before {
                    self.stats.expansions += 1;
                }
                return child;
            }

            match select_uct_child(
                &self.tree,
                node_id,
                &explored,
                self.config.exploration,
                &mut self.rng,
                &mut self.stats,
            ) {
                Some(next) => node_id = next,
                None => return node_id,
            }
        }
    }

    /// Runs the configured number of iterations from the current position.
    ///
    /// On a finished game this is a no-op and the report carries the outcome.
    pub fn think(&mut self) -> SearchReport {
        self.think_for(self.config.iterations)
    }

    pub fn think_for(&mut self, iterations: usize) -> SearchReport {
        let board = self.current_board();
        if let Some(finished) = outcome(&board) {
            log::warn!("think called on a finished game ({}), nothing to search", finished);
            return self.report(0);
        }

        for _ in 0..iterations {
            self.iterate();
        }

        let report = self.report(iterations);
        if let Some(best) = report.best() {
            log::debug!(
                "🔍 {} iterations, tree size {}, best cell {} ({}/{} = {:.3})",
                iterations,
                report.tree_size,
                best.cell,
                best.score,
                best.visits,
                best.win_rate
            );
        }
        report
    }

    /// Snapshot of the current node and its children
    pub fn report(&self, iterations_run: usize) -> SearchReport {
        let node = self.tree.get(self.current);
        let mut children: Vec<ChildSummary> = node
            .children
            .values()
            .filter_map(|&id| {
                let child = self.tree.get(id);
                child.last_move.map(|mv| ChildSummary {
                    cell: mv.cell_number(),
                    visits: child.visits,
                    score: child.score,
                    win_rate: child.win_rate(),
                })
            })
            .collect();
        children.sort_by(|a, b| b.visits.cmp(&a.visits).then(a.cell.cmp(&b.cell)));

        SearchReport {
            board: node.board,
            iterations_run,
            tree_size: self.tree.len(),
            node_visits: node.visits,
            children,
            terminal: outcome(&node.board),
        }
    }

    /// Picks a move at the current position with the configured final-move policy.
    /// Does not play it.
    pub fn select_move(&mut self) -> Result<Move> {
        let board = self.current_board();
        if let Some(finished) = outcome(&board) {
            return Err(TicTacToeError::EngineMisuse(format!(
                "cannot select a move, the game is over ({})",
                finished
            )));
        }

        let chosen = select_final_child(
            &self.tree,
            self.current,
            self.config.final_move_policy,
            &mut self.rng,
        )?;

        self.tree.get(chosen).last_move.ok_or_else(|| {
            TicTacToeError::EngineMisuse(format!("node {} has no incoming move", chosen))
        })
    }

    /// Plays `mv` at the current position and moves the cursor to the resulting node,
    /// creating it if the search never reached it.
    pub fn play_move(&mut self, mv: Move) -> Result<NodeId> {
        let board = apply_move(&self.current_board(), mv)?;
        let child = self.tree.find_or_add_child(self.current, board, mv);
        self.current = if self.config.prune_on_advance {
            self.tree.prune_to(child)
        } else {
            child
        };
        Ok(self.current)
    }

    /// Thinks, selects and plays in one go
    pub fn think_and_play(&mut self) -> Result<Move> {
        self.think();
        let mv = self.select_move()?;
        self.play_move(mv)?;
        Ok(mv)
    }

    /// Moves back to the empty board for a new game. The tree is kept when
    /// `reuse_tree` is set and its root is still the empty board.
    pub fn new_game(&mut self) {
        let root = self.tree.root();
        if self.config.reuse_tree && self.tree.get(root).board == create_board_empty() {
            self.current = root;
            log::debug!("New game on the existing tree ({} nodes)", self.tree.len());
        } else {
            self.tree = SearchTree::new(create_board_empty());
            self.current = self.tree.root();
            log::debug!("New game on a fresh tree");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{read_board, Player, MOVES};
    use crate::mcts::hyperparameters::FinalMovePolicy;
    use assert_matches::assert_matches;

    fn seeded(iterations: usize, seed: u64) -> EngineConfig {
        EngineConfig {
            iterations,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_iteration_visits_a_root_child() {
        let mut engine = MctsEngine::new(seeded(200, 1)).unwrap();
        let report = engine.think();
        assert_eq!(report.iterations_run, 200);
        assert_eq!(report.total_child_visits(), 200);
        assert_eq!(report.node_visits, 200);
        assert_eq!(engine.stats().zero_visit_uct_evaluations, 0);
    }

    #[test]
    fn test_first_iterations_expand_every_move_once() {
        let mut engine = MctsEngine::new(seeded(9, 4)).unwrap();
        let report = engine.think();
        assert_eq!(report.children.len(), 9);
        assert!(report.children.iter().all(|c| c.visits == 1));
        assert_eq!(engine.stats().uct_evaluations, 0);
    }

    #[test]
    fn test_think_on_finished_game_is_noop() {
        let won = Board::from_parts(read_board("111 000 000"), read_board("000 110 000"), Player::O)
            .unwrap();
        let mut engine = MctsEngine::with_root(seeded(50, 2), won).unwrap();
        let report = engine.think();
        assert_eq!(report.iterations_run, 0);
        assert_eq!(report.terminal, Some(crate::game::GameOutcome::Winner(Player::X)));
        assert_eq!(engine.tree().len(), 1);
        assert_matches!(engine.select_move(), Err(TicTacToeError::EngineMisuse(_)));
    }

    #[test]
    fn test_select_move_before_thinking_is_misuse() {
        let mut engine = MctsEngine::new(seeded(10, 2)).unwrap();
        assert_matches!(engine.select_move(), Err(TicTacToeError::EngineMisuse(_)));
    }

    #[test]
    fn test_engine_takes_immediate_win() {
        // x on 1 and 2, o on 4 and 5, x to move: cell 3 wins
        let board = Board::from_parts(read_board("110 000 000"), read_board("000 110 000"), Player::X)
            .unwrap();
        let mut engine = MctsEngine::with_root(seeded(500, 8), board).unwrap();
        engine.think();
        assert_eq!(engine.select_move().unwrap(), MOVES[2]);
    }

    #[test]
    fn test_engine_blocks_immediate_loss() {
        // x on 1 and 2, o on 5, o to move: must block cell 3
        let board = Board::from_parts(read_board("110 000 000"), read_board("000 010 000"), Player::O)
            .unwrap();
        let mut engine = MctsEngine::with_root(seeded(2000, 21), board).unwrap();
        engine.think();
        assert_eq!(engine.select_move().unwrap(), MOVES[2]);
    }

    #[test]
    fn test_play_move_reuses_searched_child() {
        let mut engine = MctsEngine::new(seeded(100, 5)).unwrap();
        engine.think();
        let size = engine.tree().len();
        let mv = engine.select_move().unwrap();
        let node = engine.play_move(mv).unwrap();
        assert_eq!(engine.tree().len(), size);
        assert!(engine.tree().get(node).visits > 0);
        assert_eq!(engine.current_board().turn(), Player::O);
    }

    #[test]
    fn test_play_move_creates_unknown_child() {
        let mut engine = MctsEngine::new(seeded(10, 5)).unwrap();
        let node = engine.play_move(MOVES[4]).unwrap();
        assert_eq!(engine.tree().len(), 2);
        assert_eq!(engine.tree().get(node).visits, 0);
        assert_matches!(
            engine.play_move(MOVES[4]),
            Err(TicTacToeError::IllegalMove { cell: 5 })
        );
    }

    #[test]
    fn test_prune_on_advance_drops_siblings() {
        let config = EngineConfig {
            prune_on_advance: true,
            ..seeded(300, 6)
        };
        let mut engine = MctsEngine::new(config).unwrap();
        engine.think();
        let before = engine.tree().len();
        let mv = engine.select_move().unwrap();
        engine.play_move(mv).unwrap();
        assert!(engine.tree().len() < before);
        assert_eq!(engine.current(), engine.tree().root());
        assert_eq!(engine.current_board().x(), mv.mask());

        // thinking keeps working on the compacted tree
        let report = engine.think();
        assert_eq!(report.iterations_run, 300);
        assert_eq!(engine.stats().zero_visit_uct_evaluations, 0);
    }

    #[test]
    fn test_new_game_reuses_or_resets_tree() {
        let mut engine = MctsEngine::new(seeded(50, 7)).unwrap();
        engine.think_and_play().unwrap();
        let size = engine.tree().len();
        engine.new_game();
        assert_eq!(engine.current(), engine.tree().root());
        assert_eq!(engine.tree().len(), size);

        let config = EngineConfig {
            reuse_tree: false,
            ..seeded(50, 7)
        };
        let mut engine = MctsEngine::new(config).unwrap();
        engine.think_and_play().unwrap();
        engine.new_game();
        assert_eq!(engine.tree().len(), 1);
    }

    #[test]
    fn test_weighted_policy_plays_legal_moves() {
        let config = EngineConfig {
            final_move_policy: FinalMovePolicy::WinRateWeighted,
            ..seeded(60, 12)
        };
        let mut engine = MctsEngine::new(config).unwrap();
        while outcome(&engine.current_board()).is_none() {
            let before = engine.current_board();
            let mv = engine.think_and_play().unwrap();
            assert!(before.is_free(mv));
        }
    }
}
