//! Game recording data structures.
//!
//! A finished game is summarised as a [`GameRecord`]: who sat on each side, the
//! cells played in order, and the outcome.

use crate::game::board::{Move, Player};
use crate::game::board_outcome::GameOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who controls a side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerType {
    Human,
    Mcts,
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerType::Human => write!(f, "Human"),
            PlayerType::Mcts => write!(f, "MCTS"),
        }
    }
}

/// Complete record of a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Position of the game in its session, starting at 1
    pub game_id: usize,
    pub started_at: DateTime<Utc>,
    pub x_player: PlayerType,
    pub o_player: PlayerType,
    /// 1-based cells in the order they were played
    pub moves: Vec<usize>,
    /// `None` until the game is finished
    pub outcome: Option<GameOutcome>,
}

impl GameRecord {
    pub fn new(game_id: usize, x_player: PlayerType, o_player: PlayerType) -> Self {
        Self {
            game_id,
            started_at: Utc::now(),
            x_player,
            o_player,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn record_move(&mut self, mv: Move) {
        self.moves.push(mv.cell_number());
    }

    pub fn finalize(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
    }

    pub fn player_type(&self, player: Player) -> PlayerType {
        match player {
            Player::X => self.x_player,
            Player::O => self.o_player,
        }
    }

    /// Winner label for exports: "x", "o", "draw", or empty while unfinished
    pub fn winner_label(&self) -> String {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => player.to_string(),
            Some(GameOutcome::Draw) => "draw".to_string(),
            None => String::new(),
        }
    }
}
