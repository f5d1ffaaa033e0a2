//! Engine-vs-engine games.
//!
//! Each game owns an independent engine and tree, so games run in parallel with rayon.
//! Per-game seeds derive from the configured base seed.

use crate::game::board_outcome::outcome;
use crate::mcts::algorithm::MctsEngine;
use crate::mcts::hyperparameters::EngineConfig;
use crate::recording::game_record::{GameRecord, PlayerType};
use crate::Result;
use rayon::prelude::*;

/// Plays a full game with one engine choosing the moves of both sides
pub fn play_engine_game(config: &EngineConfig, game_id: usize) -> Result<GameRecord> {
    let mut engine = MctsEngine::new(config.clone())?;
    let mut record = GameRecord::new(game_id, PlayerType::Mcts, PlayerType::Mcts);

    loop {
        if let Some(finished) = outcome(&engine.current_board()) {
            record.finalize(finished);
            return Ok(record);
        }
        let mv = engine.think_and_play()?;
        record.record_move(mv);
    }
}

/// Plays `games` games in parallel. Records come back in game order.
pub fn run_self_play(config: &EngineConfig, games: usize) -> Result<Vec<GameRecord>> {
    log::info!(
        "⚔️ Self-play: {} games, {}",
        games,
        config.to_config_string()
    );

    (1..=games)
        .into_par_iter()
        .map(|game_id| {
            let seed = config.seed.map(|s| s.wrapping_add(game_id as u64));
            play_engine_game(&config.with_seed(seed), game_id)
        })
        .collect()
}
