//! MCTS engine configuration
//!
//! All tunables of the search live here. The struct is serde-friendly so a whole
//! configuration can be loaded from a JSON file and overridden from the command line.

use crate::{Result, TicTacToeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the engine picks its move once the iterations are done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalMovePolicy {
    /// Child with the most visits, ties broken uniformly at random
    #[default]
    MaxVisits,
    /// Child sampled with probability proportional to its win rate
    WinRateWeighted,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// MCTS iterations per call to `think`
    /// Default: 100
    pub iterations: usize,

    /// Constant inside the UCT exploration term: sqrt(exploration * ln(N) / n)
    /// Default: 2.0
    pub exploration: f64,

    /// Final move selection
    /// Default: MaxVisits
    pub final_move_policy: FinalMovePolicy,

    /// Compact the tree to the played child's subtree after every move
    /// Default: false
    pub prune_on_advance: bool,

    /// Keep the tree between games of a session
    /// Default: true
    pub reuse_tree: bool,

    /// Seed for reproducible search, entropy when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            exploration: 2.0,
            final_move_policy: FinalMovePolicy::MaxVisits,
            prune_on_advance: false,
            reuse_tree: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        log::debug!(
            "Engine config loaded from {}: {}",
            path.as_ref().display(),
            config.to_config_string()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(TicTacToeError::Config(
                "iterations must be at least 1".to_string(),
            ));
        }
        if !self.exploration.is_finite() || self.exploration <= 0.0 {
            return Err(TicTacToeError::Config(format!(
                "exploration must be a positive finite number, got {}",
                self.exploration
            )));
        }
        Ok(())
    }

    /// Same configuration with another seed
    pub fn with_seed(&self, seed: Option<u64>) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        format!(
            "iter[{}]_c[{:.2}]_policy[{:?}]_prune[{}]_reuse[{}]_seed[{}]",
            self.iterations,
            self.exploration,
            self.final_move_policy,
            self.prune_on_advance,
            self.reuse_tree,
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "entropy".to_string())
        )
    }
}
