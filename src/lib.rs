//! # Tic-Tac-Toe MCTS Library
//!
//! A command-line tic-tac-toe player whose computer opponent searches with Monte Carlo
//! Tree Search and UCT selection.
//!
//! ## Features
//!
//! - **Game Engine**: bitboard rules (legal moves, move application, terminal detection)
//! - **AI Engine**: MCTS with a persistent arena tree reused across turns and games
//! - **Session Driver**: human / engine seats, tallies, parallel self-play
//! - **Recording**: CSV export of finished games, JSON tree dumps
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_mcts::{EngineConfig, MctsEngine};
//!
//! let mut engine = MctsEngine::new(EngineConfig {
//!     iterations: 200,
//!     seed: Some(7),
//!     ..Default::default()
//! })?;
//! let report = engine.think();
//! assert_eq!(report.total_child_visits(), 200);
//! let mv = engine.select_move()?;
//! engine.play_move(mv)?;
//! # Ok::<(), tictactoe_mcts::TicTacToeError>(())
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Monte Carlo Tree Search AI engine
pub mod mcts;

/// Terminal-board scoring
pub mod scoring;

/// Turn loop, tallies and self-play
pub mod session;

/// Game records and CSV export
pub mod recording;

/// Logger initialisation
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

/// Board and rules
pub use game::*;

/// MCTS AI engine exports
pub use mcts::*;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum TicTacToeError {
    /// The target cell is already occupied (1-based cell number)
    #[error("Illegal move: cell {cell} is already occupied")]
    IllegalMove { cell: usize },

    #[error("Engine misuse: {0}")]
    EngineMisuse(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TicTacToeError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
