//! Session driver: the turn-taking loop around the engine.
//!
//! - `turn_manager`: explicit game state machine and multi-game session
//! - `input` / `display`: the human-facing collaborators
//! - `session_state`: tallies and records carried between games
//! - `self_play`: parallel engine-vs-engine games

pub mod display;
pub mod input;
pub mod self_play;
pub mod session_state;
pub mod turn_manager;

pub use display::{BufferedDisplay, ConsoleDisplay, DisplaySink};
pub use input::{parse_input, InputCommand, InputSource, ScriptedInput, StdinInput};
pub use self_play::{play_engine_game, run_self_play};
pub use session_state::{SessionState, Tallies};
pub use turn_manager::{next_phase, GamePhase, Seats, Session};
