//! Game recording module.
//!
//! # Components
//!
//! - `game_record`: data structures for finished games
//! - `csv_writer`: CSV output of game records

pub mod csv_writer;
pub mod game_record;

pub use csv_writer::{load_games_from_csv, CsvWriter, GameRow};
pub use game_record::{GameRecord, PlayerType};
