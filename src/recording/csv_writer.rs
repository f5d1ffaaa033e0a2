//! CSV export of finished games.
//!
//! Format: game_id,started_at,x_player,o_player,winner,moves
//! `moves` is the space-separated list of 1-based cells. Rows are appended, the
//! header is only written when the file is new or empty.

use crate::recording::game_record::GameRecord;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// One CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRow {
    pub game_id: usize,
    pub started_at: String,
    pub x_player: String,
    pub o_player: String,
    pub winner: String,
    pub moves: String,
}

impl From<&GameRecord> for GameRow {
    fn from(record: &GameRecord) -> Self {
        Self {
            game_id: record.game_id,
            started_at: record.started_at.to_rfc3339(),
            x_player: record.x_player.to_string(),
            o_player: record.o_player.to_string(),
            winner: record.winner_label(),
            moves: record
                .moves
                .iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Appending CSV writer for game records
pub struct CsvWriter {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl CsvWriter {
    /// Opens `path` for appending, creating parent directories as needed
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let needs_header = fs::metadata(&path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a complete game record
    pub fn write_game(&mut self, record: &GameRecord) -> Result<()> {
        self.writer.serialize(GameRow::from(record))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Load recorded games from a CSV file
pub fn load_games_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<GameRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows: Vec<GameRow> = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
