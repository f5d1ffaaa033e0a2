use crate::game::board::Player;
use crate::game::board_outcome::GameOutcome;
use crate::recording::game_record::GameRecord;
use serde::Serialize;
use std::fmt;

/// Win / loss / draw counters across the games of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tallies {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tallies {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(Player::X) => self.x_wins += 1,
            GameOutcome::Winner(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn from_records<'a, I: IntoIterator<Item = &'a GameRecord>>(records: I) -> Self {
        let mut tallies = Tallies::default();
        for outcome in records.into_iter().filter_map(|r| r.outcome) {
            tallies.record(outcome);
        }
        tallies
    }
}

impl fmt::Display for Tallies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x wins: {} | o wins: {} | draws: {} ({} games)",
            self.x_wins,
            self.o_wins,
            self.draws,
            self.games()
        )
    }
}

/// Everything the session accumulates between games
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub tallies: Tallies,
    pub records: Vec<GameRecord>,
    /// Set once the human asked to stop
    pub quit: bool,
}

impl SessionState {
    pub fn games_played(&self) -> usize {
        self.records.len()
    }

    pub fn next_game_id(&self) -> usize {
        self.records.len() + 1
    }

    pub fn finish_game(&mut self, record: GameRecord) {
        if let Some(outcome) = record.outcome {
            self.tallies.record(outcome);
        }
        self.records.push(record);
    }
}
