// src/session/turn_manager.rs - Boucle de jeu explicite (humain / moteur / fin de partie)

use crate::game::board::{Board, Move, Player};
use crate::game::board_outcome::{outcome, GameOutcome};
use crate::mcts::algorithm::MctsEngine;
use crate::recording::csv_writer::CsvWriter;
use crate::recording::game_record::{GameRecord, PlayerType};
use crate::session::display::{DisplaySink, BANNER};
use crate::session::input::{parse_input, InputCommand, InputSource};
use crate::session::session_state::SessionState;
use crate::Result;

// ============================================================================
// CONFIGURATION DES JOUEURS ET ÉTATS
// ============================================================================

/// Who plays each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats {
    pub x: PlayerType,
    pub o: PlayerType,
}

impl Seats {
    pub fn of(&self, player: Player) -> PlayerType {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Seats {
    /// The engine opens, the human answers
    fn default() -> Self {
        Self {
            x: PlayerType::Mcts,
            o: PlayerType::Human,
        }
    }
}

/// Driver state for the position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingHumanInput,
    EngineThinking,
    GameOver(GameOutcome),
}

pub fn next_phase(board: &Board, seats: &Seats) -> GamePhase {
    match outcome(board) {
        Some(finished) => GamePhase::GameOver(finished),
        None => match seats.of(board.turn()) {
            PlayerType::Human => GamePhase::AwaitingHumanInput,
            PlayerType::Mcts => GamePhase::EngineThinking,
        },
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// A sequence of games sharing one engine (and its tree) and one set of tallies
pub struct Session<I: InputSource, D: DisplaySink> {
    engine: MctsEngine,
    seats: Seats,
    input: I,
    display: D,
    recorder: Option<CsvWriter>,
    state: SessionState,
}

impl<I: InputSource, D: DisplaySink> Session<I, D> {
    pub fn new(engine: MctsEngine, seats: Seats, input: I, display: D) -> Self {
        Self {
            engine,
            seats,
            input,
            display,
            recorder: None,
            state: SessionState::default(),
        }
    }

    /// Appends every finished game to `recorder`
    pub fn with_recorder(mut self, recorder: CsvWriter) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn engine(&self) -> &MctsEngine {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Plays games until the human quits, the input runs dry or `max_games` is reached
    pub fn run(&mut self, max_games: Option<usize>) -> Result<&SessionState> {
        loop {
            if max_games.is_some_and(|max| self.state.games_played() >= max) {
                break;
            }
            match self.play_game()? {
                Some(_) => {
                    let summary = self.state.tallies.to_string();
                    self.display.show_message(&summary);
                }
                None => break,
            }
        }
        log::info!("🏁 Session over: {}", self.state.tallies);
        Ok(&self.state)
    }

    /// Plays one game from the empty board. Returns `None` if the human quit.
    pub fn play_game(&mut self) -> Result<Option<GameOutcome>> {
        self.engine.new_game();
        self.display.show_message(BANNER);
        let mut record = GameRecord::new(self.state.next_game_id(), self.seats.x, self.seats.o);

        loop {
            let board = self.engine.current_board();
            match next_phase(&board, &self.seats) {
                GamePhase::GameOver(finished) => {
                    record.finalize(finished);
                    self.display.show_message(&format!("\n{}", finished));
                    self.display.show_board(&board);
                    log::info!(
                        "🎮 Game {} over: {} (moves: {:?})",
                        record.game_id,
                        finished,
                        record.moves
                    );
                    if let Some(recorder) = self.recorder.as_mut() {
                        recorder.write_game(&record)?;
                    }
                    self.state.finish_game(record);
                    return Ok(Some(finished));
                }
                GamePhase::EngineThinking => {
                    let report = self.engine.think();
                    let mv = self.engine.select_move()?;
                    self.engine.play_move(mv)?;
                    record.record_move(mv);
                    log::debug!(
                        "🤖 {} plays {} after {} iterations (tree: {} nodes)",
                        board.turn(),
                        mv,
                        report.iterations_run,
                        report.tree_size
                    );
                }
                GamePhase::AwaitingHumanInput => match self.read_human_move(&board)? {
                    Some(mv) => {
                        self.engine.play_move(mv)?;
                        record.record_move(mv);
                    }
                    None => {
                        self.state.quit = true;
                        log::info!("Player quit during game {}", record.game_id);
                        return Ok(None);
                    }
                },
            }
        }
    }

    /// Prompts until a free cell is given. Bad input is reported and re-prompted here,
    /// it never reaches the engine.
    fn read_human_move(&mut self, board: &Board) -> Result<Option<Move>> {
        loop {
            self.display.show_board(board);
            let prompt = format!("Make your move {}: ", board.turn());
            let line = match self.input.read_line(&prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_input(&line) {
                Ok(InputCommand::Quit) => return Ok(None),
                Ok(InputCommand::Play(mv)) if board.is_free(mv) => return Ok(Some(mv)),
                Ok(InputCommand::Play(mv)) => {
                    self.display
                        .show_message(&format!("Cell {} is already taken", mv));
                }
                Err(e) => self.display.show_message(&e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{create_board_empty, read_board};
    use crate::mcts::hyperparameters::EngineConfig;
    use crate::session::display::BufferedDisplay;
    use crate::session::input::ScriptedInput;

    fn engine(seed: u64) -> MctsEngine {
        MctsEngine::new(EngineConfig {
            iterations: 50,
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_next_phase() {
        let seats = Seats::default();
        let empty = create_board_empty();
        assert_eq!(next_phase(&empty, &seats), GamePhase::EngineThinking);

        let both_human = Seats {
            x: PlayerType::Human,
            o: PlayerType::Human,
        };
        assert_eq!(next_phase(&empty, &both_human), GamePhase::AwaitingHumanInput);

        let won = Board::from_parts(read_board("111 000 000"), read_board("000 110 000"), Player::O)
            .unwrap();
        assert_eq!(
            next_phase(&won, &seats),
            GamePhase::GameOver(GameOutcome::Winner(Player::X))
        );
    }

    #[test]
    fn test_human_vs_human_scripted_game() {
        let seats = Seats {
            x: PlayerType::Human,
            o: PlayerType::Human,
        };
        // x: 1 2 3 wins the top row; "abc", "12" and an occupied "1" are re-prompted
        let input = ScriptedInput::new(["1", "abc", "4", "1", "12", "2", "5", "3"]);
        let mut session = Session::new(engine(1), seats, input, BufferedDisplay::default());

        let finished = session.play_game().unwrap();
        assert_eq!(finished, Some(GameOutcome::Winner(Player::X)));
        assert_eq!(session.state().records[0].moves, vec![1, 4, 2, 5, 3]);
        assert_eq!(session.state().tallies.x_wins, 1);
        assert!(session.display().contains("already taken"));
        assert!(session.display().contains("not a cell number"));
        assert!(session.display().contains("outside 1-9"));
        assert!(session.display().contains("WIN for x"));
    }

    #[test]
    fn test_quit_stops_session() {
        let input = ScriptedInput::new(["q"]);
        let mut session = Session::new(engine(2), Seats::default(), input, BufferedDisplay::default());
        let state = session.run(None).unwrap();
        assert!(state.quit);
        assert_eq!(state.games_played(), 0);
    }

    #[test]
    fn test_end_of_input_behaves_like_quit() {
        let input = ScriptedInput::new(Vec::<String>::new());
        let mut session = Session::new(engine(3), Seats::default(), input, BufferedDisplay::default());
        assert_eq!(session.play_game().unwrap(), None);
        assert!(session.state().quit);
    }

    #[test]
    fn test_engine_vs_engine_session_tallies() {
        let seats = Seats {
            x: PlayerType::Mcts,
            o: PlayerType::Mcts,
        };
        let mut session = Session::new(engine(4), seats, ScriptedInput::default(), BufferedDisplay::default());
        let state = session.run(Some(3)).unwrap();
        assert_eq!(state.games_played(), 3);
        assert_eq!(state.tallies.games(), 3);
        assert!(!state.quit);
        for record in &state.records {
            assert!(record.outcome.is_some());
            assert!(record.moves.len() >= 5 && record.moves.len() <= 9);
        }
    }

    #[test]
    fn test_session_records_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        let seats = Seats {
            x: PlayerType::Mcts,
            o: PlayerType::Mcts,
        };
        let mut session = Session::new(engine(5), seats, ScriptedInput::default(), BufferedDisplay::default())
            .with_recorder(CsvWriter::new(&path).unwrap());
        session.run(Some(2)).unwrap();

        let rows = crate::recording::csv_writer::load_games_from_csv(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].game_id, 2);
        assert_eq!(rows[0].x_player, "MCTS");
    }
}
