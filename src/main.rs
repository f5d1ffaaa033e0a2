// main.rs - Point d'entrée CLI : partie interactive ou self-play
use clap::Parser;
use std::path::PathBuf;

use tictactoe_mcts::logging::setup_logging;
use tictactoe_mcts::mcts::tree_export::{render_tree, write_tree_json};
use tictactoe_mcts::recording::{CsvWriter, PlayerType};
use tictactoe_mcts::session::{
    run_self_play, ConsoleDisplay, Seats, Session, StdinInput, Tallies,
};
use tictactoe_mcts::{EngineConfig, FinalMovePolicy, MctsEngine};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SeatCli {
    Human,
    Engine,
}

impl From<SeatCli> for PlayerType {
    fn from(cli: SeatCli) -> Self {
        match cli {
            SeatCli::Human => PlayerType::Human,
            SeatCli::Engine => PlayerType::Mcts,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PolicyCli {
    /// Most visited move
    MaxVisits,
    /// Move sampled by win rate
    WinRateWeighted,
}

impl From<PolicyCli> for FinalMovePolicy {
    fn from(cli: PolicyCli) -> Self {
        match cli {
            PolicyCli::MaxVisits => FinalMovePolicy::MaxVisits,
            PolicyCli::WinRateWeighted => FinalMovePolicy::WinRateWeighted,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum GameMode {
    /// Interactive games on the terminal
    Play,
    /// Engine against engine, in parallel
    Selfplay,
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe_mcts", version, about = "Tic-tac-toe against a Monte Carlo Tree Search engine")]
struct Config {
    /// Game mode
    #[arg(long, value_enum, default_value = "play")]
    mode: GameMode,

    /// Who plays x
    #[arg(long, value_enum, default_value = "engine")]
    x: SeatCli,

    /// Who plays o
    #[arg(long, value_enum, default_value = "human")]
    o: SeatCli,

    /// JSON engine configuration; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// MCTS iterations per engine move
    #[arg(short = 'i', long)]
    iterations: Option<usize>,

    /// Final move policy
    #[arg(long, value_enum)]
    policy: Option<PolicyCli>,

    /// Exploration constant inside the UCT square root
    #[arg(long)]
    exploration: Option<f64>,

    /// Seed for reproducible search
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games (self-play count, or a cap on interactive games)
    #[arg(short = 'g', long)]
    games: Option<usize>,

    /// Start every game on a fresh tree
    #[arg(long, default_value_t = false)]
    fresh_tree: bool,

    /// Drop unreachable branches after each move
    #[arg(long, default_value_t = false)]
    prune: bool,

    /// Append finished games to this CSV file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Write the final search tree as JSON (play mode)
    #[arg(long)]
    dump_tree: Option<PathBuf>,

    /// Fallback log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log to rotated files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Config {
    fn engine_config(&self) -> tictactoe_mcts::Result<EngineConfig> {
        let mut engine_config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(iterations) = self.iterations {
            engine_config.iterations = iterations;
        }
        if let Some(policy) = self.policy {
            engine_config.final_move_policy = policy.into();
        }
        if let Some(exploration) = self.exploration {
            engine_config.exploration = exploration;
        }
        if self.seed.is_some() {
            engine_config.seed = self.seed;
        }
        if self.fresh_tree {
            engine_config.reuse_tree = false;
        }
        if self.prune {
            engine_config.prune_on_advance = true;
        }
        engine_config.validate()?;
        Ok(engine_config)
    }
}

fn play(config: &Config, engine_config: EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let seats = Seats {
        x: config.x.into(),
        o: config.o.into(),
    };
    log::info!("🎯 x: {}, o: {}", seats.x, seats.o);

    let engine = MctsEngine::new(engine_config)?;
    let mut session = Session::new(engine, seats, StdinInput::new(), ConsoleDisplay);
    if let Some(path) = &config.record {
        session = session.with_recorder(CsvWriter::new(path)?);
    }

    session.run(config.games)?;

    let tree = session.engine().tree();
    log::debug!("Top of the tree:\n{}", render_tree(tree, tree.root(), 1));
    if let Some(path) = &config.dump_tree {
        write_tree_json(tree, path)?;
    }

    println!("\n{}", session.state().tallies);
    Ok(())
}

fn self_play(config: &Config, engine_config: EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let games = config.games.unwrap_or(100);
    let records = run_self_play(&engine_config, games)?;

    if let Some(path) = &config.record {
        let mut writer = CsvWriter::new(path)?;
        for record in &records {
            writer.write_game(record)?;
        }
        log::info!("✅ {} games written to {}", records.len(), writer.path().display());
    }

    let tallies = Tallies::from_records(&records);
    log::info!("📊 {}", tallies);
    println!("{}", tallies);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let engine_config = config.engine_config()?;
    log::info!("⚙️ {}", engine_config.to_config_string());

    match config.mode {
        GameMode::Play => play(&config, engine_config),
        GameMode::Selfplay => self_play(&config, engine_config),
    }
}
