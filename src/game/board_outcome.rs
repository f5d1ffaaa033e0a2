use crate::game::board::{Board, Player, FULL_BOARD};
use crate::game::win_lines::has_won;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "WIN for {}", player),
            GameOutcome::Draw => write!(f, "DRAW"),
        }
    }
}

/// True once the board is full or either player holds a winning line
pub fn is_terminal(board: &Board) -> bool {
    board.occupied() == FULL_BOARD || has_won(board.x()) || has_won(board.o())
}

/// Player holding a winning line, if any.
///
/// The player who just moved is checked first, so a malformed board where both
/// players hold a line still has a deterministic answer.
pub fn winner(board: &Board) -> Option<Player> {
    let last_mover = board.turn().opponent();
    [last_mover, last_mover.opponent()]
        .into_iter()
        .find(|&player| has_won(board.bits(player)))
}

/// Outcome of a terminal board, `None` while the game is still running
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if !is_terminal(board) {
        return None;
    }
    Some(match winner(board) {
        Some(player) => GameOutcome::Winner(player),
        None => GameOutcome::Draw,
    })
}
