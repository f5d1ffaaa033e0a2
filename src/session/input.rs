// src/session/input.rs - Lecture et validation des coups humains

use crate::game::board::Move;
use crate::{Result, TicTacToeError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// What a human typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Play(Move),
    Quit,
}

/// Parses "1".."9" into a move, "q" into quit. Surrounding whitespace is ignored.
pub fn parse_input(line: &str) -> Result<InputCommand> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(InputCommand::Quit);
    }
    let cell: usize = trimmed
        .parse()
        .map_err(|_| TicTacToeError::Parse(format!("'{}' is not a cell number", trimmed)))?;
    Move::from_cell_number(cell)
        .map(InputCommand::Play)
        .ok_or_else(|| TicTacToeError::Parse(format!("cell {} is outside 1-9", cell)))
}

// ============================================================================
// SOURCES D'ENTRÉE
// ============================================================================

/// Where human moves come from. `Ok(None)` means the input is exhausted.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Interactive terminal input
pub struct StdinInput {
    stdin: io::Stdin,
}

impl StdinInput {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Pre-recorded lines, handy for tests and scripted sessions
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
