use crate::{Result, TicTacToeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Bitmask with every cell occupied
pub const FULL_BOARD: u16 = 0b1_1111_1111;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Lower-case symbol used when drawing the board
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single-cell bitmask. Cell `i` (0-based, row-major) is bit `1 << i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move(u16);

/// All nine moves in ascending cell order
pub const MOVES: [Move; CELL_COUNT] = [
    Move(1),
    Move(1 << 1),
    Move(1 << 2),
    Move(1 << 3),
    Move(1 << 4),
    Move(1 << 5),
    Move(1 << 6),
    Move(1 << 7),
    Move(1 << 8),
];

impl Move {
    /// Move for a 0-based cell index
    pub fn from_index(index: usize) -> Option<Move> {
        MOVES.get(index).copied()
    }

    /// Move for a 1-based cell number, as typed by a human
    pub fn from_cell_number(cell: usize) -> Option<Move> {
        cell.checked_sub(1).and_then(Move::from_index)
    }

    pub fn mask(self) -> u16 {
        self.0
    }

    /// 0-based cell index
    pub fn index(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    /// 1-based cell number
    pub fn cell_number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cell_number())
    }
}

/// Tree-indexing key: both bitsets, never just the occupied mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardKey {
    pub x: u16,
    pub o: u16,
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:09b} o={:09b}", self.x, self.o)
    }
}

/// Immutable board value. Every move produces a new `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    x: u16,
    o: u16,
    turn: Player,
}

impl Board {
    /// Builds a board from raw bitsets, rejecting overlapping or out-of-range masks.
    pub fn from_parts(x: u16, o: u16, turn: Player) -> Result<Board> {
        if x & o != 0 {
            return Err(TicTacToeError::InvalidBoard(format!(
                "cells {:09b} are claimed by both players",
                x & o
            )));
        }
        if (x | o) & !FULL_BOARD != 0 {
            return Err(TicTacToeError::InvalidBoard(format!(
                "bitsets x={:#x} o={:#x} exceed the nine cells",
                x, o
            )));
        }
        Ok(Board { x, o, turn })
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn o(&self) -> u16 {
        self.o
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Cells owned by `player`
    pub fn bits(&self, player: Player) -> u16 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Cells occupied by either player
    pub fn occupied(&self) -> u16 {
        self.x | self.o
    }

    pub fn key(&self) -> BoardKey {
        BoardKey {
            x: self.x,
            o: self.o,
        }
    }

    /// Owner of the cell covered by `mv`, if any
    pub fn owner(&self, mv: Move) -> Option<Player> {
        if self.x & mv.mask() != 0 {
            Some(Player::X)
        } else if self.o & mv.mask() != 0 {
            Some(Player::O)
        } else {
            None
        }
    }

    pub fn is_free(&self, mv: Move) -> bool {
        self.occupied() & mv.mask() == 0
    }

    /// Places the mover's mark without checking the cell. Callers guarantee legality.
    pub(crate) fn place(self, mv: Move) -> Board {
        let (x, o) = match self.turn {
            Player::X => (self.x | mv.mask(), self.o),
            Player::O => (self.x, self.o | mv.mask()),
        };
        Board {
            x,
            o,
            turn: self.turn.opponent(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        create_board_empty()
    }
}

/// Empty board with X to move
pub fn create_board_empty() -> Board {
    Board {
        x: 0,
        o: 0,
        turn: Player::X,
    }
}

/// Reads a row-major "111 000 000" pattern into a bitmask. Spaces are ignored,
/// any character other than '1' leaves its cell clear.
pub fn read_board(pattern: &str) -> u16 {
    pattern
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(CELL_COUNT)
        .enumerate()
        .fold(0, |acc, (i, c)| if c == '1' { acc | (1 << i) } else { acc })
}
