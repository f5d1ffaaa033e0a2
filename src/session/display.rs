use crate::game::board::Board;
use crate::game::render_board::render_board;

pub const BANNER: &str = "\n\n-----------\nTIC TAC TOE\n-----------";

/// One-way output of the session: boards and messages, nothing comes back.
pub trait DisplaySink {
    fn show_board(&mut self, board: &Board);
    fn show_message(&mut self, message: &str);
}

/// Prints to stdout
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn show_board(&mut self, board: &Board) {
        println!("\n{}", render_board(board));
    }

    fn show_message(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Keeps everything in memory
#[derive(Debug, Default)]
pub struct BufferedDisplay {
    pub lines: Vec<String>,
}

impl BufferedDisplay {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl DisplaySink for BufferedDisplay {
    fn show_board(&mut self, board: &Board) {
        self.lines.push(render_board(board));
    }

    fn show_message(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
