pub mod apply_move;
pub mod board;
pub mod board_outcome;
pub mod get_legal_moves;
pub mod render_board;
pub mod simulate_game;
pub mod win_lines;

pub use apply_move::apply_move;
pub use board::{create_board_empty, read_board, Board, BoardKey, Move, Player, MOVES};
pub use board_outcome::{is_terminal, outcome, winner, GameOutcome};
pub use get_legal_moves::get_legal_moves;
pub use render_board::render_board;
pub use simulate_game::simulate_game;
