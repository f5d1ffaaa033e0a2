use crate::game::board::{Board, MOVES};

const ROW_SEPARATOR: &str = "\n--+---+--\n";

/// Draws the board as a 3×3 grid, "x"/"o"/blank per cell.
pub fn render_board(board: &Board) -> String {
    MOVES
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&mv| match board.owner(mv) {
                    Some(player) => player.symbol().to_string(),
                    None => " ".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR)
}
