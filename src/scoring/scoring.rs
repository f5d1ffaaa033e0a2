use crate::game::board::{Board, Player};
use crate::game::board_outcome::winner;

pub const WIN_SCORE: f64 = 1.0;
pub const LOSS_SCORE: f64 = 0.0;
pub const DRAW_SCORE: f64 = 0.5;

/// Scores a terminal board for `perspective`: win 1, loss 0, draw 0.5.
///
/// Meant for terminal boards; an unfinished board without a winner scores as a draw.
pub fn result(board: &Board, perspective: Player) -> f64 {
    match winner(board) {
        Some(player) if player == perspective => WIN_SCORE,
        Some(_) => LOSS_SCORE,
        None => DRAW_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::read_board;

    #[test]
    fn test_result_by_perspective() {
        let board = Board::from_parts(read_board("111 000 000"), read_board("000 110 000"), Player::O)
            .unwrap();
        assert_eq!(result(&board, Player::X), WIN_SCORE);
        assert_eq!(result(&board, Player::O), LOSS_SCORE);
    }

    #[test]
    fn test_draw_scores_half() {
        let board = Board::from_parts(
            read_board("101 100 011"),
            read_board("010 011 100"),
            Player::O,
        )
        .unwrap();
        assert_eq!(result(&board, Player::X), DRAW_SCORE);
        assert_eq!(result(&board, Player::O), DRAW_SCORE);
    }
}
