use crate::game::board::{Board, Move, MOVES};

/// Returns every free cell in ascending cell order.
pub fn get_legal_moves(board: &Board) -> Vec<Move> {
    MOVES
        .iter()
        .copied()
        .filter(|&mv| board.is_free(mv))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{create_board_empty, read_board, Player};

    #[test]
    fn test_empty_board_offers_all_cells() {
        let masks: Vec<u16> = get_legal_moves(&create_board_empty())
            .iter()
            .map(|mv| mv.mask())
            .collect();
        assert_eq!(masks, vec![1, 2, 4, 8, 16, 32, 64, 128, 256]);
    }

    #[test]
    fn test_partially_filled_board() {
        let board = Board::from_parts(
            read_board("011 100 000"),
            read_board("000 001 111"),
            Player::X,
        )
        .unwrap();
        let masks: Vec<u16> = get_legal_moves(&board).iter().map(|mv| mv.mask()).collect();
        assert_eq!(masks, vec![1, 16]);
    }
}
