use crate::game::board::{Board, Move};
use crate::{Result, TicTacToeError};

/// Places the mover's mark on `mv` and hands the turn over.
///
/// Fails with [`TicTacToeError::IllegalMove`] when the cell is already taken by either player.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board> {
    if !board.is_free(mv) {
        return Err(TicTacToeError::IllegalMove {
            cell: mv.cell_number(),
        });
    }
    Ok(board.place(mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{create_board_empty, Player, MOVES};
    use crate::game::get_legal_moves::get_legal_moves;
    use assert_matches::assert_matches;

    #[test]
    fn test_apply_sets_mover_bit() {
        let board = apply_move(&create_board_empty(), MOVES[0]).unwrap();
        assert_eq!(board.x(), 1);
        assert_eq!(board.turn(), Player::O);

        let board = apply_move(&board, MOVES[8]).unwrap();
        assert_eq!(board.o(), 256);
        assert_eq!(board.turn(), Player::X);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let board = apply_move(&create_board_empty(), MOVES[3]).unwrap();
        assert_matches!(
            apply_move(&board, MOVES[3]),
            Err(TicTacToeError::IllegalMove { cell: 4 })
        );
    }

    #[test]
    fn test_played_cell_is_not_offered_again() {
        let mut board = create_board_empty();
        for mv in [MOVES[4], MOVES[0], MOVES[8]] {
            board = apply_move(&board, mv).unwrap();
            assert!(!get_legal_moves(&board).contains(&mv));
        }
    }
}
