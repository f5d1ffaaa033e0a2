use crate::game::board::Board;
use crate::game::board_outcome::is_terminal;
use crate::game::get_legal_moves::get_legal_moves;
use rand::Rng;

/// Random rollout: plays uniformly random legal moves until the board is terminal.
/// Works on board values only, nothing is added to the search tree.
pub fn simulate_game<R: Rng>(board: Board, rng: &mut R) -> Board {
    let mut simulated = board;

    while !is_terminal(&simulated) {
        let legal_moves = get_legal_moves(&simulated);
        if legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        simulated = simulated.place(chosen);
    }

    simulated
}
