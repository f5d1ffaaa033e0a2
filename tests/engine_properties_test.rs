//! Board and search properties checked over many seeded games

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tictactoe_mcts::{
    apply_move, create_board_empty, get_legal_moves, outcome, Board, EngineConfig, GameOutcome,
    MctsEngine, Player,
};

fn random_game_boards(seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = create_board_empty();
    let mut boards = vec![board];
    while outcome(&board).is_none() {
        let moves = get_legal_moves(&board);
        let mv = *moves.choose(&mut rng).unwrap();
        board = apply_move(&board, mv).unwrap();
        boards.push(board);
    }
    boards
}

#[test]
fn test_reachable_boards_are_consistent() {
    for seed in 0..200 {
        for board in random_game_boards(seed) {
            assert_eq!(board.x() & board.o(), 0);
            let placed = board.occupied().count_ones() as usize;
            assert_eq!(get_legal_moves(&board).len() + placed, 9);

            // x always opens, so x has as many stones as o or one more
            let xs = board.x().count_ones();
            let os = board.o().count_ones();
            match board.turn() {
                Player::X => assert_eq!(xs, os),
                Player::O => assert_eq!(xs, os + 1),
            }
        }
    }
}

#[test]
fn test_finished_games_have_one_outcome() {
    for seed in 0..200 {
        let boards = random_game_boards(seed);
        let last = boards.last().unwrap();
        match outcome(last).unwrap() {
            GameOutcome::Winner(player) => assert_eq!(player, last.turn().opponent()),
            GameOutcome::Draw => assert_eq!(last.occupied().count_ones(), 9),
        }
        assert!(boards[..boards.len() - 1]
            .iter()
            .all(|b| outcome(b).is_none()));
    }
}

#[test]
fn test_thousand_iterations_from_empty_board() {
    let mut engine = MctsEngine::new(EngineConfig {
        iterations: 1000,
        seed: Some(2024),
        ..Default::default()
    })
    .unwrap();
    let report = engine.think();

    assert_eq!(report.children.len(), 9);
    assert_eq!(report.total_child_visits(), 1000);
    assert_eq!(engine.stats().zero_visit_uct_evaluations, 0);

    let mv = engine.select_move().unwrap();
    assert!(create_board_empty().is_free(mv));
    let top = report.best().unwrap().visits;
    let chosen = report
        .children
        .iter()
        .find(|c| c.cell == mv.cell_number())
        .unwrap();
    assert_eq!(chosen.visits, top);
}

#[test]
fn test_engine_game_never_plays_illegal_move() {
    let mut engine = MctsEngine::new(EngineConfig {
        iterations: 200,
        seed: Some(31),
        prune_on_advance: true,
        ..Default::default()
    })
    .unwrap();
    let mut played = 0;
    while outcome(&engine.current_board()).is_none() {
        let before = engine.current_board();
        let mv = engine.think_and_play().unwrap();
        assert!(before.is_free(mv));
        played += 1;
    }
    assert!((5..=9).contains(&played));
}
