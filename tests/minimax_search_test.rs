//! Tests for minimax move selection.

use std::collections::HashSet;
use strum::IntoEnumIterator;

use strictly_minimax::search::{self, alphabeta, minimax};
use strictly_minimax::{
    Action, Board, Engine, EngineConfig, Outcome, Player, SearchStrategy, apply, best_move,
    initial_state, is_terminal, legal_actions, player_to_move, utility, winner,
};

/// Distinct reachable boards after exactly `plies` moves.
fn boards_at_ply(plies: usize) -> HashSet<Board> {
    let mut frontier: HashSet<Board> = HashSet::from([initial_state()]);
    for _ in 0..plies {
        frontier = frontier
            .iter()
            .filter(|board| !is_terminal(board))
            .flat_map(|board| {
                legal_actions(board)
                    .into_iter()
                    .map(move |a| apply(board, a).expect("Legal action rejected"))
            })
            .collect();
    }
    frontier
}

/// Value of `board` for whichever side is to move.
fn value(board: &Board) -> i32 {
    match player_to_move(board) {
        Player::X => minimax::max_value(board),
        Player::O => minimax::min_value(board),
    }
}

#[test]
fn test_full_tree_is_a_draw() {
    assert_eq!(minimax::max_value(&initial_state()), 0);
}

#[test]
fn test_full_tree_node_count() {
    let report = search::search(&initial_state(), SearchStrategy::Minimax);
    assert_eq!(report.stats().nodes, 549_946);
    assert_eq!(*report.value(), 0);
}

#[test]
fn test_optimal_play_ends_in_draw() {
    let mut board = initial_state();
    let mut moves = 0;
    while let Some(action) = best_move(&board) {
        board = apply(&board, action).expect("Engine chose an occupied cell");
        moves += 1;
    }
    assert_eq!(moves, 9);
    assert!(is_terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_completes_line_when_available() {
    // X to move with two winning cells; the first in row-major order is chosen.
    let board: Board = "XOX/OXO/...".parse().unwrap();
    assert_eq!(player_to_move(&board), Player::X);

    let action = best_move(&board).expect("Board is not terminal");
    assert_eq!(action, Action::new(2, 0).unwrap());

    let after = apply(&board, action).unwrap();
    assert_eq!(winner(&after), Some(Player::X));
}

#[test]
fn test_avoids_loss_when_no_win() {
    // O threatens the middle row; X has no win and must block at (1, 2).
    let board: Board = "X../OO./X..".parse().unwrap();
    assert_eq!(player_to_move(&board), Player::X);

    let action = best_move(&board).expect("Board is not terminal");
    assert_eq!(action, Action::new(1, 2).unwrap());
    assert_eq!(minimax::min_value(&apply(&board, action).unwrap()), 0);
}

#[test]
fn test_best_move_is_optimal_on_late_boards() {
    let boards: Vec<Board> = (4..9).flat_map(boards_at_ply).collect();
    for board in boards {
        if is_terminal(&board) {
            assert_eq!(best_move(&board), None);
            continue;
        }

        let player = player_to_move(&board);
        let children: Vec<i32> = legal_actions(&board)
            .into_iter()
            .map(|a| value(&apply(&board, a).unwrap()))
            .collect();
        let optimum = match player {
            Player::X => children.iter().copied().max(),
            Player::O => children.iter().copied().min(),
        }
        .expect("Non-terminal board has moves");

        let action = best_move(&board).expect("Non-terminal board has a move");
        assert_eq!(value(&apply(&board, action).unwrap()), optimum, "{board}");
    }
}

#[test]
fn test_alpha_beta_matches_minimax_early_boards() {
    let boards: Vec<Board> = (1..=3).flat_map(boards_at_ply).collect();
    for board in boards {
        let plain = search::search(&board, SearchStrategy::Minimax);
        let pruned = search::search(&board, SearchStrategy::AlphaBeta);
        assert_eq!(plain.value(), pruned.value(), "{board}");
        assert_eq!(plain.action(), pruned.action(), "{board}");
        assert!(pruned.stats().nodes <= plain.stats().nodes);
    }
}

#[test]
fn test_alpha_beta_value_functions_match() {
    for board in boards_at_ply(4) {
        assert_eq!(alphabeta::max_value(&board), minimax::max_value(&board));
        assert_eq!(alphabeta::min_value(&board), minimax::min_value(&board));
        assert_eq!(alphabeta::best_action(&board), minimax::best_action(&board));
    }
}

#[test]
fn test_engine_self_play_from_start() {
    for strategy in SearchStrategy::iter() {
        let engine = Engine::new(EngineConfig::new(strategy));
        let game = engine.self_play(&initial_state()).unwrap();
        assert_eq!(game.moves().len(), 9);
        assert_eq!(*game.outcome(), Outcome::Draw);
    }
}
