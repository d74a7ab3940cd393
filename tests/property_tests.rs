//! Property tests over random playouts.
//!
//! Each case plays a seeded random game through the controller and checks
//! the board invariants after every accepted input.

use proptest::prelude::*;

use aadu_puli::board::{BoardState, Topology};
use aadu_puli::core::{GameConfig, GameRng, GoatCount, NodeId, NodeSet, Role, MIN_GOATS_ON_BOARD, TOTAL_GOATS};
use aadu_puli::game::{Choice, Game, MovePolicy, RandomPolicy, Transition};
use aadu_puli::rules::{self, GameResult};

const MAX_PLIES: usize = 120;

fn check_board(board: &BoardState) {
    // One piece per node, and the node index agrees with the pieces.
    let mut seen = NodeSet::empty();
    for piece in board.pieces() {
        assert!(seen.insert(piece.position), "two pieces on {}", piece.position);
        assert_eq!(board.piece_at(piece.position).map(|p| p.id), Some(piece.id));
    }
    assert_eq!(seen, board.occupied());
    assert_eq!(board.tiger_count(), 3);
    assert!(board.goat_count() <= TOTAL_GOATS as usize);
}

fn check_targets(board: &BoardState, goats_remaining: u32) {
    let topo = Topology::standard();
    for piece in board.pieces() {
        let targets = rules::legal_targets(piece, board, goats_remaining);
        assert!(targets.intersection(board.occupied()).is_empty());

        // Same inputs, same answer.
        assert_eq!(rules::legal_targets(piece, board, goats_remaining), targets);
        assert_eq!(
            rules::legal_moves(piece, board, goats_remaining),
            rules::legal_moves(piece, board, goats_remaining)
        );

        if piece.is_goat() && goats_remaining > 0 {
            assert_eq!(targets, board.occupied().complement());
            continue;
        }
        for mv in rules::legal_moves(piece, board, goats_remaining) {
            match mv.over {
                None => assert!(topo.is_adjacent(piece.position, mv.to)),
                Some(over) => {
                    assert!(piece.is_tiger());
                    assert!(board.has_goat_at(over));
                    assert!(topo.is_adjacent(piece.position, over));
                    assert!(topo.is_adjacent(over, mv.to));
                    assert_ne!(mv.to, piece.position);
                }
            }
        }
    }
}

/// Play up to `MAX_PLIES` random inputs, checking invariants as we go.
fn random_playout(seed: u64, goat_count: GoatCount) -> Game {
    let mut game = Game::new(GameConfig::new().with_seed(seed).with_goat_count(goat_count));
    let mut policy = RandomPolicy::from_game(&game);

    for _ in 0..MAX_PLIES {
        if game.is_over() {
            break;
        }
        let Some(choice) = policy.choose(&game) else { break };

        let before = game.board().clone();
        let placed_before = game.goats_placed();
        let role = game.turn();

        let transition = match choice {
            Choice::Place(node) => game.place_goat(node),
            Choice::Move { piece, to } => game.move_piece(piece, to),
        }
        .expect("random policy picks legal choices");

        match transition {
            Transition::Placed { piece, .. } => {
                assert_eq!(role, Role::Goat);
                assert!(!before.is_occupied(piece.position));
                assert_eq!(game.goats_placed(), placed_before + 1);
                assert_eq!(game.board().goat_count(), before.goat_count() + 1);
            }
            Transition::Moved { record, .. } => {
                assert_eq!(record.role, role);
                assert_eq!(game.goats_placed(), placed_before);
                let lost = before.goat_count() - game.board().goat_count();
                match record.captured {
                    Some(node) => {
                        assert_eq!(role, Role::Tiger);
                        assert_eq!(lost, 1);
                        assert!(before.has_goat_at(node));
                        assert!(!game.board().is_occupied(node));
                    }
                    None => assert_eq!(lost, 0),
                }
            }
            Transition::Selected { .. } => unreachable!("policies never select"),
        }

        check_board(game.board());
        check_targets(game.board(), game.phase().goats_remaining());

        if !game.is_over() {
            assert_eq!(game.turn(), role.opponent());
        }
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_playouts_keep_board_consistent(seed in any::<u64>()) {
        random_playout(seed, GoatCount::InPlay);
    }

    #[test]
    fn prop_on_board_playouts_keep_board_consistent(seed in any::<u64>()) {
        random_playout(seed, GoatCount::OnBoard);
    }

    #[test]
    fn prop_result_matches_evaluator(seed in any::<u64>()) {
        let game = random_playout(seed, GoatCount::InPlay);
        let judged = rules::judge(game.board(), game.goats_placed(), GoatCount::InPlay);
        if let Some(result) = game.result() {
            prop_assert_eq!(judged, Some(result));
            if result == GameResult::TigerWins {
                let in_play = game.board().goat_count() + game.phase().goats_remaining() as usize;
                prop_assert!(in_play < MIN_GOATS_ON_BOARD);
            }
        }
    }

    #[test]
    fn prop_default_result_is_evaluate(seed in any::<u64>()) {
        let game = random_playout(seed, GoatCount::OnBoard);
        if let Some(result) = game.result() {
            prop_assert_eq!(rules::evaluate(game.board(), game.goats_placed()), Some(result));
        }
    }

    #[test]
    fn prop_evaluate_is_pure(seed in any::<u64>()) {
        let game = random_playout(seed, GoatCount::InPlay);
        let board = game.board().clone();
        let first = rules::evaluate(&board, game.goats_placed());
        let second = rules::evaluate(&board, game.goats_placed());
        prop_assert_eq!(first, second);
        prop_assert_eq!(&board, game.board());
    }

    #[test]
    fn prop_random_boards_satisfy_target_rules(
        seed in any::<u64>(),
        goats in 0usize..=15,
        remaining in 0u32..=15,
    ) {
        let mut rng = GameRng::new(seed);
        let mut free: Vec<NodeId> = NodeId::all().collect();
        let mut board = BoardState::new();

        for i in 0..(3 + goats) {
            let idx = rng.gen_index(free.len());
            let node = free.swap_remove(idx);
            board = if i < 3 { board.with_tiger(node) } else { board.with_goat(node) };
        }

        check_board(&board);
        check_targets(&board, remaining);

        let verdict = rules::evaluate(&board, TOTAL_GOATS);
        if goats < MIN_GOATS_ON_BOARD {
            prop_assert_eq!(verdict, Some(GameResult::TigerWins));
        } else {
            let blocked = !rules::has_any_move(Role::Tiger, &board, 0);
            prop_assert_eq!(verdict == Some(GameResult::GoatWins), blocked);
        }
    }
}
