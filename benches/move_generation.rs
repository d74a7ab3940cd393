//! Move generation, application and evaluation throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aadu_puli::board::BoardState;
use aadu_puli::core::{GameConfig, GoatCount, NodeId, TOTAL_GOATS};
use aadu_puli::game::{Game, MovePolicy, RandomPolicy};
use aadu_puli::rules;

fn midgame_board() -> BoardState {
    let board = [2, 9, 13]
        .into_iter()
        .fold(BoardState::new(), |b, n| b.with_tiger(NodeId::new(n)));
    [1, 4, 5, 6, 8, 10, 12, 14, 20, 21, 22, 23]
        .into_iter()
        .fold(board, |b, n| b.with_goat(NodeId::new(n)))
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("legal_moves_all_pieces", |b| {
        b.iter(|| {
            board
                .pieces()
                .map(|p| rules::legal_moves(p, black_box(&board), 0).len())
                .sum::<usize>()
        })
    });
}

fn bench_apply_and_evaluate(c: &mut Criterion) {
    let board = midgame_board();
    let tiger = *board.piece_at(NodeId::new(2)).expect("tiger on 2");
    let to = rules::legal_targets(&tiger, &board, 0)
        .iter()
        .next()
        .expect("tiger on 2 has a move");

    c.bench_function("apply_move", |b| {
        b.iter(|| rules::apply_move(&tiger, black_box(to), &board))
    });
    c.bench_function("evaluate", |b| {
        b.iter(|| rules::evaluate(black_box(&board), TOTAL_GOATS))
    });
}

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout_100_plies", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::new().with_goat_count(GoatCount::InPlay));
            let mut policy = RandomPolicy::new(black_box(7));
            for _ in 0..100 {
                let Some(choice) = policy.choose(&game) else { break };
                let outcome = match choice {
                    aadu_puli::Choice::Place(node) => game.place_goat(node),
                    aadu_puli::Choice::Move { piece, to } => game.move_piece(piece, to),
                };
                if outcome.is_err() || game.is_over() {
                    break;
                }
            }
            game.moves_played()
        })
    });
}

criterion_group!(benches, bench_legal_moves, bench_apply_and_evaluate, bench_random_playout);
criterion_main!(benches);
