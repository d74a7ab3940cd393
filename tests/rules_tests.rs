//! End-to-end rule scenarios on the standard board.
//!
//! These drive the pure rule functions directly, the way a host that owns
//! its own `BoardState` would.

use aadu_puli::board::{BoardState, Topology};
use aadu_puli::core::{MoveKind, NodeId, NodeSet, PieceId, Role, TOTAL_GOATS};
use aadu_puli::rules::{
    apply_move, capture_moves, evaluate, has_any_move, legal_targets, place_goat, placement_targets,
    GameResult,
};

fn n(id: u8) -> NodeId {
    NodeId::new(id)
}

fn set(ids: &[u8]) -> NodeSet {
    ids.iter().map(|&id| n(id)).collect()
}

fn board_with(tigers: &[u8], goats: &[u8]) -> BoardState {
    let board = tigers
        .iter()
        .fold(BoardState::new(), |b, &t| b.with_tiger(n(t)));
    goats.iter().fold(board, |b, &g| b.with_goat(n(g)))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_place_first_goat() {
    let board = BoardState::initial();
    let (board, goat) = place_goat(n(1), &board, PieceId::new(4));

    assert_eq!(board.goat_count(), 1);
    assert_eq!(board.piece_at(n(1)), Some(&goat));
    assert_eq!(goat.role, Role::Goat);
    assert_eq!(board.tiger_count(), 3);
}

#[test]
fn test_tiger_captures_over_adjacent_goat() {
    let board = BoardState::initial();
    let (board, _) = place_goat(n(4), &board, PieceId::new(4));
    // Free node 5 so the jump 2 -> 4 -> 5 has somewhere to land.
    let tiger_on_5 = *board.piece_at(n(5)).unwrap();
    let (board, _) = apply_move(&tiger_on_5, n(9), &board);

    let tiger = *board.piece_at(n(2)).unwrap();
    let targets = legal_targets(&tiger, &board, TOTAL_GOATS - 1);
    assert!(targets.contains(n(5)));

    let (after, record) = apply_move(&tiger, n(5), &board);

    assert_eq!(record.kind, MoveKind::Capture);
    assert_eq!(record.captured, Some(n(4)));
    assert!(!after.is_occupied(n(4)));
    assert_eq!(after.piece_at(n(5)).map(|p| p.id), Some(tiger.id));
    assert!(!after.is_occupied(n(2)));
    assert_eq!(after.goat_count(), 0);
}

#[test]
fn test_repeated_captures_leave_tigers_winning() {
    let board = board_with(&[2, 13], &[4, 9, 11, 20]);
    assert_eq!(evaluate(&board, TOTAL_GOATS), None);

    // 2 jumps 4 landing on 7.
    let tiger = *board.piece_at(n(2)).unwrap();
    let (board, record) = apply_move(&tiger, n(7), &board);
    assert_eq!(record.kind, MoveKind::Capture);

    assert_eq!(board.goat_count(), 3);
    assert_eq!(evaluate(&board, TOTAL_GOATS), Some(GameResult::TigerWins));
}

#[test]
fn test_surrounded_tigers_lose() {
    let board = board_with(&[1, 11, 15], &[2, 3, 4, 5, 6, 9, 10, 12, 13, 14]);

    for tiger in board.tigers() {
        assert!(legal_targets(tiger, &board, 0).is_empty(), "{} can move", tiger.id);
    }
    assert!(!has_any_move(Role::Tiger, &board, 0));
    assert_eq!(evaluate(&board, TOTAL_GOATS), Some(GameResult::GoatWins));
}

#[test]
fn test_goat_count_wins_over_mobility() {
    // Tiger on 11 is boxed in by 10 with 6 and 9 behind it, yet three goats
    // is too few.
    let board = board_with(&[11], &[6, 9, 10]);
    assert!(!has_any_move(Role::Tiger, &board, 0));
    assert_eq!(evaluate(&board, TOTAL_GOATS), Some(GameResult::TigerWins));
}

// =============================================================================
// Move generation
// =============================================================================

#[test]
fn test_placement_targets_are_empty_nodes() {
    let board = board_with(&[2, 3, 5], &[1, 23]);
    let targets = placement_targets(&board);

    assert_eq!(targets.len(), 18);
    assert_eq!(targets, board.occupied().complement());

    let goat = *board.piece_at(n(1)).unwrap();
    assert_eq!(legal_targets(&goat, &board, 5), targets);
}

#[test]
fn test_goat_steps_after_placement() {
    let board = board_with(&[2, 3, 5], &[8]);
    let goat = *board.piece_at(n(8)).unwrap();

    // 8 -> [4, 5, 7, 9]; 5 is a tiger.
    assert_eq!(legal_targets(&goat, &board, 0), set(&[4, 7, 9]));
}

#[test]
fn test_goat_never_jumps() {
    // Goat on 2 with a goat on 4 and 7 free: no jump for goats.
    let board = board_with(&[], &[2, 4]);
    let goat = *board.piece_at(n(2)).unwrap();
    assert!(!legal_targets(&goat, &board, 0).contains(n(7)));
}

#[test]
fn test_tiger_cannot_jump_tiger() {
    let board = board_with(&[2, 4], &[]);
    let tiger = *board.piece_at(n(2)).unwrap();
    assert!(capture_moves(n(2), &board).is_empty());
    assert!(!legal_targets(&tiger, &board, 0).contains(n(7)));
}

#[test]
fn test_blocked_landing_prevents_capture() {
    let board = board_with(&[2], &[4, 5, 7, 8]);
    let tiger = *board.piece_at(n(2)).unwrap();
    let targets = legal_targets(&tiger, &board, 0);

    // Over 4 every landing is taken; 1 and 3 are free steps; 5 is a goat but
    // 5's far side has 3, 6 and 9 free.
    assert!(!targets.contains(n(7)));
    assert!(!targets.contains(n(8)));
    assert!(targets.contains(n(1)));
    assert!(targets.contains(n(6)));
}

#[test]
fn test_every_placement_target_can_be_applied() {
    let board = board_with(&[2, 3, 5], &[1]);
    let goat = *board.piece_at(n(1)).unwrap();

    for to in legal_targets(&goat, &board, TOTAL_GOATS - 1) {
        let (after, record) = apply_move(&goat, to, &board);
        assert!(after.has_goat_at(to));
        assert_eq!(record.kind, MoveKind::Move);
        assert_eq!(after.len(), board.len());
    }
}

#[test]
fn test_one_way_edges_follow_source_list() {
    // 11 lists 10 but 10 does not list 11.
    let topo = Topology::standard();
    assert!(topo.is_adjacent(n(11), n(10)));
    assert!(!topo.is_adjacent(n(10), n(11)));

    let board = board_with(&[10], &[]);
    let tiger = *board.piece_at(n(10)).unwrap();
    assert!(!legal_targets(&tiger, &board, 0).contains(n(11)));

    let board = board_with(&[11], &[]);
    let tiger = *board.piece_at(n(11)).unwrap();
    assert_eq!(legal_targets(&tiger, &board, 0), set(&[10]));
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn test_rules_leave_input_untouched() {
    let board = board_with(&[2, 3, 5], &[4, 9, 13]);
    let snapshot = board.clone();

    for piece in board.pieces() {
        for to in legal_targets(piece, &board, 0) {
            let _ = apply_move(piece, to, &board);
        }
    }
    let _ = evaluate(&board, TOTAL_GOATS);

    assert_eq!(board, snapshot);
}
