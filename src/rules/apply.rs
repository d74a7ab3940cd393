//! Applying moves and placements.
//!
//! The applier trusts its caller: the destination must come from the move
//! generator. Contract violations (occupied destination, jumping something
//! that is not a goat, unknown piece) panic rather than produce a board that
//! breaks the one-piece-per-node invariant.
//!
//! ## Capture classification
//!
//! A move is a capture exactly when the moving piece is a tiger and the
//! destination is a jump landing over a goat (see
//! [`capture_moves`](super::movegen::capture_moves)). When a tiger's
//! destination is reachable both by a step and by a jump, [`apply_move`]
//! resolves it as the jump; use [`apply_explicit`] with [`Move::step`] to
//! force the plain step.
//!
//! ## Goats during placement
//!
//! While goats remain to be placed, a goat's legal targets are every empty
//! node. Applying such a target relocates the goat there directly; a goat
//! step is not required to follow an edge. The controller never produces
//! this (a goat turn during placement is a placement), but callers driving
//! the rules directly may.

use tracing::debug;

use crate::board::{BoardState, Topology};
use crate::core::{Move, MoveRecord, NodeId, Piece, PieceId};

use super::movegen::capture_moves;

/// Decide how `piece` reaches `destination`.
///
/// Returns the first jump (in adjacency order of the piece's node) landing on
/// `destination`, otherwise a plain step.
#[must_use]
pub fn resolve_move(piece: &Piece, destination: NodeId, board: &BoardState) -> Move {
    if piece.is_tiger() {
        if let Some(jump) = capture_moves(piece.position, board)
            .into_iter()
            .find(|mv| mv.to == destination)
        {
            return jump;
        }
    }
    Move::step(destination)
}

/// Move `piece` to `destination`, removing a jumped goat if this is a capture.
///
/// `destination` must be one of the piece's legal targets, for any number of
/// goats remaining. Returns the new board and a record of the move; `board`
/// itself is left untouched.
#[must_use]
pub fn apply_move(piece: &Piece, destination: NodeId, board: &BoardState) -> (BoardState, MoveRecord) {
    let mv = resolve_move(piece, destination, board);
    apply_explicit(piece, mv, board)
}

/// Apply a fully specified move.
///
/// Panics if the piece is not on the board at its stated position, if the
/// destination is occupied, or if a jump does not pass over a goat along
/// existing edges. Tiger steps must follow an edge; goat steps need not
/// (see the module docs on placement).
#[must_use]
pub fn apply_explicit(piece: &Piece, mv: Move, board: &BoardState) -> (BoardState, MoveRecord) {
    let topo = Topology::standard();
    let from = piece.position;

    assert_eq!(
        board.get(piece.id).map(|p| p.position),
        Some(from),
        "{} is not on the board at {}",
        piece.id,
        from
    );

    let mut next = board.clone();

    if let Some(over) = mv.over {
        assert!(piece.is_tiger(), "only tigers capture");
        assert!(board.has_goat_at(over), "no goat to jump at {over}");
        assert!(
            topo.is_adjacent(from, over) && topo.is_adjacent(over, mv.to),
            "{from} -> {over} -> {} is not a jump along board edges",
            mv.to
        );
        next.remove_at(over);
    } else {
        debug_assert!(
            piece.is_goat() || topo.is_adjacent(from, mv.to),
            "{from} -> {} is not an edge",
            mv.to
        );
    }

    next.relocate(piece.id, mv.to);
    let record = MoveRecord::new(from, mv, piece.role);

    debug!(
        piece = %piece.id,
        role = %piece.role,
        from = %from,
        to = %mv.to,
        captured = ?mv.over,
        "applied move"
    );

    (next, record)
}

/// Put a new goat with id `id` on the empty node `node`.
///
/// Panics if `node` is occupied or `id` is already in use.
#[must_use]
pub fn place_goat(node: NodeId, board: &BoardState, id: PieceId) -> (BoardState, Piece) {
    let goat = Piece::goat(id, node);
    let mut next = board.clone();
    next.add(goat);
    debug!(piece = %id, node = %node, "placed goat");
    (next, goat)
}
