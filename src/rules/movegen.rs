//! Move generation.
//!
//! Given a piece, the board, and how many goats are still to be placed,
//! produce every destination the piece may legally take:
//!
//! - **Goat, placement phase** (`goats_remaining > 0`): every empty node.
//! - **Goat, movement phase**: empty neighbors of its node.
//! - **Tiger**: empty neighbors (steps), plus every empty node `L` reachable
//!   by jumping over a neighboring goat `N`, where `N` is listed as a neighbor
//!   of the tiger's node and `L` is listed as a neighbor of `N`.
//!
//! There is no forced capture and no ranking: all options are returned.
//! Every function here is pure.

use tracing::trace;

use crate::board::{BoardState, Topology};
use crate::core::{Move, MoveList, NodeId, NodeSet, Piece, Role};

/// Every destination for `piece`, with the goat jumped for captures.
///
/// A node reachable both by a step and by a jump appears once per way of
/// reaching it. Steps come first, then jumps, each in adjacency order.
#[must_use]
pub fn legal_moves(piece: &Piece, board: &BoardState, goats_remaining: u32) -> MoveList {
    let moves: MoveList = match piece.role {
        Role::Goat if goats_remaining > 0 => placement_targets(board).iter().map(Move::step).collect(),
        Role::Goat => step_moves(piece.position, board),
        Role::Tiger => {
            let mut moves = step_moves(piece.position, board);
            moves.extend(capture_moves(piece.position, board));
            moves
        }
    };
    trace!(piece = %piece.id, role = %piece.role, count = moves.len(), "generated moves");
    moves
}

/// Destination nodes for `piece`. Equal to the `to` nodes of [`legal_moves`].
#[must_use]
pub fn legal_targets(piece: &Piece, board: &BoardState, goats_remaining: u32) -> NodeSet {
    legal_moves(piece, board, goats_remaining)
        .iter()
        .map(|mv| mv.to)
        .collect()
}

/// Empty nodes, where a new goat may be placed.
#[must_use]
pub fn placement_targets(board: &BoardState) -> NodeSet {
    board.occupied().complement()
}

/// Steps onto empty neighbors of `from`.
#[must_use]
pub fn step_moves(from: NodeId, board: &BoardState) -> MoveList {
    Topology::standard()
        .neighbors(from)
        .iter()
        .filter(|&&to| !board.is_occupied(to))
        .map(|&to| Move::step(to))
        .collect()
}

/// Jumps from `from` over a neighboring goat onto an empty node.
///
/// Only the occupancy and adjacency are consulted; the caller decides
/// whether the piece at `from` is allowed to capture.
#[must_use]
pub fn capture_moves(from: NodeId, board: &BoardState) -> MoveList {
    let topo = Topology::standard();
    let mut jumps = MoveList::new();

    for &over in topo.neighbors(from) {
        if !board.has_goat_at(over) {
            continue;
        }
        for &landing in topo.neighbors(over) {
            if landing != from && !board.is_occupied(landing) {
                jumps.push(Move::jump(over, landing));
            }
        }
    }

    jumps
}

/// Does any piece of `role` have at least one legal move?
#[must_use]
pub fn has_any_move(role: Role, board: &BoardState, goats_remaining: u32) -> bool {
    board
        .pieces()
        .filter(|p| p.role == role)
        .any(|p| !legal_moves(p, board, goats_remaining).is_empty())
}
