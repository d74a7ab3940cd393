//! Core engine types: nodes, pieces, moves, configuration, RNG.
//!
//! These are the plain values every other module passes around. Nothing in
//! here knows the board's adjacency; that lives in `board`.

pub mod node;
pub mod piece;
pub mod action;
pub mod config;
pub mod rng;

pub use node::{Coord, InvalidNode, InvalidNodeSet, NodeId, NodeSet, NodeSetIter, NODE_COUNT};
pub use piece::{Piece, PieceId, Role};
pub use action::{Move, MoveKind, MoveList, MoveRecord};
pub use config::{GameConfig, GoatCount, FIRST_TO_MOVE, MIN_GOATS_ON_BOARD, TIGER_START, TOTAL_GOATS};
pub use rng::GameRng;
