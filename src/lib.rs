//! # aadu-puli
//!
//! Rules engine for a tigers-and-goats hunt game played on a fixed 23-node
//! board.
//!
//! ## Rules in brief
//!
//! - Three tigers start on nodes 2, 3 and 5. Fifteen goats enter the board
//!   one at a time, goats moving first.
//! - While goats are being placed, a goat turn is a placement and tigers
//!   move normally.
//! - Pieces step to an empty neighbor. A tiger may instead jump an adjacent
//!   goat onto an empty node beyond it, capturing the goat.
//! - Tigers win when too few goats remain. Goats win when no tiger can move.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: move generation, move application and win evaluation
//!    are functions of a `BoardState`. They never mutate their input.
//!
//! 2. **Cheap snapshots**: `BoardState` is built on `im` persistent maps, so
//!    cloning a position for search or undo is O(1).
//!
//! 3. **No silent corruption**: the controller validates every input and
//!    rejects what does not fit; the rules panic on contract violations.
//!
//! ## Modules
//!
//! - `core`: node ids, node sets, pieces, moves, configuration, RNG
//! - `board`: topology and board state
//! - `rules`: move generation, application, win evaluation
//! - `game`: turn and phase controller, automated policies
//!
//! ## Usage
//!
//! ```
//! use aadu_puli::{Game, GameConfig, GameResult, GoatCount, NodeId, PieceId, Role, Transition};
//!
//! // By default only goats on the board count, so one goat is too few as
//! // soon as the tigers have moved.
//! let mut game = Game::default();
//! game.place_goat(NodeId::new(1)).unwrap();
//! game.move_piece(PieceId::new(3), NodeId::new(9)).unwrap();
//! assert_eq!(game.result(), Some(GameResult::TigerWins));
//!
//! // Counting goats still to be placed keeps the game going.
//! let mut game = Game::new(GameConfig::new().with_goat_count(GoatCount::InPlay));
//! game.place_goat(NodeId::new(1)).unwrap();
//! let transition = game.move_piece(PieceId::new(3), NodeId::new(9)).unwrap();
//! assert!(matches!(transition, Transition::Moved { result: None, .. }));
//! assert_eq!(game.turn(), Role::Goat);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Coord, NodeId, NodeSet, NODE_COUNT,
    Piece, PieceId, Role,
    Move, MoveKind, MoveList, MoveRecord,
    GameConfig, GoatCount, TOTAL_GOATS, MIN_GOATS_ON_BOARD,
    GameRng,
};

pub use crate::board::{BoardState, Topology};

pub use crate::rules::{apply_move, evaluate, legal_moves, legal_targets, GameResult};

pub use crate::game::{
    Game, Phase, Transition, Rejection,
    Choice, MovePolicy, RandomPolicy, FirstTargetPolicy,
};
