//! The rules of the game.
//!
//! - `movegen`: legal destinations for a piece
//! - `apply`: relocating pieces, resolving captures, placing goats
//! - `win`: terminal conditions
//!
//! Everything here is a pure function of its arguments. Callers own the
//! `BoardState` and replace it with the value these functions return.

pub mod movegen;
pub mod apply;
pub mod win;

pub use movegen::{capture_moves, has_any_move, legal_moves, legal_targets, placement_targets, step_moves};
pub use apply::{apply_explicit, apply_move, place_goat, resolve_move};
pub use win::{evaluate, evaluate_in_play, judge, GameResult};
