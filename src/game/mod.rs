//! Playing a game: turn order, placement phase, selection, automated sides.
//!
//! - `controller`: the `Game` state machine
//! - `error`: why an input was rejected
//! - `policy`: strategies for the automated side

pub mod controller;
pub mod error;
pub mod policy;

pub use controller::{Game, Phase, Transition};
pub use error::Rejection;
pub use policy::{Choice, FirstTargetPolicy, MovePolicy, RandomPolicy};
