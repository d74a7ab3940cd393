//! The board: fixed topology plus the pieces standing on it.
//!
//! - `topology`: adjacency graph and display coordinates (immutable, static)
//! - `state`: persistent set of pieces with a node index

pub mod topology;
pub mod state;

pub use topology::Topology;
pub use state::{BoardError, BoardState};
