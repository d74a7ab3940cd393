//! Roles and pieces.
//!
//! ## Role
//!
//! The two sides of the game. Role-specific rules are branched on this enum
//! inside the move generator rather than modelled as separate piece types.
//!
//! ## Piece
//!
//! One tiger or goat on the board. Pieces have a stable [`PieceId`] that is
//! never reused within a game: tigers get ids `1..=3`, goats are numbered
//! from `4` upward in placement order.

use serde::{Deserialize, Serialize};

use super::node::{Coord, NodeId};
use crate::board::Topology;

/// Which side a piece (or a turn) belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tiger,
    Goat,
}

impl Role {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Role::Tiger => Role::Goat,
            Role::Goat => Role::Tiger,
        }
    }

    /// Plural label used in status text ("Tigers", "Goats").
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Role::Tiger => "Tigers",
            Role::Goat => "Goats",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Tiger => write!(f, "tiger"),
            Role::Goat => write!(f, "goat"),
        }
    }
}

/// Unique identifier of a piece within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A tiger or goat at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub role: Role,
    pub position: NodeId,
}

impl Piece {
    #[must_use]
    pub const fn new(id: PieceId, role: Role, position: NodeId) -> Self {
        Self { id, role, position }
    }

    #[must_use]
    pub const fn tiger(id: PieceId, position: NodeId) -> Self {
        Self::new(id, Role::Tiger, position)
    }

    #[must_use]
    pub const fn goat(id: PieceId, position: NodeId) -> Self {
        Self::new(id, Role::Goat, position)
    }

    #[must_use]
    pub const fn is_tiger(&self) -> bool {
        matches!(self.role, Role::Tiger)
    }

    #[must_use]
    pub const fn is_goat(&self) -> bool {
        matches!(self.role, Role::Goat)
    }

    /// Copy of this piece standing on `position`.
    #[must_use]
    pub const fn relocated(self, position: NodeId) -> Self {
        Self { position, ..self }
    }

    /// Display coordinate of the piece's current node.
    #[must_use]
    pub fn coord(&self) -> Coord {
        Topology::standard().coord(self.position)
    }
}
