//! Move representation and move records.
//!
//! A [`Move`] is one legal destination for a piece, tagged with the goat it
//! jumps over when it is a capture. The generator produces [`MoveList`]s of
//! these; the applier consumes them.
//!
//! A [`MoveRecord`] is the snapshot handed to presentation code after a move
//! has been applied (used to highlight the last move). It never feeds back
//! into the rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::node::NodeId;
use super::piece::Role;

/// Whether a move was a plain step or a capturing jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Move,
    Capture,
}

/// A single legal destination for a piece.
///
/// ## Example
///
/// ```
/// use aadu_puli::core::{Move, MoveKind, NodeId};
///
/// let step = Move::step(NodeId::new(9));
/// assert_eq!(step.kind(), MoveKind::Move);
///
/// let jump = Move::jump(NodeId::new(4), NodeId::new(7));
/// assert_eq!(jump.kind(), MoveKind::Capture);
/// assert_eq!(jump.captured(), Some(NodeId::new(4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Destination node.
    pub to: NodeId,

    /// Node of the goat jumped over, for captures.
    pub over: Option<NodeId>,
}

impl Move {
    /// A step (or placement) onto `to`.
    #[must_use]
    pub const fn step(to: NodeId) -> Self {
        Self { to, over: None }
    }

    /// A jump over the goat at `over`, landing on `to`.
    #[must_use]
    pub const fn jump(over: NodeId, to: NodeId) -> Self {
        Self { to, over: Some(over) }
    }

    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        match self.over {
            Some(_) => MoveKind::Capture,
            None => MoveKind::Move,
        }
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.over.is_some()
    }

    /// The node whose goat is removed by this move.
    #[must_use]
    pub const fn captured(&self) -> Option<NodeId> {
        self.over
    }
}

/// Moves available to one piece.
///
/// Tigers rarely have more than a handful of options, so eight inline slots
/// avoid heap allocation outside the placement phase.
pub type MoveList = SmallVec<[Move; 8]>;

/// Snapshot of the most recently applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: MoveKind,

    /// Role of the piece that moved.
    pub role: Role,

    /// Node of the captured goat, if any.
    pub captured: Option<NodeId>,

    /// Position of this move in the game (0-based). Set by the controller.
    pub sequence: u32,

    /// Wall-clock time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl MoveRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(from: NodeId, mv: Move, role: Role) -> Self {
        Self {
            from,
            to: mv.to,
            kind: mv.kind(),
            role,
            captured: mv.over,
            sequence: 0,
            timestamp_ms: now_ms(),
        }
    }

    /// Set the sequence number.
    #[must_use]
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
