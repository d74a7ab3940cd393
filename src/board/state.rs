//! Board state: which pieces stand where.
//!
//! `BoardState` is a persistent value. Cloning is O(1) (it is built on `im`
//! structures), so the rules functions take `&BoardState` and hand back a new
//! state instead of mutating the caller's copy.
//!
//! ## Invariant
//!
//! At most one piece occupies any node. Every mutating method enforces this
//! and panics on violation, because a collision can only come from a caller
//! that skipped the move generator.
//!
//! ## Usage
//!
//! ```
//! use aadu_puli::board::BoardState;
//! use aadu_puli::core::NodeId;
//!
//! let board = BoardState::new()
//!     .with_tiger(NodeId::new(2))
//!     .with_goat(NodeId::new(4));
//!
//! assert_eq!(board.goat_count(), 1);
//! assert!(board.is_occupied(NodeId::new(4)));
//! assert!(board.piece_at(NodeId::new(2)).unwrap().is_tiger());
//! ```

use std::hash::BuildHasherDefault;

use derive_more::{Display, Error};
use im::{HashMap as ImHashMap, OrdMap};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::{NodeId, NodeSet, Piece, PieceId, Role, TIGER_START};

type NodeIndex = ImHashMap<NodeId, PieceId, BuildHasherDefault<FxHasher>>;

/// Rejected when assembling a board from untrusted pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("{node} is occupied more than once")]
    Occupied { node: NodeId },

    #[display("{piece} appears more than once")]
    DuplicatePiece { piece: PieceId },
}

/// The set of pieces on the board.
///
/// Pieces are kept ordered by id (tigers first, then goats in placement
/// order) so iteration is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct BoardState {
    pieces: OrdMap<PieceId, Piece>,
    by_node: NodeIndex,
    occupancy: NodeSet,
}

impl BoardState {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The starting position: three tigers, no goats.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::new();
        for (i, &node) in TIGER_START.iter().enumerate() {
            board.add(Piece::tiger(PieceId::new(i as u32 + 1), node));
        }
        board
    }

    /// Build a board from pieces, rejecting collisions.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for piece in pieces {
            if board.pieces.contains_key(&piece.id) {
                return Err(BoardError::DuplicatePiece { piece: piece.id });
            }
            if board.is_occupied(piece.position) {
                return Err(BoardError::Occupied { node: piece.position });
            }
            board.add(piece);
        }
        Ok(board)
    }

    /// Copy of this board with a new tiger at `node`.
    ///
    /// The id is one past the highest id on the board. Panics if `node` is
    /// occupied.
    #[must_use]
    pub fn with_tiger(self, node: NodeId) -> Self {
        self.with_role(Role::Tiger, node)
    }

    /// Copy of this board with a new goat at `node`.
    ///
    /// The id is one past the highest id on the board. Panics if `node` is
    /// occupied.
    #[must_use]
    pub fn with_goat(self, node: NodeId) -> Self {
        self.with_role(Role::Goat, node)
    }

    fn with_role(mut self, role: Role, node: NodeId) -> Self {
        let id = self
            .pieces
            .get_max()
            .map_or(PieceId::new(1), |(id, _)| PieceId::new(id.raw() + 1));
        self.add(Piece::new(id, role, node));
        self
    }

    // === Queries ===

    /// All pieces, ordered by id.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn tigers(&self) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(|p| p.is_tiger())
    }

    pub fn goats(&self) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(|p| p.is_goat())
    }

    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    #[must_use]
    pub fn piece_at(&self, node: NodeId) -> Option<&Piece> {
        self.by_node.get(&node).and_then(|id| self.pieces.get(id))
    }

    #[must_use]
    pub fn is_occupied(&self, node: NodeId) -> bool {
        self.occupancy.contains(node)
    }

    /// Is there a goat on `node`?
    #[must_use]
    pub fn has_goat_at(&self, node: NodeId) -> bool {
        self.piece_at(node).is_some_and(Piece::is_goat)
    }

    /// Nodes holding any piece.
    #[must_use]
    pub fn occupied(&self) -> NodeSet {
        self.occupancy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn goat_count(&self) -> usize {
        self.goats().count()
    }

    #[must_use]
    pub fn tiger_count(&self) -> usize {
        self.tigers().count()
    }

    // === Mutation (crate-internal; rules functions work on clones) ===

    /// Put a new piece on the board.
    pub(crate) fn add(&mut self, piece: Piece) {
        assert!(
            !self.is_occupied(piece.position),
            "cannot add {} at occupied {}",
            piece.id,
            piece.position
        );
        assert!(!self.pieces.contains_key(&piece.id), "{} already on the board", piece.id);

        self.by_node.insert(piece.position, piece.id);
        self.occupancy.insert(piece.position);
        self.pieces.insert(piece.id, piece);
    }

    /// Move a piece to an empty node. Returns the piece as it now stands.
    pub(crate) fn relocate(&mut self, id: PieceId, to: NodeId) -> Piece {
        let piece = *self.pieces.get(&id).unwrap_or_else(|| panic!("{id} is not on the board"));
        assert!(!self.is_occupied(to), "cannot move {id} onto occupied {to}");

        self.by_node.remove(&piece.position);
        self.occupancy.remove(piece.position);

        let moved = piece.relocated(to);
        self.by_node.insert(to, id);
        self.occupancy.insert(to);
        self.pieces.insert(id, moved);
        moved
    }

    /// Take the piece standing on `node` off the board.
    pub(crate) fn remove_at(&mut self, node: NodeId) -> Option<Piece> {
        let id = self.by_node.remove(&node)?;
        self.occupancy.remove(node);
        self.pieces.remove(&id)
    }
}

impl TryFrom<Vec<Piece>> for BoardState {
    type Error = BoardError;

    fn try_from(pieces: Vec<Piece>) -> Result<Self, Self::Error> {
        Self::from_pieces(pieces)
    }
}

impl From<BoardState> for Vec<Piece> {
    fn from(board: BoardState) -> Self {
        board.pieces.values().copied().collect()
    }
}
