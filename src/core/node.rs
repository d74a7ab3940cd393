//! Node identification and node sets.
//!
//! The board has exactly [`NODE_COUNT`] intersections, numbered `1..=23`.
//! Node numbering is fixed at compile time, so an out-of-range id is a
//! programming error: [`NodeId::new`] panics on it. Code that translates
//! external input (a clicked position, a parsed string) into a node should use
//! [`NodeId::try_new`] instead.
//!
//! ## Usage
//!
//! ```
//! use aadu_puli::core::{NodeId, NodeSet};
//!
//! let a = NodeId::new(4);
//! let b = NodeId::new(9);
//!
//! let mut set = NodeSet::empty();
//! set.insert(a);
//! set.insert(b);
//!
//! assert!(set.contains(a));
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![a, b]);
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of nodes on the board.
pub const NODE_COUNT: u8 = 23;

/// Identifier of a board intersection, always in `1..=NODE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NodeId(u8);

/// Returned when a raw value does not name a board node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("node {value} is outside 1..=23")]
pub struct InvalidNode {
    /// The rejected raw value.
    pub value: u8,
}

/// Returned when a raw bitmask has bits that do not name board nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("bitmask {bits} has bits outside nodes 1..=23")]
pub struct InvalidNodeSet {
    pub bits: u32,
}

impl NodeId {
    /// Create a node id.
    ///
    /// Panics if `id` is not in `1..=23`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id >= 1 && id <= NODE_COUNT, "node id out of range");
        Self(id)
    }

    /// Create a node id from untrusted input.
    pub const fn try_new(id: u8) -> Result<Self, InvalidNode> {
        if id >= 1 && id <= NODE_COUNT {
            Ok(Self(id))
        } else {
            Err(InvalidNode { value: id })
        }
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Zero-based index, for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate over every node in ascending order.
    pub fn all() -> impl Iterator<Item = NodeId> {
        (1..=NODE_COUNT).map(NodeId)
    }
}

impl TryFrom<u8> for NodeId {
    type Error = InvalidNode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<NodeId> for u8 {
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Display coordinate of a node.
///
/// Presentation only. Rules never look at coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A set of board nodes, stored as a bitmask.
///
/// Bit `n` is set when node `n` is a member. Iteration is in ascending node
/// order, which keeps generator output deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NodeSet(u32);

impl NodeSet {
    const ALL_BITS: u32 = ((1u32 << (NODE_COUNT as u32 + 1)) - 1) & !1;

    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every node on the board.
    #[must_use]
    pub const fn all() -> Self {
        Self(Self::ALL_BITS)
    }

    /// Copy of this set with `node` added.
    #[must_use]
    pub const fn with(self, node: NodeId) -> Self {
        Self(self.0 | (1u32 << node.raw()))
    }

    /// Add a node. Returns `true` if it was not already present.
    pub fn insert(&mut self, node: NodeId) -> bool {
        let bit = 1u32 << node.raw();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Remove a node. Returns `true` if it was present.
    pub fn remove(&mut self, node: NodeId) -> bool {
        let bit = 1u32 << node.raw();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    #[must_use]
    pub const fn contains(self, node: NodeId) -> bool {
        self.0 & (1u32 << node.raw()) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Members of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Nodes not in this set.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(Self::ALL_BITS & !self.0)
    }

    /// Iterate over members in ascending order.
    pub fn iter(self) -> NodeSetIter {
        NodeSetIter(self.0)
    }
}

impl TryFrom<u32> for NodeSet {
    type Error = InvalidNodeSet;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        if bits & !Self::ALL_BITS != 0 {
            return Err(InvalidNodeSet { bits });
        }
        Ok(Self(bits))
    }
}

impl From<NodeSet> for u32 {
    fn from(set: NodeSet) -> Self {
        set.0
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for node in iter {
            set.insert(node);
        }
        set
    }
}

impl Extend<NodeId> for NodeSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        for node in iter {
            self.insert(node);
        }
    }
}

impl IntoIterator for NodeSet {
    type Item = NodeId;
    type IntoIter = NodeSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`NodeSet`].
#[derive(Clone, Debug)]
pub struct NodeSetIter(u32);

impl Iterator for NodeSetIter {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(NodeId(bit as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for NodeSetIter {}
