//! Static board geometry.
//!
//! The adjacency table is reproduced exactly as the board was authored,
//! including entries that only point one way (node 11 lists 10, but 10 does
//! not list 11). Adjacency is therefore *directed*: `is_adjacent(a, b)` asks
//! whether `b` appears in `a`'s list. [`Topology::asymmetric_edges`] reports
//! the one-way entries.
//!
//! Lookups are O(1): neighbor lists and neighbor bitsets are built at compile
//! time into a single `static`.

use crate::core::{Coord, NodeId, NodeSet, NODE_COUNT};

macro_rules! nodes {
    ($($n:literal),* $(,)?) => {
        &[$(NodeId::new($n)),*]
    };
}

/// Neighbor lists indexed by `node - 1`, in authored order.
const ADJACENCY: [&[NodeId]; NODE_COUNT as usize] = [
    nodes![2, 3],              // 1
    nodes![1, 4, 5, 3],        // 2
    nodes![1, 2, 5, 6],        // 3
    nodes![2, 5, 7, 8],        // 4
    nodes![2, 3, 4, 6, 8, 9],  // 5
    nodes![3, 5, 9, 10],       // 6
    nodes![4, 8],              // 7
    nodes![4, 5, 7, 9],        // 8
    nodes![5, 6, 8, 10],       // 9
    nodes![6, 9],              // 10
    nodes![10],                // 11
    nodes![8, 13],             // 12
    nodes![9, 12, 14, 15],     // 13
    nodes![10, 13],            // 14
    nodes![13],                // 15
    nodes![2, 3, 5],           // 16
    nodes![4, 5, 8],           // 17
    nodes![5, 6, 9],           // 18
    nodes![5, 8, 9, 13],       // 19
    nodes![8, 12, 22],         // 20
    nodes![9, 14, 23],         // 21
    nodes![12, 20],            // 22
    nodes![14, 21],            // 23
];

const COORDS: [Coord; NODE_COUNT as usize] = [
    Coord::new(200, 30),
    Coord::new(130, 90),
    Coord::new(270, 90),
    Coord::new(80, 160),
    Coord::new(200, 160),
    Coord::new(320, 160),
    Coord::new(40, 230),
    Coord::new(130, 230),
    Coord::new(200, 230),
    Coord::new(270, 230),
    Coord::new(360, 230),
    Coord::new(90, 300),
    Coord::new(200, 300),
    Coord::new(310, 300),
    Coord::new(200, 370),
    Coord::new(200, 100),
    Coord::new(120, 130),
    Coord::new(280, 130),
    Coord::new(200, 200),
    Coord::new(80, 270),
    Coord::new(320, 270),
    Coord::new(130, 340),
    Coord::new(270, 340),
];

static STANDARD: Topology = Topology::build();

/// Adjacency and display coordinates of the 23-node board.
#[derive(Debug)]
pub struct Topology {
    adjacency: [&'static [NodeId]; NODE_COUNT as usize],
    neighbor_sets: [NodeSet; NODE_COUNT as usize],
    coords: [Coord; NODE_COUNT as usize],
}

impl Topology {
    const fn build() -> Self {
        let mut neighbor_sets = [NodeSet::empty(); NODE_COUNT as usize];
        let mut i = 0;
        while i < ADJACENCY.len() {
            let list = ADJACENCY[i];
            let mut set = NodeSet::empty();
            let mut j = 0;
            while j < list.len() {
                set = set.with(list[j]);
                j += 1;
            }
            neighbor_sets[i] = set;
            i += 1;
        }

        Self {
            adjacency: ADJACENCY,
            neighbor_sets,
            coords: COORDS,
        }
    }

    /// The board every game is played on.
    #[must_use]
    pub fn standard() -> &'static Topology {
        &STANDARD
    }

    /// Neighbors of `node`, in authored order.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &'static [NodeId] {
        self.adjacency[node.index()]
    }

    /// Neighbors of `node` as a set.
    #[must_use]
    pub fn neighbor_set(&self, node: NodeId) -> NodeSet {
        self.neighbor_sets[node.index()]
    }

    /// Does `to` appear in `from`'s neighbor list?
    #[must_use]
    pub fn is_adjacent(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbor_sets[from.index()].contains(to)
    }

    #[must_use]
    pub fn coord(&self, node: NodeId) -> Coord {
        self.coords[node.index()]
    }

    /// Every node with its coordinate, in ascending node order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Coord)> + '_ {
        NodeId::all().map(move |node| (node, self.coord(node)))
    }

    /// Every directed edge `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        NodeId::all().flat_map(move |from| self.neighbors(from).iter().map(move |&to| (from, to)))
    }

    /// Directed edges whose reverse edge is missing.
    #[must_use]
    pub fn asymmetric_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.edges()
            .filter(|&(from, to)| !self.is_adjacent(to, from))
            .collect()
    }
}
