//! A minimal in-memory multigraph implementing `vf2pp_core::visit` used only
//! by this crate's own unit and integration tests. The host graph library is
//! out of scope for this crate; this fixture plays the role the teacher's
//! `petgraph-dino`/`petgraph-utils` dev-dependencies play for its own tests.
#![cfg(test)]

use std::collections::HashMap;
use std::vec::IntoIter;

use vf2pp_core::visit::{
    Degree, EdgeMultiplicity, GraphBase, IntoNeighbors, IntoNodeIdentifiers, NodeCount, NodeIndexable,
};

/// Undirected multigraph over vertex indices `0..n`. Each edge given to
/// [`SimpleGraph::new`] adds one unit of multiplicity between its endpoints;
/// repeat a pair for a parallel edge, or give `(v, v)` for a self-loop.
pub struct SimpleGraph {
    n: usize,
    adjacency: Vec<HashMap<usize, usize>>,
}

impl SimpleGraph {
    pub fn new(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut adjacency = vec![HashMap::new(); n];
        for (u, v) in edges {
            *adjacency[u].entry(v).or_insert(0) += 1;
            if u != v {
                *adjacency[v].entry(u).or_insert(0) += 1;
            }
        }
        SimpleGraph { n, adjacency }
    }
}

impl GraphBase for SimpleGraph {
    type NodeId = usize;
}

impl NodeCount for SimpleGraph {
    fn node_count(&self) -> usize {
        self.n
    }
}

impl<'a> NodeIndexable for &'a SimpleGraph {
    fn node_bound(&self) -> usize {
        self.n
    }

    fn to_index(&self, id: usize) -> usize {
        id
    }

    fn from_index(&self, index: usize) -> usize {
        index
    }
}

impl<'a> IntoNodeIdentifiers for &'a SimpleGraph {
    type NodeIdentifiers = std::ops::Range<usize>;

    fn node_identifiers(self) -> Self::NodeIdentifiers {
        0..self.n
    }
}

impl<'a> IntoNeighbors for &'a SimpleGraph {
    type Neighbors = IntoIter<usize>;

    fn neighbors(self, a: usize) -> Self::Neighbors {
        let mut ids: Vec<usize> = self.adjacency[a].keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter()
    }
}

impl<'a> Degree for &'a SimpleGraph {
    fn degree(&self, a: usize) -> usize {
        self.adjacency[a]
            .iter()
            .map(|(&nb, &mult)| if nb == a { 2 * mult } else { mult })
            .sum()
    }
}

impl<'a> EdgeMultiplicity for &'a SimpleGraph {
    fn edge_multiplicity(&self, a: usize, b: usize) -> usize {
        self.adjacency[a].get(&b).copied().unwrap_or(0)
    }
}
