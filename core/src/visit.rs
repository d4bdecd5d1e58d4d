//! Graph traits: a uniform, read-only view over a vertex set, adjacency,
//! edge multiplicity, and degree.
//!
//! Modeled on `petgraph`'s `visit` module: one small trait per capability,
//! composed by the algorithms that need them, rather than one large
//! interface every graph type must implement in full.

/// The identifier type a graph uses for its vertices.
pub trait GraphBase {
    /// Vertex identifier. Must be cheap to copy and usable as a hash-map
    /// key, since the solver keeps several maps and sets keyed by it.
    type NodeId: Copy + Eq + core::hash::Hash + core::fmt::Debug;
}

impl<'a, G> GraphBase for &'a G
where
    G: GraphBase,
{
    type NodeId = G::NodeId;
}

/// A copyable reference to a graph. Algorithms take `G: GraphRef` by value
/// and pass it around freely instead of threading a `&G` through every
/// helper function.
pub trait GraphRef: Copy + GraphBase {}

impl<'a, G> GraphRef for &'a G where G: GraphBase {}

/// `|V|`.
pub trait NodeCount: GraphBase {
    fn node_count(&self) -> usize;
}

impl<'a, G> NodeCount for &'a G
where
    G: NodeCount,
{
    fn node_count(&self) -> usize {
        (*self).node_count()
    }
}

/// Access to the sequence of the graph's vertex identifiers.
pub trait IntoNodeIdentifiers: GraphRef {
    type NodeIdentifiers: Iterator<Item = Self::NodeId>;
    fn node_identifiers(self) -> Self::NodeIdentifiers;
}

/// Maps vertex identifiers to and from a dense `0..node_bound()` index
/// space, so the solver can use plain `Vec`/`FixedBitSet` storage instead
/// of hash maps keyed by `NodeId`.
pub trait NodeIndexable: GraphBase {
    /// An upper bound on the indices returned by `to_index`; indices are
    /// not required to be contiguous, only to fall in `0..node_bound()`.
    fn node_bound(&self) -> usize;
    fn to_index(&self, id: Self::NodeId) -> usize;
    fn from_index(&self, index: usize) -> Self::NodeId;
}

/// Access to the distinct neighbors of a vertex: each adjacent vertex is
/// yielded exactly once, even across parallel edges in the multi variant.
pub trait IntoNeighbors: GraphRef {
    type Neighbors: Iterator<Item = Self::NodeId>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors;
}

/// `O(1)` vertex degree. For the multi variant this counts edges, not
/// distinct neighbors (a vertex joined to another by two parallel edges has
/// degree 2, but one entry in `neighbors`); a self-loop counts twice,
/// matching the convention `networkx` and `petgraph` both use.
pub trait Degree: GraphBase {
    fn degree(&self, a: Self::NodeId) -> usize;
}

/// Edge multiplicity between an (ordered, but the graph is undirected so
/// the order doesn't matter) pair of vertices. `0` when there's no edge, `1`
/// for a simple-graph edge, and the parallel-edge count for the multi
/// variant. `edge_multiplicity(v, v)` is the self-loop count at `v`.
pub trait EdgeMultiplicity: GraphBase {
    fn edge_multiplicity(&self, a: Self::NodeId, b: Self::NodeId) -> usize;
}

/// The composite bound every solver component is generic over: everything
/// needed to read a graph's structure, nothing about how it's stored.
pub trait GraphAdapter:
    GraphRef + NodeCount + IntoNodeIdentifiers + NodeIndexable + IntoNeighbors + Degree + EdgeMultiplicity
{
}

impl<G> GraphAdapter for G where
    G: GraphRef
        + NodeCount
        + IntoNodeIdentifiers
        + NodeIndexable
        + IntoNeighbors
        + Degree
        + EdgeMultiplicity
{
}
