/// Which structural relationship between `G1` (the pattern) and `G2` (the
/// target) the search looks for. Named after the spec's three problem modes;
/// the field names `g0`/`g1` used internally throughout this crate follow
/// the teacher's `vf2pp.rs`, where `g0` is the pattern graph whose matching
/// order drives the search and `g1` is the target it is searched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Full isomorphism: a bijection between all of `G1` and all of `G2`
    /// preserving edges, non-edges, and edge multiplicity exactly.
    Iso,
    /// Subgraph isomorphism: an injection from `G1` into `G2` preserving
    /// every edge of `G1` (with at least its multiplicity); `G2` may have
    /// extra edges between mapped vertices, and extra vertices.
    Sub,
    /// Induced subgraph isomorphism: like `Sub`, but the induced subgraph of
    /// `G2` on the image of the mapping must match `G1` exactly, edge for
    /// edge, non-edge for non-edge, multiplicity for multiplicity.
    Ind,
}
