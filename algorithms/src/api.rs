//! The crate's four public entry points, grounded on the convenience
//! functions the VF2++ reference implementation exposes
//! (`vf2pp_is_isomorphic`, `vf2pp_subgraph_is_isomorphic`,
//! `vf2pp_is_isomorphic_iter`) and, for the builder-free style, on the
//! teacher's plain top-level `petgraph::algo::isomorphism::is_isomorphic`
//! function rather than its `Vf2ppMatcherBuilder`.
//!
//! Every entry point here takes the container graph first and the pattern
//! graph second, matching the spec's `(G1, G2)` convention -- `G1` is the
//! (at-least-as-large) graph searched *within*, `G2` the one searched
//! *for*. The search itself still drives off the pattern (see the
//! `g0`/`g1` naming throughout `candidates.rs`, `feasibility.rs`,
//! `driver.rs`, where `g0` is always the pattern), so these wrappers swap
//! the argument order before handing off to [`Search`].

use std::hash::Hash;

use vf2pp_core::label::NodeLabeling;
use vf2pp_core::visit::GraphAdapter;

use crate::driver::Search;
use crate::error::InvalidInput;
use crate::indexes::Indexes;
use crate::mapping::Mapping;
use crate::mode::Mode;
use crate::precheck::precheck;

/// Searches for one mapping from `pattern` into `container` under `mode`.
/// `Ok(None)` means the graphs have no such mapping; it is not an error.
/// `Err` means the inputs themselves violated the `GraphAdapter` contract
/// (see [`InvalidInput`]).
pub fn mapping<C, P, LC, LP>(
    container: C,
    pattern: P,
    labels_container: &mut LC,
    labels_pattern: &mut LP,
    mode: Mode,
) -> Result<Option<Mapping<P::NodeId, C::NodeId>>, error_stack::Report<InvalidInput>>
where
    C: GraphAdapter,
    P: GraphAdapter,
    LC: NodeLabeling<C>,
    LP: NodeLabeling<P, Label = LC::Label>,
{
    validate_degrees(container)?;
    validate_degrees(pattern)?;

    let indexes = Indexes::build(pattern, container, labels_pattern, labels_container);
    if precheck(pattern, container, &indexes, mode).is_err() {
        return Ok(None);
    }

    let mut search = Search::new(pattern, container, indexes, mode);
    if !search.advance() {
        return Ok(None);
    }
    Ok(Some(collect_mapping(pattern, container, &search)))
}

/// Whether `pattern` embeds into `container` as a subgraph under
/// [`Mode::Sub`]: every edge of `pattern` (with at least its multiplicity)
/// appears somewhere in `container`, but `container` may have extra edges
/// and extra vertices.
pub fn subgraph_is_isomorphic<C, P, LC, LP>(
    container: C,
    pattern: P,
    labels_container: &mut LC,
    labels_pattern: &mut LP,
) -> Result<bool, error_stack::Report<InvalidInput>>
where
    C: GraphAdapter,
    P: GraphAdapter,
    LC: NodeLabeling<C>,
    LP: NodeLabeling<P, Label = LC::Label>,
{
    mapping(container, pattern, labels_container, labels_pattern, Mode::Sub).map(|m| m.is_some())
}

/// Whether `pattern` embeds into `container` as an *induced* subgraph
/// under [`Mode::Ind`]: the subgraph of `container` induced by the image
/// of the mapping matches `pattern` exactly, edge for edge and non-edge
/// for non-edge.
pub fn induced_subgraph_is_isomorphic<C, P, LC, LP>(
    container: C,
    pattern: P,
    labels_container: &mut LC,
    labels_pattern: &mut LP,
) -> Result<bool, error_stack::Report<InvalidInput>>
where
    C: GraphAdapter,
    P: GraphAdapter,
    LC: NodeLabeling<C>,
    LP: NodeLabeling<P, Label = LC::Label>,
{
    mapping(container, pattern, labels_container, labels_pattern, Mode::Ind).map(|m| m.is_some())
}

/// Lazily enumerates every mapping from `pattern` to `container` under
/// `mode`, in the order the search finds them. Dropped mid-iteration, it
/// simply stops searching; nothing is precomputed beyond the first
/// mapping's setup.
pub fn all_mappings<C, P, LC, LP>(
    container: C,
    pattern: P,
    labels_container: &mut LC,
    labels_pattern: &mut LP,
    mode: Mode,
) -> Result<AllMappings<P, C, LC::Label>, error_stack::Report<InvalidInput>>
where
    C: GraphAdapter,
    P: GraphAdapter,
    LC: NodeLabeling<C>,
    LP: NodeLabeling<P, Label = LC::Label>,
{
    validate_degrees(container)?;
    validate_degrees(pattern)?;

    let indexes = Indexes::build(pattern, container, labels_pattern, labels_container);
    let search = if precheck(pattern, container, &indexes, mode).is_ok() {
        Some(Search::new(pattern, container, indexes, mode))
    } else {
        None
    };

    Ok(AllMappings { g0: pattern, g1: container, search })
}

/// Iterator returned by [`all_mappings`]. Field names follow the same
/// `g0` (pattern) / `g1` (container) convention as [`Search`].
pub struct AllMappings<G0, G1, L>
where
    G0: GraphAdapter,
    G1: GraphAdapter,
{
    g0: G0,
    g1: G1,
    search: Option<Search<G0, G1, L>>,
}

impl<G0, G1, L> Iterator for AllMappings<G0, G1, L>
where
    G0: GraphAdapter,
    G1: GraphAdapter,
    L: Copy + Eq + Hash,
{
    type Item = Mapping<G0::NodeId, G1::NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        let search = self.search.as_mut()?;
        if search.advance() {
            Some(collect_mapping(self.g0, self.g1, search))
        } else {
            self.search = None;
            None
        }
    }
}

fn collect_mapping<G0, G1, L>(g0: G0, g1: G1, search: &Search<G0, G1, L>) -> Mapping<G0::NodeId, G1::NodeId>
where
    G0: GraphAdapter,
    G1: GraphAdapter,
    L: Copy + Eq + Hash,
{
    let pairs: Vec<(usize, usize)> = search.current_pairs().collect();
    let mut result = Mapping::with_capacity(pairs.len());
    for (u, v) in pairs {
        result.insert(g0.from_index(u), g1.from_index(v));
    }
    result
}

/// Confirms `Degree` agrees with `neighbors`/`edge_multiplicity` for every
/// vertex -- a `GraphAdapter` contract violation, not an "are they
/// isomorphic" question, so it is checked once up front rather than
/// tripping obscurely deep in the search.
fn validate_degrees<G>(g: G) -> Result<(), error_stack::Report<InvalidInput>>
where
    G: GraphAdapter,
{
    for v in g.node_identifiers() {
        let mut total = 0usize;
        for nb in g.neighbors(v) {
            let mult = g.edge_multiplicity(v, nb);
            total += if nb == v { 2 * mult } else { mult };
        }
        if total != g.degree(v) {
            return Err(error_stack::Report::new(InvalidInput::InconsistentDegree {
                node: g.to_index(v),
            }));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SimpleGraph;
    use vf2pp_core::label::NoLabels;

    #[test]
    fn is_isomorphic_finds_a_mapping_for_automorphic_graphs() {
        let g0 = SimpleGraph::new(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let g1 = SimpleGraph::new(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut l0 = NoLabels;
        let mut l1 = NoLabels;
        let m = mapping(&g0, &g1, &mut l0, &mut l1, Mode::Iso).unwrap();
        assert!(m.is_some());
        let m = m.unwrap();
        assert_eq!(m.len(), 4);
        for (u, v) in m.iter() {
            assert_eq!(m.preimage_of(v), Some(u));
        }
    }

    #[test]
    fn all_mappings_enumerates_every_automorphism_of_a_four_cycle() {
        let g0 = SimpleGraph::new(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let g1 = SimpleGraph::new(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut l0 = NoLabels;
        let mut l1 = NoLabels;
        let count = all_mappings(&g0, &g1, &mut l0, &mut l1, Mode::Iso)
            .unwrap()
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn subgraph_is_isomorphic_accepts_a_triangle_inside_k4() {
        let container = SimpleGraph::new(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let pattern = SimpleGraph::new(3, [(0, 1), (1, 2), (2, 0)]);
        let mut lc = NoLabels;
        let mut lp = NoLabels;
        assert!(subgraph_is_isomorphic(&container, &pattern, &mut lc, &mut lp).unwrap());
    }

    #[test]
    fn induced_subgraph_is_isomorphic_rejects_a_path_inside_a_triangle() {
        let container = SimpleGraph::new(3, [(0, 1), (1, 2), (2, 0)]);
        let pattern = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let mut lc = NoLabels;
        let mut lp = NoLabels;
        assert!(!induced_subgraph_is_isomorphic(&container, &pattern, &mut lc, &mut lp).unwrap());
    }

    #[test]
    fn empty_target_yields_no_mapping_even_for_an_empty_pattern() {
        let g0 = SimpleGraph::new(0, []);
        let g1 = SimpleGraph::new(0, []);
        let mut l0 = NoLabels;
        let mut l1 = NoLabels;
        let m = mapping(&g0, &g1, &mut l0, &mut l1, Mode::Iso).unwrap();
        assert!(m.is_none());
    }

    #[test]
    fn empty_pattern_against_a_nonempty_container_is_not_a_subgraph() {
        let container = SimpleGraph::new(2, [(0, 1)]);
        let pattern = SimpleGraph::new(0, []);
        let mut lc = NoLabels;
        let mut lp = NoLabels;
        assert!(!subgraph_is_isomorphic(&container, &pattern, &mut lc, &mut lp).unwrap());
    }
}
