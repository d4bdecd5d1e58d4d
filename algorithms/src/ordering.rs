//! The matching-order heuristic: the sequence in which `g0`'s vertices are
//! introduced to the search, chosen so that every vertex (after the first in
//! its connected component) already has at least one already-ordered
//! neighbor to anchor its candidate search on.
//!
//! Grounded on `init_matching_ordering`/`bfs_search_ordering` in the
//! teacher's (historical) `src/algo/isomorphism/vf2pp.rs`: process
//! components one at a time, root each on the rarest-labeled,
//! highest-degree vertex, then grow outward in BFS layers, breaking ties
//! within a layer by (connectivity to already-ordered vertices, degree,
//! label rarity, vertex id). Implemented here as a direct per-vertex greedy
//! selection instead of the teacher's `BinaryHeap`-based layer processing,
//! which lets connectivity update immediately after each pick instead of
//! only at layer boundaries -- closer to the "number of neighbors already in
//! `M_hat`" wording that drives this rule.

use std::collections::HashMap;
use std::hash::Hash;

use fixedbitset::FixedBitSet;

use vf2pp_core::visit::GraphAdapter;

use crate::indexes::Indexes;

/// Returns `g0` vertex indices in matching order. Every index in
/// `0..g0.node_bound()` that is an actual vertex of `g0` appears exactly
/// once.
pub fn matching_order<G0, L>(g0: G0, indexes: &Indexes<L>) -> Vec<usize>
where
    G0: GraphAdapter,
    L: Copy + Eq + Hash,
{
    let n = g0.node_count();
    let bound = g0.node_bound();
    let mut order = Vec::with_capacity(n);
    let mut placed = FixedBitSet::with_capacity(bound);
    let mut remaining_label_count = indexes.label_count0.clone();

    while order.len() < n {
        let root = pick_root(g0, indexes, &placed, &remaining_label_count);
        place_component(g0, indexes, root, &mut placed, &mut remaining_label_count, &mut order);
    }

    order
}

fn pick_root<G0, L>(
    g0: G0,
    indexes: &Indexes<L>,
    placed: &FixedBitSet,
    remaining_label_count: &HashMap<L, usize>,
) -> G0::NodeId
where
    G0: GraphAdapter,
    L: Copy + Eq + Hash,
{
    g0.node_identifiers()
        .filter(|&v| !placed.contains(g0.to_index(v)))
        .min_by(|&a, &b| {
            let ia = g0.to_index(a);
            let ib = g0.to_index(b);
            let rarity_a = remaining_label_count[&indexes.labels0[ia]];
            let rarity_b = remaining_label_count[&indexes.labels0[ib]];
            rarity_a
                .cmp(&rarity_b)
                .then_with(|| g0.degree(b).cmp(&g0.degree(a)))
                .then_with(|| ia.cmp(&ib))
        })
        .expect("at least one unplaced vertex remains")
}

fn place_component<G0, L>(
    g0: G0,
    indexes: &Indexes<L>,
    root: G0::NodeId,
    placed: &mut FixedBitSet,
    remaining_label_count: &mut HashMap<L, usize>,
    order: &mut Vec<usize>,
) where
    G0: GraphAdapter,
    L: Copy + Eq + Hash,
{
    let mut connectivity: HashMap<usize, usize> = HashMap::new();
    placed.insert(g0.to_index(root));
    let mut frontier = vec![root];

    while !frontier.is_empty() {
        let mut remaining = frontier;
        let mut next_frontier = Vec::new();

        while !remaining.is_empty() {
            let (pos, _) = remaining
                .iter()
                .enumerate()
                .max_by(|&(_, &a), &(_, &b)| {
                    let ia = g0.to_index(a);
                    let ib = g0.to_index(b);
                    let con_a = connectivity.get(&ia).copied().unwrap_or(0);
                    let con_b = connectivity.get(&ib).copied().unwrap_or(0);
                    con_a
                        .cmp(&con_b)
                        .then_with(|| g0.degree(a).cmp(&g0.degree(b)))
                        .then_with(|| {
                            let rarity_a = remaining_label_count[&indexes.labels0[ia]];
                            let rarity_b = remaining_label_count[&indexes.labels0[ib]];
                            rarity_b.cmp(&rarity_a)
                        })
                        .then_with(|| ib.cmp(&ia))
                })
                .expect("remaining is non-empty");
            let v = remaining.remove(pos);
            let vi = g0.to_index(v);

            order.push(vi);
            *remaining_label_count.get_mut(&indexes.labels0[vi]).unwrap() -= 1;

            for nb in g0.neighbors(v) {
                let ni = g0.to_index(nb);
                *connectivity.entry(ni).or_insert(0) += 1;
                if !placed.contains(ni) {
                    placed.insert(ni);
                    next_frontier.push(nb);
                }
            }
        }

        frontier = next_frontier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SimpleGraph;
    use vf2pp_core::label::NoLabels;

    #[test]
    fn every_vertex_appears_once_and_has_an_ordered_neighbor() {
        let g0 = SimpleGraph::new(5, [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)]);
        let indexes = Indexes::build(&g0, &g0, NoLabels, NoLabels);
        let order = matching_order(&g0, &indexes);

        assert_eq!(order.len(), 5);
        let mut seen = std::collections::HashSet::new();
        for &v in &order {
            assert!(seen.insert(v), "vertex {v} appeared twice");
        }

        for (pos, &v) in order.iter().enumerate().skip(1) {
            let earlier: std::collections::HashSet<usize> = order[..pos].iter().copied().collect();
            let has_ordered_neighbor = (&g0)
                .neighbors(v)
                .any(|nb| earlier.contains(&(&g0).to_index(nb)));
            assert!(has_ordered_neighbor, "vertex {v} has no earlier neighbor");
        }
    }

    #[test]
    fn disconnected_components_are_both_fully_ordered() {
        let g0 = SimpleGraph::new(4, [(0, 1), (2, 3)]);
        let indexes = Indexes::build(&g0, &g0, NoLabels, NoLabels);
        let order = matching_order(&g0, &indexes);
        assert_eq!(order.len(), 4);
    }
}
