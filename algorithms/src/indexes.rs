//! Precomputed, read-only bookkeeping shared by the matching-order builder,
//! candidate generator, and precheck: label snapshots per vertex, label
//! histograms, and target-side groupings by label and by degree. Built once
//! per search and never mutated, mirroring the `GraphParameters` namedtuple
//! `_initialize_VF2pp` builds in the networkx source this solver's ordering
//! and candidate rules are grounded on.

use std::collections::HashMap;
use std::hash::Hash;

use vf2pp_core::label::NodeLabeling;
use vf2pp_core::visit::GraphAdapter;

/// `g0` is the pattern graph, `g1` the target -- see [`crate::mode::Mode`].
pub struct Indexes<L> {
    /// Label of each `g0` vertex, indexed by `g0`'s dense index space.
    pub labels0: Vec<L>,
    /// Label of each `g1` vertex, indexed by `g1`'s dense index space.
    pub labels1: Vec<L>,
    /// Count of `g0` vertices per label.
    pub label_count0: HashMap<L, usize>,
    /// Count of `g1` vertices per label.
    pub label_count1: HashMap<L, usize>,
    /// `g1` vertex indices grouped by label, for candidate generation.
    pub nodes_of_label1: HashMap<L, Vec<usize>>,
    /// `g1` vertex indices grouped by degree, for candidate generation in
    /// `Mode::Iso`, where the target vertex's degree must match exactly.
    pub nodes_of_degree1: HashMap<usize, Vec<usize>>,
}

impl<L: Copy + Eq + Hash> Indexes<L> {
    pub fn build<G0, G1, N0, N1>(g0: G0, g1: G1, mut label0: N0, mut label1: N1) -> Self
    where
        G0: GraphAdapter,
        G1: GraphAdapter,
        N0: NodeLabeling<G0, Label = L>,
        N1: NodeLabeling<G1, Label = L>,
    {
        let mut labels0 = vec![None; g0.node_bound()];
        let mut label_count0 = HashMap::new();
        for v in g0.node_identifiers() {
            let label = label0.label(g0, v);
            labels0[g0.to_index(v)] = Some(label);
            *label_count0.entry(label).or_insert(0) += 1;
        }
        let labels0: Vec<L> = labels0
            .into_iter()
            .map(|l| l.unwrap_or_else(|| unreachable!("every g0 vertex was labeled above")))
            .collect();

        let mut labels1 = vec![None; g1.node_bound()];
        let mut label_count1 = HashMap::new();
        let mut nodes_of_label1: HashMap<L, Vec<usize>> = HashMap::new();
        let mut nodes_of_degree1: HashMap<usize, Vec<usize>> = HashMap::new();
        for v in g1.node_identifiers() {
            let label = label1.label(g1, v);
            let index = g1.to_index(v);
            labels1[index] = Some(label);
            *label_count1.entry(label).or_insert(0) += 1;
            nodes_of_label1.entry(label).or_default().push(index);
            nodes_of_degree1
                .entry(g1.degree(v))
                .or_default()
                .push(index);
        }
        let labels1: Vec<L> = labels1
            .into_iter()
            .map(|l| l.unwrap_or_else(|| unreachable!("every g1 vertex was labeled above")))
            .collect();

        Indexes {
            labels0,
            labels1,
            label_count0,
            label_count1,
            nodes_of_label1,
            nodes_of_degree1,
        }
    }
}
