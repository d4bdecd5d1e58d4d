//! Candidate generation: which `g1` vertices are worth trying as the image
//! of `u` next.
//!
//! Grounded directly on `_find_candidates` in the teacher's original
//! networkx ancestor (`vf2pp_helpers/candidates.py`): if `u` already has a
//! mapped neighbor, candidates are the intersection of that neighbor's
//! image's `g1`-neighbors, narrowed to `nodes_of_label1`; otherwise (`u` is
//! the root of its component, or a later root with no mapped neighbor yet)
//! candidates are drawn from `T2_out`, narrowed the same way. Degree
//! filtering is mode-dependent -- see [`Mode`] -- since only `Iso` requires
//! the target vertex's degree to match exactly.

use std::hash::Hash;

use vf2pp_core::visit::GraphAdapter;

use crate::indexes::Indexes;
use crate::mode::Mode;
use crate::state::State;

/// Returns the `g1` vertex indices worth trying as the image of `u`, in
/// ascending index order so the search explores them deterministically.
pub fn candidates<G0, G1, L>(
    g0: G0,
    g1: G1,
    indexes: &Indexes<L>,
    state: &State,
    mode: Mode,
    u: usize,
) -> Vec<usize>
where
    G0: GraphAdapter,
    G1: GraphAdapter,
    L: Copy + Eq + Hash,
{
    let u_id = g0.from_index(u);
    let u_degree = g0.degree(u_id);
    let u_label = indexes.labels0[u];

    let mapped_neighbor = g0
        .neighbors(u_id)
        .map(|nb| g0.to_index(nb))
        .find(|&ni| state.is_mapped0(ni));

    let mut out: Vec<usize> = match mapped_neighbor {
        Some(first_ni) => {
            let first_image = state.image_of(first_ni).expect("mapped by construction");
            let mut common: Vec<usize> = g1
                .neighbors(g1.from_index(first_image))
                .map(|nb| g1.to_index(nb))
                .collect();
            common.sort_unstable();
            common.dedup();

            for nb in g0.neighbors(u_id) {
                let ni = g0.to_index(nb);
                if ni == first_ni || !state.is_mapped0(ni) {
                    continue;
                }
                let image = state.image_of(ni).expect("mapped by construction");
                let mut nbrs: Vec<usize> = g1
                    .neighbors(g1.from_index(image))
                    .map(|n| g1.to_index(n))
                    .collect();
                nbrs.sort_unstable();
                nbrs.dedup();
                common.retain(|v| nbrs.binary_search(v).is_ok());
            }

            common
                .into_iter()
                .filter(|&v| !state.is_mapped1(v))
                .collect()
        }
        None => state
            .t2_out_iter()
            .filter(|&v| indexes.labels1[v] == u_label)
            .collect(),
    };

    out.retain(|&v| {
        indexes.labels1[v] == u_label
            && degree_admits(mode, u_degree, g1.degree(g1.from_index(v)))
    });
    out.sort_unstable();
    out
}

fn degree_admits(mode: Mode, u_degree: usize, v_degree: usize) -> bool {
    match mode {
        Mode::Iso | Mode::Ind => v_degree == u_degree,
        Mode::Sub => v_degree >= u_degree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SimpleGraph;
    use vf2pp_core::label::NoLabels;

    #[test]
    fn root_candidates_come_from_t2_out_by_label_and_degree() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let indexes = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        let state = State::new(&g0, &g1);

        let cands = candidates(&g0, &g1, &indexes, &state, Mode::Iso, 1);
        assert_eq!(cands, vec![1]);
    }

    #[test]
    fn non_root_candidates_intersect_mapped_neighbor_images() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let indexes = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        let mut state = State::new(&g0, &g1);
        state.push(&g0, &g1, 1, 1);

        let cands = candidates(&g0, &g1, &indexes, &state, Mode::Iso, 0);
        assert_eq!(cands, vec![0]);
        let cands = candidates(&g0, &g1, &indexes, &state, Mode::Iso, 2);
        assert_eq!(cands, vec![2]);
    }

    #[test]
    fn sub_mode_admits_higher_target_degree() {
        let g0 = SimpleGraph::new(2, [(0, 1)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (0, 2)]);
        let indexes = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        let state = State::new(&g0, &g1);

        let mut cands = candidates(&g0, &g1, &indexes, &state, Mode::Sub, 0);
        cands.sort_unstable();
        assert_eq!(cands, vec![0]);
    }
}
