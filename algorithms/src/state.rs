//! Search state: the partial mapping `M`/`M^-1` and the four frontier sets
//! `T1`, `T1_out`, `T2`, `T2_out`, plus exact push/pop undo.
//!
//! The frontier sets are kept as dense [`FixedBitSet`]s over each graph's
//! index space rather than hash sets, per the spec's own recommendation, and
//! push/pop record exactly which vertices crossed from "uncovered" (`*_out`)
//! into "frontier" (`T1`/`T2`) at this level so `pop` can undo in `O(deg)`
//! instead of recomputing from scratch. This mirrors the depth-tagged
//! `outgoing`/`incoming` vectors in the `GraphState` push/pop discipline of
//! the reference `vf2` crate, adapted here to explicit per-level vectors
//! instead of depth tags, since the solver only ever undoes its own most
//! recent push.

use fixedbitset::FixedBitSet;

use vf2pp_core::visit::GraphAdapter;

const UNMAPPED: usize = usize::MAX;

/// One level's worth of undo information, pushed by [`State::push`] and
/// consumed by [`State::pop`].
struct Level {
    u: usize,
    v: usize,
    u_was_in_t1: bool,
    v_was_in_t2: bool,
    newly_in_t1: Vec<usize>,
    newly_in_t2: Vec<usize>,
}

/// `g0` is the pattern graph, `g1` the target.
pub struct State {
    mapping: Vec<usize>,
    reverse_mapping: Vec<usize>,
    t1: FixedBitSet,
    t1_out: FixedBitSet,
    t2: FixedBitSet,
    t2_out: FixedBitSet,
    levels: Vec<Level>,
}

impl State {
    pub fn new<G0, G1>(g0: G0, g1: G1) -> Self
    where
        G0: GraphAdapter,
        G1: GraphAdapter,
    {
        let n0 = g0.node_bound();
        let n1 = g1.node_bound();
        let mut t1_out = FixedBitSet::with_capacity(n0);
        for v in g0.node_identifiers() {
            t1_out.insert(g0.to_index(v));
        }
        let mut t2_out = FixedBitSet::with_capacity(n1);
        for v in g1.node_identifiers() {
            t2_out.insert(g1.to_index(v));
        }
        State {
            mapping: vec![UNMAPPED; n0],
            reverse_mapping: vec![UNMAPPED; n1],
            t1: FixedBitSet::with_capacity(n0),
            t1_out,
            t2: FixedBitSet::with_capacity(n1),
            t2_out,
            levels: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_mapped0(&self, u: usize) -> bool {
        self.mapping[u] != UNMAPPED
    }

    pub fn is_mapped1(&self, v: usize) -> bool {
        self.reverse_mapping[v] != UNMAPPED
    }

    pub fn image_of(&self, u: usize) -> Option<usize> {
        let v = self.mapping[u];
        (v != UNMAPPED).then_some(v)
    }

    pub fn preimage_of(&self, v: usize) -> Option<usize> {
        let u = self.reverse_mapping[v];
        (u != UNMAPPED).then_some(u)
    }

    pub fn in_t1(&self, u: usize) -> bool {
        self.t1.contains(u)
    }

    pub fn in_t1_out(&self, u: usize) -> bool {
        self.t1_out.contains(u)
    }

    pub fn in_t2(&self, v: usize) -> bool {
        self.t2.contains(v)
    }

    pub fn in_t2_out(&self, v: usize) -> bool {
        self.t2_out.contains(v)
    }

    pub fn t2_iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.t2.ones()
    }

    pub fn t2_out_iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.t2_out.ones()
    }

    /// Extends the mapping with `u <-> v` and updates the frontier sets,
    /// recording enough to undo this exactly via [`State::pop`].
    pub fn push<G0, G1>(&mut self, g0: G0, g1: G1, u: usize, v: usize)
    where
        G0: GraphAdapter,
        G1: GraphAdapter,
    {
        let u_was_in_t1 = self.t1.contains(u);
        let v_was_in_t2 = self.t2.contains(v);

        self.mapping[u] = v;
        self.reverse_mapping[v] = u;
        self.t1.set(u, false);
        self.t1_out.set(u, false);
        self.t2.set(v, false);
        self.t2_out.set(v, false);

        let u_id = g0.from_index(u);
        let mut newly_in_t1 = Vec::new();
        for nb in g0.neighbors(u_id) {
            let ni = g0.to_index(nb);
            if self.mapping[ni] == UNMAPPED && self.t1_out.contains(ni) {
                self.t1_out.set(ni, false);
                self.t1.insert(ni);
                newly_in_t1.push(ni);
            }
        }

        let v_id = g1.from_index(v);
        let mut newly_in_t2 = Vec::new();
        for nb in g1.neighbors(v_id) {
            let ni = g1.to_index(nb);
            if self.reverse_mapping[ni] == UNMAPPED && self.t2_out.contains(ni) {
                self.t2_out.set(ni, false);
                self.t2.insert(ni);
                newly_in_t2.push(ni);
            }
        }

        self.levels.push(Level {
            u,
            v,
            u_was_in_t1,
            v_was_in_t2,
            newly_in_t1,
            newly_in_t2,
        });
    }

    /// Undoes the most recent [`State::push`].
    pub fn pop(&mut self) {
        let level = self.levels.pop().expect("pop without matching push");

        for ni in level.newly_in_t1 {
            self.t1.set(ni, false);
            self.t1_out.insert(ni);
        }
        for ni in level.newly_in_t2 {
            self.t2.set(ni, false);
            self.t2_out.insert(ni);
        }

        self.mapping[level.u] = UNMAPPED;
        self.reverse_mapping[level.v] = UNMAPPED;

        if level.u_was_in_t1 {
            self.t1.insert(level.u);
        } else {
            self.t1_out.insert(level.u);
        }
        if level.v_was_in_t2 {
            self.t2.insert(level.v);
        } else {
            self.t2_out.insert(level.v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SimpleGraph;

    #[test]
    fn push_then_pop_restores_frontier_sets() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let mut state = State::new(&g0, &g1);

        state.push(&g0, &g1, 1, 1);
        assert!(state.is_mapped0(1));
        assert!(state.in_t1(0));
        assert!(state.in_t1(2));
        assert!(state.in_t2(0));
        assert!(state.in_t2(2));

        state.pop();
        assert!(!state.is_mapped0(1));
        assert!(!state.in_t1(0));
        assert!(state.in_t1_out(0));
        assert!(!state.in_t2(0));
        assert!(state.in_t2_out(0));
    }

    #[test]
    fn nested_push_pop_is_exact() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let mut state = State::new(&g0, &g1);

        state.push(&g0, &g1, 1, 1);
        state.push(&g0, &g1, 0, 0);
        assert_eq!(state.depth(), 2);
        state.pop();
        assert_eq!(state.depth(), 1);
        assert!(state.is_mapped0(1));
        assert!(!state.is_mapped0(0));
        assert!(state.in_t1(0));
        state.pop();
        assert_eq!(state.depth(), 0);
        assert!(state.in_t1_out(0));
        assert!(state.in_t1_out(1));
        assert!(state.in_t1_out(2));
    }
}
