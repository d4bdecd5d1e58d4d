//! Feasibility rules: whether provisionally mapping `u <-> v` can possibly
//! extend to a full solution, short of actually recursing.
//!
//! Grounded on `feasibility`/`cut_PT`/`consistent_PT` in the teacher's
//! networkx ancestor (`VF2pp_helpers/feasibility.py`). That source only
//! implements the `Iso` case (strict equality throughout); this crate
//! relaxes the same three checks to `<=` for `Sub`, and relaxes only the
//! `T1_out`/`T2_out` cutting count to `<=` for `Ind` -- see [`Mode`] and
//! the module-level discussion in `SPEC_FULL.md`.

use std::collections::HashMap;
use std::hash::Hash;

use vf2pp_core::visit::GraphAdapter;

use crate::indexes::Indexes;
use crate::mode::Mode;
use crate::state::State;

/// `true` if mapping `u <-> v` is locally consistent with everything
/// already mapped and doesn't immediately starve the rest of the search.
pub fn feasible<G0, G1, L>(
    g0: G0,
    g1: G1,
    indexes: &Indexes<L>,
    state: &State,
    mode: Mode,
    u: usize,
    v: usize,
) -> bool
where
    G0: GraphAdapter,
    G1: GraphAdapter,
    L: Copy + Eq + Hash,
{
    let u_id = g0.from_index(u);
    let v_id = g1.from_index(v);

    if !counts_admit(mode, g0.edge_multiplicity(u_id, u_id), g1.edge_multiplicity(v_id, v_id)) {
        return false;
    }

    if !consistent(g0, g1, state, mode, u, v) {
        return false;
    }

    if !cut(g0, g1, indexes, state, mode, u, v) {
        return false;
    }

    true
}

fn counts_admit(mode: Mode, required: usize, offered: usize) -> bool {
    match mode {
        Mode::Iso | Mode::Ind => required == offered,
        Mode::Sub => required <= offered,
    }
}

/// Every already-mapped neighbor of `u` must have an edge of sufficient
/// multiplicity to `v`'s image, and symmetrically for `v`'s already-mapped
/// neighbors back to `u` -- this second direction is what makes the rule
/// reject "`v` has an edge to an image that `u` has no corresponding edge
/// to" in `Iso`/`Ind`, and is harmless in `Sub` since `0 <= anything`.
fn consistent<G0, G1>(g0: G0, g1: G1, state: &State, mode: Mode, u: usize, v: usize) -> bool
where
    G0: GraphAdapter,
    G1: GraphAdapter,
{
    let u_id = g0.from_index(u);
    for nb in g0.neighbors(u_id) {
        let ni = g0.to_index(nb);
        if let Some(image) = state.image_of(ni) {
            let required = g0.edge_multiplicity(u_id, nb);
            let offered = g1.edge_multiplicity(g1.from_index(v), g1.from_index(image));
            if !counts_admit(mode, required, offered) {
                return false;
            }
        }
    }

    let v_id = g1.from_index(v);
    for nb in g1.neighbors(v_id) {
        let ni = g1.to_index(nb);
        if let Some(preimage) = state.preimage_of(ni) {
            let offered = g1.edge_multiplicity(v_id, nb);
            let required = g0.edge_multiplicity(g0.from_index(u), g0.from_index(preimage));
            if !counts_admit(mode, required, offered) {
                return false;
            }
        }
    }

    true
}

/// One-look-ahead cutting rule: compares, per label, how many of `u`'s
/// neighbors sit in each frontier set against how many of `v`'s neighbors
/// sit in the corresponding one. A shortfall here means no matter how the
/// rest of the search proceeds, `u`'s neighborhood can't be covered by
/// `v`'s, so the pair can be rejected without recursing.
fn cut<G0, G1, L>(
    g0: G0,
    g1: G1,
    indexes: &Indexes<L>,
    state: &State,
    mode: Mode,
    u: usize,
    v: usize,
) -> bool
where
    G0: GraphAdapter,
    G1: GraphAdapter,
    L: Copy + Eq + Hash,
{
    let mut u_t1: HashMap<L, usize> = HashMap::new();
    let mut u_t1_out: HashMap<L, usize> = HashMap::new();
    for nb in g0.neighbors(g0.from_index(u)) {
        let ni = g0.to_index(nb);
        let label = indexes.labels0[ni];
        if state.in_t1(ni) {
            *u_t1.entry(label).or_insert(0) += 1;
        } else if state.in_t1_out(ni) {
            *u_t1_out.entry(label).or_insert(0) += 1;
        }
    }

    let mut v_t2: HashMap<L, usize> = HashMap::new();
    let mut v_t2_out: HashMap<L, usize> = HashMap::new();
    for nb in g1.neighbors(g1.from_index(v)) {
        let ni = g1.to_index(nb);
        let label = indexes.labels1[ni];
        if state.in_t2(ni) {
            *v_t2.entry(label).or_insert(0) += 1;
        } else if state.in_t2_out(ni) {
            *v_t2_out.entry(label).or_insert(0) += 1;
        }
    }

    for (label, &want) in &u_t1 {
        let have = v_t2.get(label).copied().unwrap_or(0);
        if !t1_admits(mode, want, have) {
            return false;
        }
    }
    for (label, &want) in &u_t1_out {
        let have = v_t2_out.get(label).copied().unwrap_or(0);
        if !t1_out_admits(mode, want, have) {
            return false;
        }
    }

    // Label-set equality for iso/ind: v's neighbors can't carry a label u's
    // don't, across T1 and T1_out combined, or the cut is failing to notice
    // a neighbor of v with nothing on u's side to match it to.
    if mode != Mode::Sub {
        for (label, &have) in &v_t2 {
            if have > 0 && !u_t1.contains_key(label) && !u_t1_out.contains_key(label) {
                return false;
            }
        }
        for (label, &have) in &v_t2_out {
            if have > 0 && !u_t1.contains_key(label) && !u_t1_out.contains_key(label) {
                return false;
            }
        }
    }

    true
}

fn t1_admits(mode: Mode, want: usize, have: usize) -> bool {
    match mode {
        Mode::Iso | Mode::Ind => want == have,
        Mode::Sub => want <= have,
    }
}

fn t1_out_admits(mode: Mode, want: usize, have: usize) -> bool {
    match mode {
        Mode::Iso => want == have,
        Mode::Sub | Mode::Ind => want <= have,
    }
}
