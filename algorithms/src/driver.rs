//! The search itself: an iterative depth-first walk over the matching
//! order, advancing one candidate at a time and backtracking through
//! [`State::pop`] instead of recursing.
//!
//! Grounded on `isomorphism_match` in the teacher's historical
//! `src/algo/isomorphism/vf2pp.rs`, which drives the same search with an
//! explicit `depth` counter and a per-level candidate iterator. This crate
//! materializes each level's candidates into a `Vec<usize>` with a cursor
//! index rather than the teacher's `Box<dyn Iterator>`, which keeps the
//! frame `Copy`-free but allocation-light and lets [`Search`] be resumed
//! from outside without holding a live borrow across calls -- the shape
//! [`crate::all_mappings`] needs to enumerate lazily.

use std::hash::Hash;

use vf2pp_core::visit::GraphAdapter;

use crate::candidates::candidates;
use crate::feasibility::feasible;
use crate::indexes::Indexes;
use crate::mode::Mode;
use crate::ordering::matching_order;
use crate::state::State;

struct Frame {
    u: usize,
    candidates: Vec<usize>,
    cursor: usize,
}

/// Resumable VF2++ search. Each call to [`Search::advance`] runs the
/// iterative DFS forward until it either completes another full mapping
/// (returns `true`, with the mapping readable via [`Search::current_pairs`])
/// or exhausts every possibility (returns `false`, permanently -- the
/// search does not reset).
///
/// Owns its [`Indexes`] rather than borrowing them so the search itself can
/// be handed back to a caller (as [`crate::all_mappings`] does) without
/// tying it to a lifetime threaded through the whole public API.
pub struct Search<G0, G1, L> {
    g0: G0,
    g1: G1,
    indexes: Indexes<L>,
    mode: Mode,
    order: Vec<usize>,
    state: State,
    frames: Vec<Frame>,
    at_leaf: bool,
    emitted_empty_order: bool,
}

impl<G0, G1, L> Search<G0, G1, L>
where
    G0: GraphAdapter,
    G1: GraphAdapter,
    L: Copy + Eq + Hash,
{
    pub fn new(g0: G0, g1: G1, indexes: Indexes<L>, mode: Mode) -> Self {
        let order = matching_order(g0, &indexes);
        let state = State::new(g0, g1);
        let frames = if order.is_empty() {
            Vec::new()
        } else {
            let first = order[0];
            let cands = candidates(g0, g1, &indexes, &state, mode, first);
            vec![Frame {
                u: first,
                candidates: cands,
                cursor: 0,
            }]
        };
        Search {
            g0,
            g1,
            indexes,
            mode,
            order,
            state,
            frames,
            at_leaf: false,
            emitted_empty_order: false,
        }
    }

    /// Advances to the next full mapping. `false` once the search space is
    /// exhausted; further calls keep returning `false`.
    pub fn advance(&mut self) -> bool {
        if self.order.is_empty() {
            if self.emitted_empty_order {
                return false;
            }
            self.emitted_empty_order = true;
            return true;
        }

        if self.at_leaf {
            self.state.pop();
            self.at_leaf = false;
        }

        loop {
            let Some(frame) = self.frames.last_mut() else {
                return false;
            };

            if frame.cursor >= frame.candidates.len() {
                self.frames.pop();
                if self.frames.is_empty() {
                    return false;
                }
                self.state.pop();
                continue;
            }

            let v = frame.candidates[frame.cursor];
            frame.cursor += 1;
            let u = frame.u;

            if !feasible(self.g0, self.g1, &self.indexes, &self.state, self.mode, u, v) {
                continue;
            }

            self.state.push(self.g0, self.g1, u, v);
            let depth = self.state.depth();
            if depth == self.order.len() {
                self.at_leaf = true;
                return true;
            }

            let next_u = self.order[depth];
            let next_cands = candidates(self.g0, self.g1, &self.indexes, &self.state, self.mode, next_u);
            self.frames.push(Frame {
                u: next_u,
                candidates: next_cands,
                cursor: 0,
            });
        }
    }

    /// The pattern-to-target pairs of the mapping [`Search::advance`] just
    /// produced, in matching order. Only meaningful right after `advance`
    /// returned `true`.
    pub fn current_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.iter().map(|&u| (u, self.state.image_of(u).expect("full mapping")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SimpleGraph;
    use vf2pp_core::label::NoLabels;

    #[test]
    fn triangle_is_isomorphic_to_itself_with_six_automorphisms() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2), (2, 0)]);
        let indexes = Indexes::build(&g0, &g0, NoLabels, NoLabels);
        let mut search = Search::new(&g0, &g0, indexes, Mode::Iso);

        let mut count = 0;
        while search.advance() {
            count += 1;
            let pairs: Vec<_> = search.current_pairs().collect();
            assert_eq!(pairs.len(), 3);
        }
        assert_eq!(count, 6);
    }

    #[test]
    fn path_is_not_isomorphic_to_star() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (0, 2)]);
        let indexes = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        let mut search = Search::new(&g0, &g1, indexes, Mode::Iso);
        assert!(!search.advance());
    }

    #[test]
    fn triangle_is_a_subgraph_of_k4() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2), (2, 0)]);
        let g1 = SimpleGraph::new(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let indexes = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        let mut search = Search::new(&g0, &g1, indexes, Mode::Sub);
        assert!(search.advance());
    }

    #[test]
    fn path_is_not_an_induced_subgraph_of_k4_minus_an_edge_as_triangle() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (1, 2), (2, 0)]);
        let indexes = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        let mut search = Search::new(&g0, &g1, indexes, Mode::Ind);
        assert!(!search.advance());
    }
}
