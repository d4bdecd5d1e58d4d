//! Cheap, whole-graph rejection tests run before the search starts.
//! Grounded on `_precheck` in networkx's `vf2pp.py`: none of these checks can
//! produce a false rejection, so running them first turns obviously
//! impossible instances into an `O(n)` answer instead of walking into the
//! search only to fail at the root.

use std::hash::Hash;

use vf2pp_core::visit::GraphAdapter;

use crate::indexes::Indexes;
use crate::mode::Mode;

/// Why [`precheck`] rejected an instance, so callers (and tests) can tell a
/// structural impossibility from "the search would have found nothing
/// anyway" without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecheckReason {
    /// The target graph has no vertices. Per the spec this is `no mapping`
    /// unconditionally, in every mode -- including `Iso` with an equally
    /// empty pattern, overriding the vacuous-truth convention a pure
    /// order-comparison would otherwise produce.
    EmptyTarget,
    /// `Sub`/`Ind` only: the pattern graph has no vertices. Per the spec
    /// this is also `no mapping` unconditionally, the same non-vacuous
    /// override as [`PrecheckReason::EmptyTarget`] but for the other side.
    EmptyPattern,
    /// `Iso` requires equal order; `Sub`/`Ind` require the target to have
    /// at least as many vertices as the pattern (the pattern must fit).
    SizeMismatch,
    /// `Iso` only: the sorted degree sequences of `g0` and `g1` differ.
    DegreeSequenceMismatch,
    /// The pattern's label histogram can't be covered by the target's: in
    /// `Iso` the two histograms must match exactly; in `Sub`/`Ind` every
    /// label present in the pattern must also appear somewhere in the
    /// target.
    LabelHistogramMismatch,
}

pub fn precheck<G0, G1, L>(g0: G0, g1: G1, indexes: &Indexes<L>, mode: Mode) -> Result<(), PrecheckReason>
where
    G0: GraphAdapter,
    G1: GraphAdapter,
    L: Copy + Eq + Hash,
{
    if g1.node_count() == 0 {
        return Err(PrecheckReason::EmptyTarget);
    }

    match mode {
        Mode::Iso => {
            if g0.node_count() != g1.node_count() {
                return Err(PrecheckReason::SizeMismatch);
            }
            let mut d0: Vec<usize> = g0.node_identifiers().map(|v| g0.degree(v)).collect();
            let mut d1: Vec<usize> = g1.node_identifiers().map(|v| g1.degree(v)).collect();
            d0.sort_unstable();
            d1.sort_unstable();
            if d0 != d1 {
                return Err(PrecheckReason::DegreeSequenceMismatch);
            }
            for (label, count1) in &indexes.label_count1 {
                if indexes.label_count0.get(label) != Some(count1) {
                    return Err(PrecheckReason::LabelHistogramMismatch);
                }
            }
        }
        Mode::Sub | Mode::Ind => {
            if g0.node_count() == 0 {
                return Err(PrecheckReason::EmptyPattern);
            }
            if g0.node_count() > g1.node_count() {
                return Err(PrecheckReason::SizeMismatch);
            }
            for label in indexes.label_count0.keys() {
                if !indexes.label_count1.contains_key(label) {
                    return Err(PrecheckReason::LabelHistogramMismatch);
                }
            }
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
    fn empty_target_is_always_rejected() {
        let g0 = SimpleGraph::new(1, []);
        let g1 = SimpleGraph::new(0, []);
        let idx = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        assert_eq!(
            precheck(&g0, &g1, &idx, Mode::Iso),
            Err(PrecheckReason::EmptyTarget)
        );
        assert_eq!(
            precheck(&g0, &g1, &idx, Mode::Sub),
            Err(PrecheckReason::EmptyTarget)
        );
    }

    #[test]
    fn empty_pattern_is_rejected_against_a_nonempty_target() {
        let g0 = SimpleGraph::new(0, []);
        let g1 = SimpleGraph::new(2, [(0, 1)]);
        let idx = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        assert_eq!(
            precheck(&g0, &g1, &idx, Mode::Sub),
            Err(PrecheckReason::EmptyPattern)
        );
        assert_eq!(
            precheck(&g0, &g1, &idx, Mode::Ind),
            Err(PrecheckReason::EmptyPattern)
        );
    }

    #[test]
    fn iso_rejects_unequal_order() {
        let g0 = SimpleGraph::new(2, [(0, 1)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let idx = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        assert_eq!(
            precheck(&g0, &g1, &idx, Mode::Iso),
            Err(PrecheckReason::SizeMismatch)
        );
    }

    #[test]
    fn sub_allows_a_larger_target() {
        let g0 = SimpleGraph::new(2, [(0, 1)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let idx = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        assert_eq!(precheck(&g0, &g1, &idx, Mode::Sub), Ok(()));
    }

    #[test]
    fn sub_rejects_a_pattern_bigger_than_the_target() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let g1 = SimpleGraph::new(2, [(0, 1)]);
        let idx = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        assert_eq!(
            precheck(&g0, &g1, &idx, Mode::Sub),
            Err(PrecheckReason::SizeMismatch)
        );
    }

    #[test]
    fn iso_rejects_degree_sequence_mismatch() {
        let g0 = SimpleGraph::new(3, [(0, 1), (1, 2)]);
        let g1 = SimpleGraph::new(3, [(0, 1), (0, 2), (0, 2)]);
        let idx = Indexes::build(&g0, &g1, NoLabels, NoLabels);
        assert_eq!(
            precheck(&g0, &g1, &idx, Mode::Iso),
            Err(PrecheckReason::DegreeSequenceMismatch)
        );
    }
}
