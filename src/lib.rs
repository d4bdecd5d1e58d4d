//! **vf2pp** implements VF2++ graph and subgraph isomorphism for labeled,
//! undirected, possibly multi-edged graphs.
//!
//! The crate is split the way [`petgraph`](https://docs.rs/petgraph) splits
//! its algorithms: [`vf2pp_core`] defines the small read-only graph-adapter
//! traits the solver consumes, and [`vf2pp_algorithms`] implements the
//! solver itself. This crate is a thin facade that re-exports the public
//! surface of both so callers only need one dependency.
//!
//! ```ignore
//! use vf2pp::{is_isomorphic, Mode, NoLabels};
//! ```

pub use vf2pp_algorithms::{
    all_mappings, error, induced_subgraph_is_isomorphic, mapping, subgraph_is_isomorphic,
    AllMappings, InvalidInput, Mapping, Mode, PrecheckReason,
};
pub use vf2pp_core::{label::NoLabels, label::NodeLabeling, visit};

/// Examines whether `g1` and `g2` are isomorphic under `labels`.
///
/// Thin wrapper over [`mapping`] with [`Mode::Iso`], mirroring the
/// convenience functions the original VF2++ paper's reference
/// implementation exposes (`vf2pp_is_isomorphic`).
pub fn is_isomorphic<G0, G1, L0, L1>(
    g0: G0,
    g1: G1,
    labels0: &mut L0,
    labels1: &mut L1,
) -> Result<bool, error_stack::Report<InvalidInput>>
where
    G0: vf2pp_core::visit::GraphAdapter,
    G1: vf2pp_core::visit::GraphAdapter,
    L0: vf2pp_core::label::NodeLabeling<G0>,
    L1: vf2pp_core::label::NodeLabeling<G1>,
{
    mapping(g0, g1, labels0, labels1, Mode::Iso).map(|m| m.is_some())
}

pub use error_stack;
