//! VF2++ graph, subgraph and induced-subgraph isomorphism search over
//! [`vf2pp_core::visit::GraphAdapter`] graphs.
//!
//! Split the way the teacher keeps its own algorithm crates: one module per
//! concern (matching order, candidate generation, feasibility, search
//! state, the driver that ties them together), with [`mapping`] and its
//! three thin wrappers as the only public entry points most callers need.

mod api;
mod candidates;
mod driver;
mod feasibility;
mod indexes;
mod mapping;
mod mode;
mod ordering;
mod precheck;
mod state;

pub mod error;

#[cfg(test)]
mod test_support;

pub use api::{all_mappings, induced_subgraph_is_isomorphic, mapping, subgraph_is_isomorphic, AllMappings};
pub use error::InvalidInput;
pub use mapping::Mapping;
pub use mode::Mode;
pub use precheck::PrecheckReason;
