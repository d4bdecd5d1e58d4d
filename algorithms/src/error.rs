//! Structured error reporting, in the style of the teacher's per-algorithm
//! `error.rs` files (see `petgraph_algorithms::shortest_paths::dijkstra::error`):
//! a small `Context` enum with a human `Display`, wrapped in `error_stack`'s
//! `Report` by callers so a failure can accumulate attachments as it
//! propagates.

use core::fmt;

/// Something about the caller-supplied graphs or labeling made the request
/// impossible to evaluate -- as opposed to the graphs simply not being
/// isomorphic, which is a `Ok(false)`/empty result, not an error.
///
/// The spec also lists "a vertex present in the label map but absent from
/// the graph" as an `InvalidInput` case; this crate's `NodeLabeling` trait
/// derives a label live from a graph vertex rather than looking one up in a
/// caller-held sparse map, so that failure mode can't arise through this
/// API -- it's prevented by the trait's shape instead of checked at
/// runtime.
#[derive(Debug)]
pub enum InvalidInput {
    /// `Degree` reported a value inconsistent with the vertex's own
    /// `neighbors` iterator (after accounting for multiplicity). Indicates a
    /// buggy `GraphAdapter` implementation rather than bad input data.
    InconsistentDegree { node: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::InconsistentDegree { node } => {
                write!(
                    f,
                    "degree of vertex index {node} disagrees with its neighbor list"
                )
            }
        }
    }
}

impl error_stack::Context for InvalidInput {}
