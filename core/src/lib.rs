//! Graph-adapter traits consumed by the `vf2pp-algorithms` isomorphism
//! solver.
//!
//! This crate deliberately stops at the trait boundary: it does not ship a
//! concrete graph type. The host graph library (adjacency storage, degree
//! bookkeeping, edge-multiplicity storage) is an external collaborator --
//! callers implement [`visit::GraphAdapter`] over whatever graph
//! representation they already have, the same way `petgraph-core`'s `visit`
//! traits let algorithms stay generic over `Graph`, `StableGraph`, and
//! `GraphMap` without depending on any of them directly.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod label;
pub mod visit;
