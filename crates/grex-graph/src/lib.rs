#![deny(missing_docs)]
//! Graph-representation engine: validates and interconverts the equivalent
//! encodings of an undirected simple graph (degree vector, adjacency matrix,
//! incidence matrix, integer signature) and extracts ribs and bases from
//! adjacency matrices.
//!
//! Every operation is a pure function over finite in-memory values and comes
//! in two calling conventions: a standard form returning
//! `Result<T, GraphError>` and a checked form returning
//! [`grex_core::Checked`], which reports failure through a flag and a
//! diagnostic string instead.

mod bases;
mod convert;
mod generators;
mod hash;
mod reconstruct;
mod ribs;
mod serialization;
mod signature;
mod validate;

pub use bases::{bases, bases_checked, BaseOptions};
pub use convert::{
    adjacency_to_incidence, adjacency_to_incidence_checked, adjacency_to_vector,
    adjacency_to_vector_checked, incidence_to_adjacency, incidence_to_adjacency_checked,
    incidence_to_vector, incidence_to_vector_checked, vector_to_adjacency,
    vector_to_adjacency_checked, vector_to_incidence, vector_to_incidence_checked,
};
pub use generators::{gen_graphical_vector, gen_staircase};
pub use hash::canonical_hash;
pub use ribs::{ribs, ribs_checked};
pub use serialization::{matrix_from_bytes, matrix_from_json, matrix_to_bytes, matrix_to_json};
pub use signature::{
    adjacency_from_signature, adjacency_from_signature_checked, bases_to_signature,
    bases_to_signature_checked, signature_of, signature_of_checked,
};
pub use validate::{
    adjacency_graphical, adjacency_graphical_checked, incidence_graphical,
    incidence_graphical_checked, vector_graphical, vector_graphical_any_order,
    vector_graphical_any_order_checked, vector_graphical_checked,
};
