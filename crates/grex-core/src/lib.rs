#![deny(missing_docs)]
//! Core value types and calling conventions for the grex graph-representation
//! engine: dense matrices, vertex pairs, the structured error surface, the
//! result-flag convention, and deterministic randomness helpers.

pub mod display;
pub mod errors;
pub mod outcome;
pub mod rng;
mod types;

pub use errors::GraphError;
pub use outcome::Checked;
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{Base, Matrix, Rib};
