//! Structured error types shared across grex crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical error type for the grex engine.
///
/// Every failure is local to a single call and deterministic: retrying an
/// operation with the same inputs reproduces the same error. Operations never
/// return partial results alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum GraphError {
    /// The total degree is odd; no simple graph can realize it.
    #[error("degree sum {sum} is odd; no simple graph can realize it")]
    OddDegreeSum {
        /// Sum of all entries in the offending degree vector.
        sum: u64,
    },
    /// A vertex demands a degree at least equal to the vertex count.
    #[error("vertex {vertex} demands degree {degree} but only {vertices} vertices exist")]
    DegreeTooLarge {
        /// Index of the offending vertex.
        vertex: usize,
        /// Degree requested for that vertex.
        degree: u32,
        /// Total number of vertices in the sequence.
        vertices: usize,
    },
    /// The constructive sweep could not satisfy a vertex's remaining degree.
    #[error("not enough connections: vertex {vertex} still requires {remaining} edge(s)")]
    InsufficientConnections {
        /// Index of the vertex whose degree could not be satisfied.
        vertex: usize,
        /// Edges still required when the sweep ran out of partners.
        remaining: u32,
    },
    /// An adjacency or incidence cell holds a value greater than one.
    #[error("cell ({row}, {col}) holds {value}; multi-edges are not supported")]
    MultiEdgeEntry {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// Value found in the cell.
        value: u32,
    },
    /// A matrix lacks the staircase shape required by base extraction or
    /// signature encoding.
    #[error("row {row} breaks the staircase shape; matrix is not extremal")]
    NotExtremalShape {
        /// First row where the staircase property fails.
        row: usize,
    },
    /// A base list was empty or contained a sentinel or negative pair.
    #[error("base list is empty or invalid")]
    EmptyOrInvalidBases,
    /// A square matrix was required but the dimensions differ.
    #[error("expected a square matrix, found {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },
    /// Row-major construction received rows of differing lengths.
    #[error("row {row} holds {found} entries, expected {expected}")]
    JaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row, which fixes the column count.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The boundary walk needs more bits than a 64-bit signature can hold.
    #[error("a {vertices}-vertex matrix needs more than 64 signature bits")]
    SignatureOverflow {
        /// Number of vertices in the matrix that overflowed the walk.
        vertices: usize,
    },
    /// A signature's bit pattern does not replay to a complete boundary walk.
    #[error("signature {signature} does not describe a valid staircase walk")]
    MalformedSignature {
        /// The signature that failed to decode.
        signature: u64,
    },
    /// Serialization or deserialization of a transport payload failed.
    #[error("codec error: {message}")]
    Codec {
        /// Human readable description from the underlying codec.
        message: String,
    },
}

impl GraphError {
    /// Returns the stable machine readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::OddDegreeSum { .. } => "odd-degree-sum",
            GraphError::DegreeTooLarge { .. } => "degree-too-large",
            GraphError::InsufficientConnections { .. } => "insufficient-connections",
            GraphError::MultiEdgeEntry { .. } => "multi-edge-entry",
            GraphError::NotExtremalShape { .. } => "not-extremal",
            GraphError::EmptyOrInvalidBases => "invalid-bases",
            GraphError::NotSquare { .. } => "not-square",
            GraphError::JaggedRows { .. } => "jagged-rows",
            GraphError::SignatureOverflow { .. } => "signature-overflow",
            GraphError::MalformedSignature { .. } => "malformed-signature",
            GraphError::Codec { .. } => "codec",
        }
    }
}
