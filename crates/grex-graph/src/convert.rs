//! Bidirectional conversion among degree vectors, adjacency matrices, and
//! incidence matrices. Every conversion validates its input first and never
//! returns a partial result.

use grex_core::{Checked, GraphError, Matrix};

use crate::reconstruct::realize;
use crate::validate::{incidence_degrees, row_degrees};

/// Reconstructs an adjacency matrix from a degree vector with the
/// fixed-order greedy sweep.
pub fn vector_to_adjacency(degrees: &[u32]) -> Result<Matrix, GraphError> {
    realize(degrees)
}

/// Result-flag variant of [`vector_to_adjacency`].
pub fn vector_to_adjacency_checked(degrees: &[u32]) -> Checked<Matrix> {
    Checked::from_result(vector_to_adjacency(degrees))
}

/// Derives the degree vector of an adjacency matrix.
///
/// Rejects cells above one and vectors with an odd total, but does not run
/// the full realizability sweep; use
/// [`adjacency_graphical`](crate::adjacency_graphical) for that.
pub fn adjacency_to_vector(matrix: &Matrix) -> Result<Vec<u32>, GraphError> {
    let degrees = row_degrees(matrix)?;
    let sum: u64 = degrees.iter().map(|&d| u64::from(d)).sum();
    if sum % 2 != 0 {
        return Err(GraphError::OddDegreeSum { sum });
    }
    Ok(degrees)
}

/// Result-flag variant of [`adjacency_to_vector`].
pub fn adjacency_to_vector_checked(matrix: &Matrix) -> Checked<Vec<u32>> {
    Checked::from_result(adjacency_to_vector(matrix))
}

/// Converts a validated adjacency matrix into a vertices-by-edges incidence
/// matrix.
///
/// Edge columns are allocated in row-major order over the unordered pairs
/// `(i, j)` with `i < j`, so the column count equals the degree sum halved.
pub fn adjacency_to_incidence(matrix: &Matrix) -> Result<Matrix, GraphError> {
    let degrees = row_degrees(matrix)?;
    realize(&degrees)?;

    let n = matrix.rows();
    let edges = degrees.iter().map(|&d| d as usize).sum::<usize>() / 2;
    let mut incidence = Matrix::zeros(n, edges);
    let mut next = 0;
    for i in 0..n {
        for j in i + 1..n {
            if matrix.get(i, j) == 1 {
                incidence.set(i, next, 1);
                incidence.set(j, next, 1);
                next += 1;
            }
        }
    }
    Ok(incidence)
}

/// Result-flag variant of [`adjacency_to_incidence`].
pub fn adjacency_to_incidence_checked(matrix: &Matrix) -> Checked<Matrix> {
    Checked::from_result(adjacency_to_incidence(matrix))
}

/// Derives and validates the degree vector of an incidence matrix.
pub fn incidence_to_vector(matrix: &Matrix) -> Result<Vec<u32>, GraphError> {
    let degrees = incidence_degrees(matrix)?;
    realize(&degrees)?;
    Ok(degrees)
}

/// Result-flag variant of [`incidence_to_vector`].
pub fn incidence_to_vector_checked(matrix: &Matrix) -> Checked<Vec<u32>> {
    Checked::from_result(incidence_to_vector(matrix))
}

/// Rebuilds an adjacency matrix from an incidence matrix by composing the
/// row-sum derivation with the greedy reconstruction.
pub fn incidence_to_adjacency(matrix: &Matrix) -> Result<Matrix, GraphError> {
    let degrees = incidence_to_vector(matrix)?;
    realize(&degrees)
}

/// Result-flag variant of [`incidence_to_adjacency`].
pub fn incidence_to_adjacency_checked(matrix: &Matrix) -> Checked<Matrix> {
    Checked::from_result(incidence_to_adjacency(matrix))
}

/// Converts a degree vector straight to an incidence matrix by composing the
/// greedy reconstruction with [`adjacency_to_incidence`].
pub fn vector_to_incidence(degrees: &[u32]) -> Result<Matrix, GraphError> {
    let adjacency = realize(degrees)?;
    adjacency_to_incidence(&adjacency)
}

/// Result-flag variant of [`vector_to_incidence`].
pub fn vector_to_incidence_checked(degrees: &[u32]) -> Checked<Matrix> {
    Checked::from_result(vector_to_incidence(degrees))
}
