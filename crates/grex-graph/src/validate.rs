//! Graphicality checks for the three primary representations.

use grex_core::{Checked, GraphError, Matrix};

use crate::reconstruct::realize;

/// Decides whether a degree vector is realizable by a simple graph under the
/// engine's fixed left-to-right connection order.
///
/// Rejects vectors with an odd degree sum, entries at least the vertex count,
/// and vectors the greedy sweep cannot satisfy. Note that the last case is
/// order-sensitive: `[2, 2, 2, 2]` describes a 4-cycle yet is rejected,
/// because the sweep exhausts the early vertices first. Use
/// [`vector_graphical_any_order`] for the order-independent answer.
pub fn vector_graphical(degrees: &[u32]) -> Result<(), GraphError> {
    realize(degrees).map(|_| ())
}

/// Result-flag variant of [`vector_graphical`].
pub fn vector_graphical_checked(degrees: &[u32]) -> Checked<()> {
    Checked::from_result(vector_graphical(degrees))
}

/// Decides whether a degree vector is graphical under the order-independent
/// Erdős–Gallai criterion.
///
/// Offered as a separate capability so callers relying on the sweep's
/// order-sensitivity keep the literal behavior of [`vector_graphical`]. A
/// violated prefix inequality is reported as [`GraphError::InsufficientConnections`]
/// carrying the prefix length and the deficit.
pub fn vector_graphical_any_order(degrees: &[u32]) -> Result<(), GraphError> {
    let n = degrees.len();
    let sum: u64 = degrees.iter().map(|&d| u64::from(d)).sum();
    if sum % 2 != 0 {
        return Err(GraphError::OddDegreeSum { sum });
    }
    for (vertex, &degree) in degrees.iter().enumerate() {
        if degree as usize >= n {
            return Err(GraphError::DegreeTooLarge {
                vertex,
                degree,
                vertices: n,
            });
        }
    }

    let mut sorted = degrees.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let mut prefix: u64 = 0;
    for k in 0..n {
        prefix += u64::from(sorted[k]);
        let mut bound = (k as u64) * (k as u64 + 1);
        for &d in &sorted[k + 1..] {
            bound += u64::from(d).min(k as u64 + 1);
        }
        if prefix > bound {
            return Err(GraphError::InsufficientConnections {
                vertex: k,
                remaining: (prefix - bound).min(u64::from(u32::MAX)) as u32,
            });
        }
    }
    Ok(())
}

/// Result-flag variant of [`vector_graphical_any_order`].
pub fn vector_graphical_any_order_checked(degrees: &[u32]) -> Checked<()> {
    Checked::from_result(vector_graphical_any_order(degrees))
}

/// Decides whether a square 0/1 matrix is the adjacency matrix of some
/// simple graph.
///
/// Any cell above one is rejected as a multi-edge; otherwise the per-row
/// 1-counts are delegated to [`vector_graphical`].
pub fn adjacency_graphical(matrix: &Matrix) -> Result<(), GraphError> {
    let degrees = row_degrees(matrix)?;
    realize(&degrees).map(|_| ())
}

/// Result-flag variant of [`adjacency_graphical`].
pub fn adjacency_graphical_checked(matrix: &Matrix) -> Checked<()> {
    Checked::from_result(adjacency_graphical(matrix))
}

/// Decides whether a vertices-by-edges incidence matrix describes a simple
/// graph, judged through its row sums.
///
/// Column shape is deliberately not verified: a column with one or three
/// 1-entries passes as long as the row sums form a realizable degree vector.
/// Callers that need strict incidence columns must check separately.
pub fn incidence_graphical(matrix: &Matrix) -> Result<(), GraphError> {
    let degrees = incidence_degrees(matrix)?;
    realize(&degrees).map(|_| ())
}

/// Result-flag variant of [`incidence_graphical`].
pub fn incidence_graphical_checked(matrix: &Matrix) -> Checked<()> {
    Checked::from_result(incidence_graphical(matrix))
}

/// Derives the degree vector of an adjacency matrix by counting 1-cells per
/// row, rejecting non-square matrices and cells above one.
pub(crate) fn row_degrees(matrix: &Matrix) -> Result<Vec<u32>, GraphError> {
    if !matrix.is_square() {
        return Err(GraphError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    let n = matrix.rows();
    let mut degrees = vec![0u32; n];
    for i in 0..n {
        for j in 0..n {
            match matrix.get(i, j) {
                0 => {}
                1 => degrees[i] += 1,
                value => return Err(GraphError::MultiEdgeEntry { row: i, col: j, value }),
            }
        }
    }
    Ok(degrees)
}

/// Derives the degree vector of an incidence matrix by summing 1-cells per
/// row across all edge columns, rejecting cells above one.
pub(crate) fn incidence_degrees(matrix: &Matrix) -> Result<Vec<u32>, GraphError> {
    let mut degrees = vec![0u32; matrix.rows()];
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            match matrix.get(i, j) {
                0 => {}
                1 => degrees[i] += 1,
                value => return Err(GraphError::MultiEdgeEntry { row: i, col: j, value }),
            }
        }
    }
    Ok(degrees)
}
