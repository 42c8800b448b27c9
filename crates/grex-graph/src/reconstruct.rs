use grex_core::{GraphError, Matrix};

/// Realizes a degree vector as an adjacency matrix with the fixed-order
/// greedy sweep, or explains why it cannot.
///
/// The sweep operates on an owned snapshot of the input, so the caller's
/// vector is never mutated. Vertices are processed in index order; vertex `i`
/// is paired with every later vertex that still has remaining degree, and the
/// sequence is rejected if a full sweep leaves `i` unsatisfied. This is an
/// order-sensitive realizability test: a sequence that is graphical only
/// under a different vertex ordering is rejected here.
pub(crate) fn realize(degrees: &[u32]) -> Result<Matrix, GraphError> {
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

    let mut remaining = degrees.to_vec();
    let mut adjacency = Matrix::square(n);
    for i in 0..n {
        while remaining[i] > 0 {
            for j in i + 1..n {
                if remaining[i] > 0 && remaining[j] > 0 {
                    adjacency.set(i, j, 1);
                    adjacency.set(j, i, 1);
                    remaining[i] -= 1;
                    remaining[j] -= 1;
                }
            }
            if remaining[i] > 0 {
                return Err(GraphError::InsufficientConnections {
                    vertex: i,
                    remaining: remaining[i],
                });
            }
        }
    }
    Ok(adjacency)
}
