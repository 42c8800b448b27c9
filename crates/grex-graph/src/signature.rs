//! Signature codec: packs the staircase boundary of an extremal adjacency
//! matrix into a single integer and replays it back.

use grex_core::{Base, Checked, GraphError, Matrix};

/// Encodes an extremal adjacency matrix into its boundary-walk signature.
///
/// Cursors start at `i = 0`, `j = n-1`. At each step a 1 at `(i, j)` emits a
/// 1-bit and advances `i`; otherwise a 0-bit is emitted and `j` retreats. The
/// walk stops when the cursors meet, with the first emitted bit ending up
/// most significant. Each visited row is verified to keep the staircase
/// shape; a 1 following a non-diagonal 0 rejects the matrix. Walks longer
/// than 64 bits cannot fit the signature and are rejected up front.
pub fn signature_of(matrix: &Matrix) -> Result<u64, GraphError> {
    if !matrix.is_square() {
        return Err(GraphError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    let n = matrix.rows();
    if n > 65 {
        return Err(GraphError::SignatureOverflow { vertices: n });
    }

    let mut signature: u64 = 0;
    let mut i: usize = 0;
    let mut j: isize = n as isize - 1;
    while (i as isize) < j {
        check_row_staircase(matrix, i)?;
        if matrix.get(i, j as usize) == 1 {
            signature = (signature << 1) | 1;
            i += 1;
        } else {
            signature <<= 1;
            j -= 1;
        }
    }
    Ok(signature)
}

/// Result-flag variant of [`signature_of`].
pub fn signature_of_checked(matrix: &Matrix) -> Checked<u64> {
    Checked::from_result(signature_of(matrix))
}

/// Decodes a signature back into the extremal adjacency matrix it describes.
///
/// The vertex count is the signature's bit length plus one. Replaying the
/// walk, a 1-bit fills row and column `i` across the current `[i, j]` range
/// and advances `i`; a 0-bit retreats `j`. The diagonal is zeroed at the end.
/// A bit pattern that leaves unconsumed bits once the cursors meet does not
/// describe any staircase and is rejected explicitly.
pub fn adjacency_from_signature(signature: u64) -> Result<Matrix, GraphError> {
    let bits = (64 - signature.leading_zeros()) as usize;
    let n = bits + 1;
    let mut matrix = Matrix::square(n);

    let mut i: usize = 0;
    let mut j: usize = n - 1;
    let mut index = 0;
    while i < j && index < bits {
        let bit = (signature >> (bits - 1 - index)) & 1;
        if bit == 1 {
            for k in i..=j {
                matrix.set(i, k, 1);
                matrix.set(k, i, 1);
            }
            i += 1;
        } else {
            j -= 1;
        }
        index += 1;
    }
    if index < bits {
        return Err(GraphError::MalformedSignature { signature });
    }

    for k in 0..n {
        matrix.set(k, k, 0);
    }
    Ok(matrix)
}

/// Result-flag variant of [`adjacency_from_signature`].
pub fn adjacency_from_signature_checked(signature: u64) -> Checked<Matrix> {
    Checked::from_result(adjacency_from_signature(signature))
}

/// Computes the signature of the adjacency matrix described by a base list.
///
/// The matrix is rebuilt from the pairs (size = largest index + 1, symmetric
/// fill, zero diagonal) and the plain boundary walk is applied; row shape is
/// not re-verified since the rebuilt matrix is staircase by construction of
/// the walk. Empty lists and lists carrying sentinel or negative pairs are
/// rejected.
pub fn bases_to_signature(bases: &[Base]) -> Result<u64, GraphError> {
    if bases.is_empty() {
        return Err(GraphError::EmptyOrInvalidBases);
    }
    let mut max_index: isize = 0;
    for &(a, b) in bases {
        if a < 0 || b < 0 {
            return Err(GraphError::EmptyOrInvalidBases);
        }
        max_index = max_index.max(a.max(b));
    }

    let n = max_index as usize + 1;
    let mut matrix = Matrix::square(n);
    for &(a, b) in bases {
        matrix.set(a as usize, b as usize, 1);
        matrix.set(b as usize, a as usize, 1);
    }
    for k in 0..n {
        matrix.set(k, k, 0);
    }
    boundary_walk(&matrix)
}

/// Result-flag variant of [`bases_to_signature`].
pub fn bases_to_signature_checked(bases: &[Base]) -> Checked<u64> {
    Checked::from_result(bases_to_signature(bases))
}

/// The raw boundary walk shared with base reconstruction: no per-row shape
/// verification, only the overflow guard.
fn boundary_walk(matrix: &Matrix) -> Result<u64, GraphError> {
    let n = matrix.rows();
    if n > 65 {
        return Err(GraphError::SignatureOverflow { vertices: n });
    }
    let mut signature: u64 = 0;
    let mut i: usize = 0;
    let mut j: isize = n as isize - 1;
    while (i as isize) < j {
        if matrix.get(i, j as usize) == 1 {
            signature = (signature << 1) | 1;
            i += 1;
        } else {
            signature <<= 1;
            j -= 1;
        }
    }
    Ok(signature)
}

/// Rejects a row holding a 1 after a non-diagonal 0, scanning left to right.
fn check_row_staircase(matrix: &Matrix, row: usize) -> Result<(), GraphError> {
    let mut zero_seen = false;
    for col in 0..matrix.cols() {
        let value = matrix.get(row, col);
        if value == 0 && col != row {
            zero_seen = true;
        } else if zero_seen && value == 1 {
            return Err(GraphError::NotExtremalShape { row });
        }
    }
    Ok(())
}
