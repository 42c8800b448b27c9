//! Base extraction: boundary breakpoints of staircase-shaped adjacency
//! matrices.

use grex_core::{Base, Checked, GraphError, Matrix};

use crate::validate::adjacency_graphical;

/// Options controlling [`bases`].
#[derive(Debug, Clone, Copy)]
pub struct BaseOptions {
    /// Whether a staircase violation is a hard failure. When false, rows that
    /// break the shape report the sentinel boundary `-1` instead.
    pub extreme: bool,
    /// Whether emitted pairs are inverted to `(j, i)`.
    pub inverse: bool,
}

impl Default for BaseOptions {
    fn default() -> Self {
        Self {
            extreme: true,
            inverse: false,
        }
    }
}

/// Extracts the ordered boundary breakpoints of a staircase-shaped adjacency
/// matrix.
///
/// Two cursors walk the upper-right boundary: `i` ascends from 0 while `j`
/// carries the previous row's boundary. Each row's window `(i, j]` is scanned
/// top-down; the boundary moves to the start of the row's leading 1-run, and
/// a second 1-run inside the window breaks the staircase shape. With
/// `extreme` set that is [`GraphError::NotExtremalShape`]; otherwise the row
/// keeps the sentinel boundary `-1` and the walk continues. A pair is
/// recorded whenever the boundary changes between rows and the previous pair
/// is non-degenerate. The walk stops at `i >= n/2`, so the lowest boundary
/// row of an odd staircase may go unreported; this mirrors the rib scan's
/// half-range cap.
pub fn bases(matrix: &Matrix, options: &BaseOptions) -> Result<Vec<Base>, GraphError> {
    adjacency_graphical(matrix)?;
    let n = matrix.rows() as isize;

    let mut out = Vec::new();
    let mut i: isize = 0;
    let mut j: isize = n - 1;
    let mut prev_i: isize = 0;
    let mut prev_j: isize = 0;

    while i < n / 2 {
        let mut prev_cell = 0u32;
        let mut run_closed = false;
        let mut temp = j;
        while temp > i {
            let cell = matrix.get(i as usize, temp as usize);
            if cell == 1 && prev_cell == 0 {
                if run_closed {
                    if options.extreme {
                        return Err(GraphError::NotExtremalShape { row: i as usize });
                    }
                    j = -1;
                } else {
                    j = temp;
                }
            } else if cell == 0 {
                if prev_cell == 1 {
                    run_closed = true;
                }
                j = -1;
            }
            prev_cell = cell;
            temp -= 1;
        }

        if prev_j != j && prev_i != prev_j {
            out.push(if options.inverse {
                (prev_j, prev_i)
            } else {
                (prev_i, prev_j)
            });
        }
        prev_i = i;
        prev_j = j;
        i += 1;
    }
    Ok(out)
}

/// Result-flag variant of [`bases`].
pub fn bases_checked(matrix: &Matrix, options: &BaseOptions) -> Checked<Vec<Base>> {
    Checked::from_result(bases(matrix, options))
}
