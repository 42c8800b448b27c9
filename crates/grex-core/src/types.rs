use crate::errors::GraphError;

/// An edge of a simple graph, reported as an ordered pair of vertex indices.
///
/// Extraction normally emits `(i, j)` with `i < j`; callers may request the
/// inverted `(j, i)` form instead.
pub type Rib = (usize, usize);

/// A boundary breakpoint of a staircase-shaped adjacency matrix.
///
/// Signed so that rows without a conforming boundary can report the sentinel
/// value `-1` when base extraction tolerates non-extremal rows.
pub type Base = (isize, isize);

/// Dense row-major matrix of small non-negative integers.
///
/// One type serves both representation roles: square adjacency matrices
/// (symmetric with zero diagonal when valid) and vertices-by-edges incidence
/// matrices. Entries above one are representable so that validation can
/// reject them explicitly as multi-edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl Matrix {
    /// Creates a matrix of the given dimensions with every cell set to zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Creates a square zero matrix with `n` rows and columns.
    pub fn square(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// Builds a matrix from row slices, rejecting jagged input.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, GraphError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GraphError::JaggedRows {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Reassembles a matrix from its raw parts, checking consistency.
    pub fn from_parts(rows: usize, cols: usize, data: Vec<u32>) -> Result<Self, GraphError> {
        if data.len() != rows * cols {
            return Err(GraphError::Codec {
                message: format!(
                    "payload holds {} cells, expected {} for a {rows}x{cols} matrix",
                    data.len(),
                    rows * cols
                ),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.cols + col]
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the cells of a single row as a slice.
    pub fn row(&self, row: usize) -> &[u32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns the raw row-major cell storage.
    pub fn cells(&self) -> &[u32] {
        &self.data
    }
}
