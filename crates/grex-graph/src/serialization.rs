//! JSON and binary transport for matrices.

use grex_core::{GraphError, Matrix};
use serde::{Deserialize, Serialize};

/// Serializes a matrix to a compact binary representation using `bincode`.
pub fn matrix_to_bytes(matrix: &Matrix) -> Result<Vec<u8>, GraphError> {
    let payload = MatrixPayload::from_matrix(matrix);
    bincode::serialize(&payload).map_err(|err| GraphError::Codec {
        message: err.to_string(),
    })
}

/// Restores a matrix from its binary representation.
pub fn matrix_from_bytes(bytes: &[u8]) -> Result<Matrix, GraphError> {
    let payload: MatrixPayload = bincode::deserialize(bytes).map_err(|err| GraphError::Codec {
        message: err.to_string(),
    })?;
    payload.into_matrix()
}

/// Serializes a matrix to a JSON string.
pub fn matrix_to_json(matrix: &Matrix) -> Result<String, GraphError> {
    let payload = MatrixPayload::from_matrix(matrix);
    serde_json::to_string_pretty(&payload).map_err(|err| GraphError::Codec {
        message: err.to_string(),
    })
}

/// Restores a matrix from a JSON string.
pub fn matrix_from_json(json: &str) -> Result<Matrix, GraphError> {
    let payload: MatrixPayload = serde_json::from_str(json).map_err(|err| GraphError::Codec {
        message: err.to_string(),
    })?;
    payload.into_matrix()
}

#[derive(Debug, Serialize, Deserialize)]
struct MatrixPayload {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl MatrixPayload {
    fn from_matrix(matrix: &Matrix) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            cells: matrix.cells().to_vec(),
        }
    }

    fn into_matrix(self) -> Result<Matrix, GraphError> {
        Matrix::from_parts(self.rows, self.cols, self.cells)
    }
}
