use grex_core::Matrix;
use sha2::{Digest, Sha256};

/// Computes the canonical structural hash for the provided matrix.
///
/// Dimensions and row-major cells feed a SHA-256 digest, so two matrices
/// hash equally exactly when they are equal cell for cell.
pub fn canonical_hash(matrix: &Matrix) -> String {
    let mut hasher = Sha256::new();
    hasher.update((matrix.rows() as u64).to_le_bytes());
    hasher.update((matrix.cols() as u64).to_le_bytes());
    for &cell in matrix.cells() {
        hasher.update(cell.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
