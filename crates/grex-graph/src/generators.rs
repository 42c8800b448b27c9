use grex_core::rng::RngHandle;
use grex_core::Matrix;
use rand::Rng;

use crate::reconstruct::realize;

/// Generates a random degree vector accepted by the fixed-order sweep.
///
/// Entries are drawn uniformly up to `max_degree` (capped below the vertex
/// count), the parity of the sum is repaired, and the candidate is kept only
/// if the sweep realizes it. After a bounded number of rejections the
/// all-zero vector is returned, which is always realizable.
pub fn gen_graphical_vector(n: usize, max_degree: u32, rng: &mut RngHandle) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }
    let cap = max_degree.min(n.saturating_sub(1) as u32);
    for _ in 0..64 {
        let mut degrees: Vec<u32> = (0..n).map(|_| rng.gen_range(0..=cap)).collect();
        let sum: u64 = degrees.iter().map(|&d| u64::from(d)).sum();
        if sum % 2 != 0 {
            if let Some(entry) = degrees.iter_mut().find(|entry| **entry > 0) {
                *entry -= 1;
            }
        }
        if realize(&degrees).is_ok() {
            return degrees;
        }
    }
    vec![0; n]
}

/// Builds a random extremal adjacency matrix whose boundary walk is
/// canonical.
///
/// The walk's first step is forced to 1 so the emitted signature keeps its
/// full bit length and the matrix round-trips through the codec.
pub fn gen_staircase(n: usize, rng: &mut RngHandle) -> Matrix {
    if n < 2 {
        return Matrix::square(n);
    }
    let mut matrix = Matrix::square(n);
    let mut i: usize = 0;
    let mut j: usize = n - 1;
    for step in 0..n - 1 {
        let advance = step == 0 || rng.gen_bool(0.5);
        if advance {
            for k in i..=j {
                matrix.set(i, k, 1);
                matrix.set(k, i, 1);
            }
            i += 1;
        } else {
            j -= 1;
        }
    }
    for k in 0..n {
        matrix.set(k, k, 0);
    }
    matrix
}
