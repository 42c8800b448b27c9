//! Human-readable rendering of matrices, vectors, and pair lists.

use std::fmt::{self, Display};

use crate::types::Matrix;

impl Display for Matrix {
    /// Renders the matrix with space-separated cells and newline-separated
    /// rows, without trailing separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, value) in self.row(row).iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

/// Renders a degree vector as space-separated entries.
pub fn vector_string(values: &[u32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a list of vertex pairs as space-separated `(a, b)` tuples.
pub fn pairs_string<A: Display, B: Display>(pairs: &[(A, B)]) -> String {
    pairs
        .iter()
        .map(|(a, b)| format!("({a}, {b})"))
        .collect::<Vec<_>>()
        .join(" ")
}
