//! Explicit boolean protection matrices.

use fra_core::FecError;
use fra_core::mask::Mask;

use crate::validate_dimensions;

/// Mask backed by an explicit `k x n` boolean matrix, indexed as
/// `[fec_index][packet_index]`.
///
/// The general-purpose representation: generated masks, parsed mask files
/// and hand-written test patterns all reduce to it.
#[derive(Debug, Clone)]
pub struct MatrixMask {
    matrix: Vec<Vec<bool>>,
    n: usize,
    k: usize,
}

impl MatrixMask {
    /// Creates a mask from a `k x n` protection matrix.
    ///
    /// The matrix must have exactly `k` rows of exactly `n` columns and
    /// the dimensions must satisfy `0 < k <= n`.
    ///
    /// # Arguments
    ///
    /// * `matrix` - Protection rows, one per parity packet
    /// * `n` - Number of data packets
    /// * `k` - Number of parity packets
    pub fn new(matrix: Vec<Vec<bool>>, n: usize, k: usize) -> Result<Self, FecError> {
        validate_dimensions(n, k)?;
        if matrix.len() != k || matrix.iter().any(|row| row.len() != n) {
            return Err(FecError::InvalidMaskConfig { n, k });
        }
        Ok(Self { matrix, n, k })
    }
}

impl Mask for MatrixMask {
    fn is_protected(&self, packet_index: usize, fec_index: usize) -> bool {
        self.matrix
            .get(fec_index)
            .and_then(|row| row.get(packet_index))
            .copied()
            .unwrap_or(false)
    }

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }
}
