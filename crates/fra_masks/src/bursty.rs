//! Bursty protection masks.
//!
//! Parity `j` protects the consecutive window of `n - k + 1` data packets
//! starting at `j`. Adjacent parities cover overlapping windows, so a
//! burst of consecutive losses still leaves some window fully delivered
//! for the parities outside the burst.

use fra_core::FecError;
use fra_core::mask::Mask;

use crate::{MaskFactory, validate_dimensions};

/// Sliding-window consecutive-coverage mask.
#[derive(Debug, Clone, Copy)]
pub struct BurstyMask {
    n: usize,
    k: usize,
}

impl BurstyMask {
    fn window(&self) -> usize {
        self.n - self.k + 1
    }
}

impl Mask for BurstyMask {
    fn is_protected(&self, packet_index: usize, fec_index: usize) -> bool {
        if packet_index >= self.n || fec_index >= self.k {
            return false;
        }
        packet_index >= fec_index && packet_index < fec_index + self.window()
    }

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }
}

/// Factory for bursty masks.
pub struct BurstyMaskFactory;

impl MaskFactory for BurstyMaskFactory {
    fn create_mask(&self, n: usize, k: usize) -> Result<Box<dyn Mask + Send + Sync>, FecError> {
        validate_dimensions(n, k)?;
        Ok(Box::new(BurstyMask { n, k }))
    }
}
