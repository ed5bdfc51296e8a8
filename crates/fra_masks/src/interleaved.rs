//! Interleaved protection masks.
//!
//! Each data packet is protected by exactly one parity packet, assigned
//! round-robin: packet `i` belongs to parity `i % k`. Spreads each
//! parity's coverage across the sequence, which suits independent loss
//! better than burst loss.

use fra_core::FecError;
use fra_core::mask::Mask;

use crate::{MaskFactory, validate_dimensions};

/// Round-robin single-parity-per-packet mask.
#[derive(Debug, Clone, Copy)]
pub struct InterleavedMask {
    n: usize,
    k: usize,
}

impl Mask for InterleavedMask {
    fn is_protected(&self, packet_index: usize, fec_index: usize) -> bool {
        if packet_index >= self.n || fec_index >= self.k {
            return false;
        }
        packet_index % self.k == fec_index
    }

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }
}

/// Factory for interleaved masks.
pub struct InterleavedMaskFactory;

impl MaskFactory for InterleavedMaskFactory {
    fn create_mask(&self, n: usize, k: usize) -> Result<Box<dyn Mask + Send + Sync>, FecError> {
        validate_dimensions(n, k)?;
        Ok(Box::new(InterleavedMask { n, k }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packets_cycle_through_parities() {
        let mask = InterleavedMaskFactory
            .create_mask(6, 2)
            .expect("valid dimensions");

        for packet in [0, 2, 4] {
            assert!(mask.is_protected(packet, 0));
            assert!(!mask.is_protected(packet, 1));
        }
        for packet in [1, 3, 5] {
            assert!(mask.is_protected(packet, 1));
            assert!(!mask.is_protected(packet, 0));
        }
    }

    #[test]
    fn single_parity_covers_everything() {
        let mask = InterleavedMaskFactory
            .create_mask(5, 1)
            .expect("valid dimensions");
        for packet in 0..5 {
            assert!(mask.is_protected(packet, 0));
        }
    }
}
