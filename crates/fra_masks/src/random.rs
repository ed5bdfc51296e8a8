//! Seeded pseudo-random protection masks.
//!
//! Assigns each data packet to one parity packet chosen by an xorshift64*
//! generator, then patches any parity left without coverage. The same seed
//! always produces the same mask, so analyses are reproducible.

use fra_core::FecError;
use fra_core::mask::Mask;

use crate::matrix::MatrixMask;
use crate::{MaskFactory, validate_dimensions};

const DEFAULT_SEED: u64 = 12345;

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// Factory for seeded random masks.
pub struct RandomMaskFactory {
    seed: u64,
}

impl RandomMaskFactory {
    /// Creates a factory generating masks from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for RandomMaskFactory {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl MaskFactory for RandomMaskFactory {
    fn create_mask(&self, n: usize, k: usize) -> Result<Box<dyn Mask + Send + Sync>, FecError> {
        validate_dimensions(n, k)?;

        let mut rng = XorShift64::new(self.seed ^ ((n as u64) << 32 | k as u64));
        let mut matrix = vec![vec![false; n]; k];
        for packet in 0..n {
            matrix[rng.next_below(k)][packet] = true;
        }

        // A parity with no coverage adds nothing to recovery; steal a
        // packet from a parity that covers more than one.
        for fec in 0..k {
            if matrix[fec].iter().any(|&covered| covered) {
                continue;
            }
            let donor_packet = (0..n).find(|&packet| {
                let owner = (0..k).find(|&other| matrix[other][packet]);
                owner.is_some_and(|owner| matrix[owner].iter().filter(|&&c| c).count() > 1)
            });
            if let Some(packet) = donor_packet {
                for row in matrix.iter_mut() {
                    row[packet] = false;
                }
                matrix[fec][packet] = true;
            }
        }

        let mask = MatrixMask::new(matrix, n, k)?;
        Ok(Box::new(mask))
    }
}
