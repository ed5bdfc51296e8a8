//! Protection mask construction and parsing for FEC recovery analysis.
//!
//! Provides concrete implementations of the `Mask` capability consumed by
//! `fra_core`: interleaved, bursty and seeded-random generated masks, raw
//! byte-encoded masks, explicit boolean matrices, and a text-file loader.
//! All factories validate dimensions up front and return
//! `FecError::InvalidMaskConfig` for configurations they cannot satisfy;
//! constructed masks never fail afterward.

use fra_core::FecError;
use fra_core::mask::Mask;

/// Byte-encoded protection masks with MSB-first bit rows.
pub mod bitmask;

/// Bursty masks protecting consecutive packet windows.
pub mod bursty;

/// Interleaved masks assigning each packet to one parity round-robin.
pub mod interleaved;

/// Text-file mask loading.
pub mod loader;

/// Explicit boolean protection matrices.
pub mod matrix;

/// Seeded pseudo-random masks.
pub mod random;

/// Factory capability for producing masks of requested dimensions.
///
/// Dimensions must satisfy `0 < k <= n`; anything else yields
/// `FecError::InvalidMaskConfig`.
pub trait MaskFactory {
    /// Creates a mask with `n` data packets and `k` parity packets.
    fn create_mask(&self, n: usize, k: usize) -> Result<Box<dyn Mask + Send + Sync>, FecError>;
}

pub(crate) fn validate_dimensions(n: usize, k: usize) -> Result<(), FecError> {
    if n == 0 || k == 0 || k > n {
        return Err(FecError::InvalidMaskConfig { n, k });
    }
    Ok(())
}

/// Returns the named mask factories exercised by the analysis sweep:
/// bursty, random and interleaved, in that order.
pub fn standard_factories() -> Vec<(&'static str, Box<dyn MaskFactory + Send + Sync>)> {
    vec![
        ("Bursty", Box::new(bursty::BurstyMaskFactory)),
        ("Random", Box::new(random::RandomMaskFactory::default())),
        ("Interleaved", Box::new(interleaved::InterleavedMaskFactory)),
    ]
}
