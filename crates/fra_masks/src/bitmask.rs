//! Byte-encoded protection masks.
//!
//! The wire encoding used by packetized FEC headers: two bytes per parity
//! packet, MSB first, bit `b` of a row covering data packet `b`. Rows are
//! 16 bits wide, so data packet indices are capped at 16.

use bitvec::prelude::*;
use fra_core::FecError;
use fra_core::mask::Mask;

use crate::validate_dimensions;

/// Bits per encoded mask row (two bytes, MSB first).
pub const ROW_BITS: usize = 16;

/// Mask decoded from raw MSB-first mask bytes.
#[derive(Debug, Clone)]
pub struct BytePatternMask {
    bits: BitVec<u8, Msb0>,
    n: usize,
    k: usize,
}

impl BytePatternMask {
    /// Decodes a mask from its byte rows.
    ///
    /// `data` must hold two bytes per parity packet and `n` must fit a
    /// 16-bit row; otherwise the configuration is invalid.
    ///
    /// # Arguments
    ///
    /// * `data` - Encoded rows, `2 * k` bytes
    /// * `n` - Number of data packets (at most 16)
    /// * `k` - Number of parity packets
    pub fn from_bytes(data: &[u8], n: usize, k: usize) -> Result<Self, FecError> {
        validate_dimensions(n, k)?;
        if n > ROW_BITS || data.len() < k * (ROW_BITS / 8) {
            return Err(FecError::InvalidMaskConfig { n, k });
        }
        Ok(Self {
            bits: BitVec::from_slice(data),
            n,
            k,
        })
    }
}

impl Mask for BytePatternMask {
    fn is_protected(&self, packet_index: usize, fec_index: usize) -> bool {
        if packet_index >= self.n || fec_index >= self.k {
            return false;
        }
        // Msb0 ordering makes bit 0 of a row the high bit of its first
        // byte, which is exactly the encoding's packet 0.
        self.bits
            .get(fec_index * ROW_BITS + packet_index)
            .map(|bit| *bit)
            .unwrap_or(false)
    }

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }
}
