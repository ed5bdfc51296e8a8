//! Protection pattern capability.
//!
//! A mask declares which data packets each parity packet covers. The core
//! only consumes this capability; constructing concrete masks (interleaved,
//! bursty, byte-encoded, ...) is the collaborator crates' concern.

/// FEC protection pattern over `n` data packets and `k` parity packets.
///
/// The relation is immutable once constructed. Index-bounds semantics are
/// part of the contract: queries outside `[0, n())` or `[0, k())` report
/// "not protected" and never fail.
pub trait Mask {
    /// Returns true if the data packet at `packet_index` is protected by
    /// the parity packet at `fec_index`.
    fn is_protected(&self, packet_index: usize, fec_index: usize) -> bool;

    /// Returns the number of data packets.
    fn n(&self) -> usize;

    /// Returns the number of parity packets.
    fn k(&self) -> usize;
}

impl<M: Mask + ?Sized> Mask for &M {
    fn is_protected(&self, packet_index: usize, fec_index: usize) -> bool {
        (**self).is_protected(packet_index, fec_index)
    }

    fn n(&self) -> usize {
        (**self).n()
    }

    fn k(&self) -> usize {
        (**self).k()
    }
}

impl<M: Mask + ?Sized> Mask for Box<M> {
    fn is_protected(&self, packet_index: usize, fec_index: usize) -> bool {
        (**self).is_protected(packet_index, fec_index)
    }

    fn n(&self) -> usize {
        (**self).n()
    }

    fn k(&self) -> usize {
        (**self).k()
    }
}
