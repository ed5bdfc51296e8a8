//! Packet loss model capability.

/// Probability model over packet delivery patterns.
///
/// A delivery pattern is the low `len` bits of a vertex: bit `i` set means
/// packet `i` was delivered, clear means it was lost. Model parameters are
/// probabilities in `[0, 1]`; passing out-of-domain parameters at
/// construction is a caller contract violation and is not checked.
pub trait LossModel {
    /// Returns the probability that exactly the delivery pattern encoded
    /// by the low `len` bits of `vertex` occurs for a sequence of `len`
    /// packets. A zero-length sequence has probability `0.0`.
    fn probability(&self, vertex: usize, len: usize) -> f64;

    /// Returns the model's average (long-run) packet loss probability.
    fn average_loss_probability(&self) -> f64;
}
