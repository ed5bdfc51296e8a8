//! Core FEC recovery analysis algorithms and data structures.
//!
//! This crate provides the fundamental components for analyzing how well a
//! forward error correction scheme recovers lost packets under a stochastic
//! loss process: the implicit recovery graph over delivery patterns, the
//! reachability search that computes the set of recoverable patterns, packet
//! loss probability models, and the derived worst-case recovery metrics.
//! All state spaces are exponential in the packet count; keeping `n + k`
//! tractable is the caller's responsibility.

use core::fmt;

/// Abstract graph capability and multi-source breadth-first search.
///
/// Defines the minimal graph interface (vertex count plus on-demand edge
/// enumeration) consumed by the reachability search, together with the
/// search itself. The interface is satisfied by the recovery graph and by
/// any explicit adjacency structure used in testing or reporting.
pub mod graph;

/// Protection pattern capability for FEC masks.
///
/// Declares the relation between data packets and the parity packets that
/// protect them. Concrete mask constructions live outside the core; the
/// algorithms here only require the capability and tolerate out-of-range
/// indices by reporting "not protected".
pub mod mask;

/// Implicit recovery graph over delivery patterns.
///
/// Represents the `2^(n+k)`-vertex state space of delivery patterns with
/// edges computed on demand from a protection pattern. The graph is never
/// materialized; edges are a pure function of the vertex and the mask.
pub mod recovery_graph;

/// Packet loss model capability.
///
/// Maps a delivery pattern to its occurrence probability and reports the
/// model's average loss rate. Implemented by the independent and Markov
/// models in this crate.
pub mod loss_model;

/// Independent (i.i.d. Bernoulli) packet loss model.
pub mod independent;

/// Two-state Markov (Gilbert-Elliott) packet loss model.
///
/// Computes pattern probabilities by forward dynamic programming over the
/// packet positions, mixing the two conditional start-state probabilities
/// by the chain's steady-state distribution. Results are memoized in an
/// instance-owned cache that is safe under concurrent readers.
pub mod markov;

/// Lazy enumeration of same-popcount bit patterns.
///
/// Generates all `n`-bit integers with exactly `k` bits set in strictly
/// increasing order with constant per-step state. Used by the recovery
/// characteristics search to walk loss patterns of a given weight.
pub mod combinations;

/// Worst-case recovery failure metrics.
///
/// Post-processes a reachable-set result into the minimum number of lost
/// packets and the minimum consecutive lost run that defeat recovery, with
/// a `-1` sentinel when no loss pattern defeats it.
pub mod characteristics;

/// Error type returned by FEC analysis configuration.
///
/// The core favors defined no-op behavior over failure: out-of-range
/// vertices and indices yield empty results, degenerate Markov chains fall
/// back to a documented convention, and "not found" is a sentinel value.
/// The only failure the analysis surfaces is an invalid mask configuration
/// at construction time; the graph, search and probability logic assume a
/// validly constructed mask and perform no redundant validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FecError {
    /// A mask factory was given dimensions it cannot satisfy.
    ///
    /// Raised when a protection pattern is requested with zero data or
    /// parity packets, or with more parity packets than data packets.
    /// Carries the offending dimensions for diagnostics.
    InvalidMaskConfig {
        /// Requested number of data packets.
        n: usize,
        /// Requested number of parity packets.
        k: usize,
    },
}

impl fmt::Display for FecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FecError::InvalidMaskConfig { n, k } => {
                write!(f, "invalid mask configuration: n={}, k={}", n, k)
            }
        }
    }
}

impl std::error::Error for FecError {}
