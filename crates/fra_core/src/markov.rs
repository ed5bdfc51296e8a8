//! Gilbert-Elliott two-state Markov packet loss model.
//!
//! State 0 is "good" (loss probability `pe0`), state 1 is "bad" (loss
//! probability `pe1`); the chain moves good-to-bad with probability `p01`
//! and bad-to-good with probability `p10`. A pattern's probability is the
//! steady-state mixture of two conditional probabilities, one per starting
//! state, each computed by a forward dynamic program over the packet
//! positions. Conditional results are memoized per model instance.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::loss_model::LossModel;

/// Memoization key for the conditional pattern probability DP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    pattern: usize,
    length: usize,
    init_state: u8,
}

/// Two-state Markov (Gilbert-Elliott) loss model.
///
/// Parameters are immutable after construction; the memoization cache is
/// the only mutable state and is owned by the instance, so independently
/// parameterized models coexist safely. Cache access is guarded by a
/// read-write lock: lookups take the read lock, a miss recomputes outside
/// the lock and inserts under the write lock. Duplicate computation on a
/// race is harmless since results are deterministic per key, and a
/// poisoned lock is recovered rather than propagated for the same reason.
pub struct MarkovLossModel {
    /// Loss probability in the good state.
    pub pe0: f64,
    /// Loss probability in the bad state.
    pub pe1: f64,
    /// Transition probability from good to bad.
    pub p01: f64,
    /// Transition probability from bad to good.
    pub p10: f64,

    steady_state0: f64,
    steady_state1: f64,

    cache: RwLock<HashMap<CacheKey, f64>>,
}

impl MarkovLossModel {
    /// Creates a Gilbert-Elliott model from its four parameters.
    ///
    /// Steady-state probabilities are `p10/(p01+p10)` and `p01/(p01+p10)`.
    /// A degenerate chain with `p01 + p10 == 0` cannot transition at all;
    /// by convention both steady-state probabilities are then `0.5`.
    ///
    /// # Arguments
    ///
    /// * `pe0` - Loss probability in the good state
    /// * `pe1` - Loss probability in the bad state
    /// * `p01` - Good-to-bad transition probability
    /// * `p10` - Bad-to-good transition probability
    pub fn new(pe0: f64, pe1: f64, p01: f64, p10: f64) -> Self {
        let denominator = p01 + p10;
        let (steady_state0, steady_state1) = if denominator > 0.0 {
            (p10 / denominator, p01 / denominator)
        } else {
            (0.5, 0.5)
        };

        Self {
            pe0,
            pe1,
            p01,
            p10,
            steady_state0,
            steady_state1,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a Gilbert model: no loss in the good state (`pe0 = 0`).
    pub fn gilbert(pe1: f64, p01: f64, p10: f64) -> Self {
        Self::new(0.0, pe1, p01, p10)
    }

    /// Returns the steady-state probabilities `(pi0, pi1)`.
    pub fn steady_state(&self) -> (f64, f64) {
        (self.steady_state0, self.steady_state1)
    }

    /// Clears the memoization cache.
    ///
    /// Subsequent probability queries are functionally identical, only
    /// slower until the cache repopulates.
    pub fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    /// Returns the probability of `pattern` over `length` packets given
    /// the chain starts in `init_state`, memoized.
    fn conditional_probability(&self, pattern: usize, length: usize, init_state: u8) -> f64 {
        if length == 0 {
            return 1.0;
        }

        let key = CacheKey {
            pattern,
            length,
            init_state,
        };

        // A poisoned lock is recoverable: entries are deterministic per
        // key, so the worst a panicked writer leaves behind is a missing
        // or duplicate-computed value.
        let cache = self
            .cache
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(&probability) = cache.get(&key) {
            return probability;
        }
        drop(cache);

        let probability = self.conditional_probability_dp(pattern, length, init_state);

        self.cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, probability);

        probability
    }

    /// Forward DP over packet positions.
    ///
    /// `dp[i]` holds the probability of observing the first `i` pattern
    /// bits and ending in each state. Each step multiplies the transition
    /// probability into a state by that state's emission probability:
    /// `1 - pe_state` when the pattern bit is set (delivered), `pe_state`
    /// when it is clear (lost). The result sums both ending states.
    fn conditional_probability_dp(&self, pattern: usize, length: usize, init_state: u8) -> f64 {
        let mut dp = if init_state == 0 {
            [1.0, 0.0]
        } else {
            [0.0, 1.0]
        };

        for packet_index in 0..length {
            let delivered = pattern & (1 << packet_index) != 0;
            let emission0 = if delivered { 1.0 - self.pe0 } else { self.pe0 };
            let emission1 = if delivered { 1.0 - self.pe1 } else { self.pe1 };

            dp = [
                (dp[0] * (1.0 - self.p01) + dp[1] * self.p10) * emission0,
                (dp[0] * self.p01 + dp[1] * (1.0 - self.p10)) * emission1,
            ];
        }

        dp[0] + dp[1]
    }
}

impl LossModel for MarkovLossModel {
    fn probability(&self, vertex: usize, len: usize) -> f64 {
        if len == 0 {
            return 0.0;
        }

        let prob0 = self.conditional_probability(vertex, len, 0);
        let prob1 = self.conditional_probability(vertex, len, 1);

        self.steady_state0 * prob0 + self.steady_state1 * prob1
    }

    fn average_loss_probability(&self) -> f64 {
        self.steady_state0 * self.pe0 + self.steady_state1 * self.pe1
    }
}
