//! Independent packet loss model.
//!
//! Every packet is lost independently with the same probability `p`, so a
//! delivery pattern's probability is `p^lost * (1-p)^delivered`.

use crate::loss_model::LossModel;

/// Uniform i.i.d. Bernoulli loss model.
#[derive(Debug, Clone, Copy)]
pub struct IndependentLossModel {
    /// Per-packet loss probability, in `[0, 1]`.
    pub p: f64,
}

impl IndependentLossModel {
    /// Creates an independent loss model with per-packet loss probability
    /// `p`.
    pub fn new(p: f64) -> Self {
        Self { p }
    }
}

impl LossModel for IndependentLossModel {
    fn probability(&self, vertex: usize, len: usize) -> f64 {
        if len == 0 {
            return 0.0;
        }

        let delivered = (vertex & ((1usize << len) - 1)).count_ones() as i32;
        let lost = len as i32 - delivered;

        self.p.powi(lost) * (1.0 - self.p).powi(delivered)
    }

    fn average_loss_probability(&self) -> f64 {
        self.p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn pattern_probability_is_bernoulli_product() {
        let model = IndependentLossModel::new(0.1);

        // 0b101 over 3 packets: two delivered, one lost.
        let expected = 0.1 * 0.9 * 0.9;
        assert!((model.probability(0b101, 3) - expected).abs() < TOLERANCE);

        // All delivered and all lost extremes.
        assert!((model.probability(0b111, 3) - 0.9f64.powi(3)).abs() < TOLERANCE);
        assert!((model.probability(0, 3) - 0.1f64.powi(3)).abs() < TOLERANCE);
    }

    #[test]
    fn zero_length_sequence_has_zero_probability() {
        let model = IndependentLossModel::new(0.3);
        assert_eq!(model.probability(0, 0), 0.0);
    }

    #[test]
    fn high_bits_beyond_len_are_ignored() {
        let model = IndependentLossModel::new(0.25);
        assert_eq!(model.probability(0b101, 2), model.probability(0b11101, 2));
    }

    #[test]
    fn probabilities_sum_to_one() {
        let model = IndependentLossModel::new(0.37);
        for len in 1..=8 {
            let total: f64 = (0..1usize << len)
                .map(|vertex| model.probability(vertex, len))
                .sum();
            assert!(
                (total - 1.0).abs() < TOLERANCE,
                "len {}: total {}",
                len,
                total
            );
        }
    }

    #[test]
    fn average_loss_probability_is_p() {
        assert_eq!(IndependentLossModel::new(0.42).average_loss_probability(), 0.42);
    }
}
