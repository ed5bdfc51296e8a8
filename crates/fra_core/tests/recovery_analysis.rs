//! End-to-end recovery analysis over a small FEC configuration.

use fra_core::characteristics::RecoveryCharacteristics;
use fra_core::graph::{Graph, bfs};
use fra_core::independent::IndependentLossModel;
use fra_core::loss_model::LossModel;
use fra_core::markov::MarkovLossModel;
use fra_core::mask::Mask;
use fra_core::recovery_graph::{RecoveryGraph, full_delivery_sources};

/// Explicit protection matrix, indexed as `[fec_index][packet_index]`.
struct MatrixMask {
    matrix: Vec<Vec<bool>>,
    n: usize,
    k: usize,
}

impl Mask for MatrixMask {
    fn is_protected(&self, packet_index: usize, fec_index: usize) -> bool {
        self.matrix
            .get(fec_index)
            .and_then(|row| row.get(packet_index))
            .copied()
            .unwrap_or(false)
    }

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }
}

/// N=3, K=1, parity 0 protects data packets 0 and 1 only.
fn pair_mask() -> MatrixMask {
    MatrixMask {
        matrix: vec![vec![true, true, false]],
        n: 3,
        k: 1,
    }
}

#[test]
fn reachable_set_closes_over_recoverable_patterns() {
    let graph = RecoveryGraph::new(pair_mask());
    assert_eq!(graph.num_vertices(), 16);

    let sources = full_delivery_sources(3, 1);
    assert_eq!(sources, vec![0b0111, 0b1111]);

    let mut reachable = bfs(&graph, &sources);
    reachable.sort_unstable();

    // The fully-delivered sources, plus the two patterns recoverable by
    // spending the parity packet on data 0 or data 1.
    assert_eq!(reachable, vec![0b0111, 0b1101, 0b1110, 0b1111]);
}

#[test]
fn characteristics_find_single_loss_failure() {
    let graph = RecoveryGraph::new(pair_mask());
    let reachable = bfs(&graph, &full_delivery_sources(3, 1));

    let characteristics = RecoveryCharacteristics::from_reachable(3, 1, &reachable);

    // Losing unprotected data packet 2 already defeats recovery.
    assert_eq!(characteristics.min_lost_for_failure, 1);
    assert_eq!(characteristics.min_consecutive_lost_for_failure, 1);
}

#[test]
fn recovery_probability_sums_reachable_mass() {
    let graph = RecoveryGraph::new(pair_mask());
    let reachable = bfs(&graph, &full_delivery_sources(3, 1));
    let total_packets = 4;

    let model = IndependentLossModel::new(0.1);
    let recovery_probability: f64 = reachable
        .iter()
        .map(|&vertex| model.probability(vertex, total_packets))
        .sum();

    let expected: f64 = [0b0111, 0b1101, 0b1110, 0b1111]
        .iter()
        .map(|&vertex: &usize| {
            let delivered = vertex.count_ones() as i32;
            0.1f64.powi(4 - delivered) * 0.9f64.powi(delivered)
        })
        .sum();

    assert!((recovery_probability - expected).abs() < 1e-6);
    assert!(recovery_probability < 1.0);
}

#[test]
fn markov_and_independent_agree_on_reachable_mass_when_degenerate() {
    let graph = RecoveryGraph::new(pair_mask());
    let reachable = bfs(&graph, &full_delivery_sources(3, 1));
    let total_packets = 4;

    let p = 0.2;
    let markov = MarkovLossModel::new(p, p, 0.0, 0.0);
    let independent = IndependentLossModel::new(p);

    let markov_mass: f64 = reachable
        .iter()
        .map(|&vertex| markov.probability(vertex, total_packets))
        .sum();
    let independent_mass: f64 = reachable
        .iter()
        .map(|&vertex| independent.probability(vertex, total_packets))
        .sum();

    assert!((markov_mass - independent_mass).abs() < 1e-6);
}
