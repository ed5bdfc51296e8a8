//! Implicit recovery graph over packet delivery patterns.
//!
//! Each vertex is a bitset over `n + k` packets: bit `i` for `i < n` means
//! data packet `i` is present (delivered or recovered), bit `n + j` means
//! parity packet `j` is present. An edge leads from a vertex to the same
//! vertex with one protected data bit cleared, valid only when the parity
//! packet covering it is present together with every other packet it
//! protects. Reachability from the fully-delivered vertices therefore
//! closes over "equally recoverable" delivery patterns.
//!
//! The graph is exponential in `n + k` and is never materialized: edges
//! are a pure function of the vertex and the mask.

use crate::graph::Graph;
use crate::mask::Mask;

/// Recovery graph derived from a protection pattern.
///
/// Holds the mask and the dimensions it reports; no edge storage exists.
/// The graph is stateless after construction and may be queried from
/// multiple searches concurrently.
pub struct RecoveryGraph<M: Mask> {
    num_vertices: usize,
    n: usize,
    k: usize,
    mask: M,
}

impl<M: Mask> RecoveryGraph<M> {
    /// Creates the recovery graph for `mask`, with `2^(n+k)` vertices.
    pub fn new(mask: M) -> Self {
        let n = mask.n();
        let k = mask.k();
        Self {
            num_vertices: 1 << (n + k),
            n,
            k,
            mask,
        }
    }

    /// Returns the number of data packets.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of parity packets.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Checks whether parity packet `fec_index` is usable in `vertex`:
    /// the parity packet itself is present and every data packet it
    /// protects is present.
    fn can_use_fec_packet(&self, vertex: usize, fec_index: usize) -> bool {
        if vertex & (1 << (self.n + fec_index)) == 0 {
            return false;
        }
        for packet_index in 0..self.n {
            if self.mask.is_protected(packet_index, fec_index)
                && vertex & (1 << packet_index) == 0
            {
                return false;
            }
        }
        true
    }
}

impl<M: Mask> Graph for RecoveryGraph<M> {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Enumerates recovery edges leaving `vertex`.
    ///
    /// For each usable parity packet, emits one destination per protected
    /// data packet: the vertex with that data bit cleared. The same
    /// destination may be emitted once per parity packet covering it; the
    /// search deduplicates through its visited marker. An out-of-range
    /// `vertex` yields no edges.
    fn edges_from(&self, vertex: usize) -> Vec<usize> {
        if vertex >= self.num_vertices {
            return Vec::new();
        }

        let mut edges = Vec::new();
        for fec_index in 0..self.k {
            if !self.can_use_fec_packet(vertex, fec_index) {
                continue;
            }
            for packet_index in 0..self.n {
                if self.mask.is_protected(packet_index, fec_index) {
                    let destination = vertex & !(1 << packet_index);
                    if destination != vertex {
                        edges.push(destination);
                    }
                }
            }
        }
        edges
    }
}

/// Returns the fully-delivered source vertices for an `n`/`k` analysis.
///
/// Every source has all `n` data bits set; the `2^k` parity-bit
/// combinations each contribute one source. Reachability is computed from
/// these vertices outward, toward less-complete delivery patterns.
pub fn full_delivery_sources(n: usize, k: usize) -> Vec<usize> {
    let all_data = (1usize << n) - 1;
    (0..1usize << k)
        .map(|fec_state| all_data | (fec_state << n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::bfs;

    /// Explicit protection matrix indexed as `[fec_index][packet_index]`.
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

    fn pair_mask() -> MatrixMask {
        // Parity 0 protects data packets 0 and 1 only.
        MatrixMask {
            matrix: vec![vec![true, true, false]],
            n: 3,
            k: 1,
        }
    }

    #[test]
    fn vertex_count_is_two_to_n_plus_k() {
        let graph = RecoveryGraph::new(pair_mask());
        assert_eq!(graph.num_vertices(), 16);
        assert_eq!(graph.n(), 3);
        assert_eq!(graph.k(), 1);
    }

    #[test]
    fn edges_clear_one_protected_data_bit() {
        let graph = RecoveryGraph::new(pair_mask());

        // Vertex 11 = 0b1011: data 0, 1 and parity 0 present, data 2 absent.
        let mut edges = graph.edges_from(11);
        edges.sort_unstable();
        assert_eq!(edges, vec![9, 10]);

        // Vertex 15 = 0b1111: everything present.
        let mut edges = graph.edges_from(15);
        edges.sort_unstable();
        assert_eq!(edges, vec![13, 14]);
    }

    #[test]
    fn missing_parity_blocks_recovery() {
        let graph = RecoveryGraph::new(pair_mask());

        // Vertex 3 = 0b0011: data 0, 1 present but parity 0 absent.
        assert!(graph.edges_from(3).is_empty());
        assert!(graph.edges_from(0).is_empty());
    }

    #[test]
    fn missing_protected_packet_blocks_recovery() {
        let graph = RecoveryGraph::new(pair_mask());

        // Vertex 10 = 0b1010: data 1 and parity present, data 0 missing, so
        // the parity packet is already consumed reconstructing data 0.
        assert!(graph.edges_from(10).is_empty());
    }

    #[test]
    fn overlapping_parities_emit_duplicate_destinations() {
        let mask = MatrixMask {
            matrix: vec![vec![true, true, false], vec![false, true, true]],
            n: 3,
            k: 2,
        };
        let graph = RecoveryGraph::new(mask);
        assert_eq!(graph.num_vertices(), 32);

        // Vertex 31 = 0b11111: both parities usable; data 1 is covered by
        // both, so destination 29 appears twice.
        let edges = graph.edges_from(31);
        assert_eq!(edges.len(), 4);
        for destination in [27, 29, 30] {
            assert!(edges.contains(&destination));
        }
        assert_eq!(edges.iter().filter(|&&d| d == 29).count(), 2);
    }

    #[test]
    fn out_of_range_vertex_has_no_edges() {
        let graph = RecoveryGraph::new(pair_mask());
        assert!(graph.edges_from(16).is_empty());
        assert!(graph.edges_from(usize::MAX).is_empty());
    }

    #[test]
    fn full_delivery_sources_cover_all_parity_states() {
        assert_eq!(full_delivery_sources(3, 1), vec![0b0111, 0b1111]);
        assert_eq!(
            full_delivery_sources(2, 2),
            vec![0b0011, 0b0111, 0b1011, 0b1111]
        );
    }

    #[test]
    fn reachability_flows_from_complete_toward_incomplete() {
        let graph = RecoveryGraph::new(pair_mask());

        let mut reachable = bfs(&graph, &[15]);
        reachable.sort_unstable();
        // From 0b1111 one recovery step reaches 13 and 14; 12 needs both
        // protected packets recovered, which a single parity cannot do.
        assert!(reachable.contains(&15));
        assert!(reachable.contains(&13));
        assert!(reachable.contains(&14));
        assert!(!reachable.contains(&12));

        // The incomplete vertex 0 reaches nothing but itself: edges never
        // point from less-complete to more-complete patterns.
        assert_eq!(bfs(&graph, &[0]), vec![0]);
    }
}
