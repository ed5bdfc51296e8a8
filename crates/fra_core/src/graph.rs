//! Abstract graph interface and multi-source breadth-first search.
//!
//! The reachability search operates on any graph exposing a vertex count
//! and on-demand edge enumeration. Graphs are identified by integer
//! vertices in `[0, num_vertices())`; edges are directed.

use std::collections::VecDeque;

/// Minimal directed graph capability consumed by the reachability search.
///
/// Implementations report a fixed vertex count and enumerate the edges
/// leaving a vertex on demand. Queries for vertices outside
/// `[0, num_vertices())` must return an empty edge list rather than fail.
pub trait Graph {
    /// Returns the total number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Returns the destination vertices of all edges leaving `vertex`.
    ///
    /// The returned sequence may contain duplicate destinations; consumers
    /// that need set semantics must deduplicate. An out-of-range `vertex`
    /// yields an empty sequence.
    fn edges_from(&self, vertex: usize) -> Vec<usize>;
}

/// Performs multi-source breadth-first search over `graph`.
///
/// Seeds the traversal with every distinct in-range vertex in `sources`
/// (duplicates and out-of-range values are skipped silently) and returns
/// every vertex reachable from any of them, sources included. The result
/// is in discovery order, but no ordering is guaranteed by the contract;
/// callers must treat it as a set. An empty source collection yields an
/// empty result.
///
/// # Arguments
///
/// * `graph` - Graph to traverse
/// * `sources` - Starting vertices (may contain duplicates or out-of-range
///   values)
///
/// # Returns
///
/// All vertices reachable from the valid sources.
pub fn bfs<G: Graph>(graph: &G, sources: &[usize]) -> Vec<usize> {
    let num_vertices = graph.num_vertices();
    let mut visited = vec![false; num_vertices];
    let mut reachable = Vec::new();
    let mut queue = VecDeque::new();

    for &source in sources {
        if source >= num_vertices {
            continue;
        }
        if !visited[source] {
            visited[source] = true;
            reachable.push(source);
            queue.push_back(source);
        }
    }

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.edges_from(current) {
            if neighbor >= num_vertices {
                continue;
            }
            if !visited[neighbor] {
                visited[neighbor] = true;
                reachable.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    reachable
}
