//! Recovery graph edge dumps.
//!
//! Writes one text file per mask type enumerating every edge of the
//! recovery graph for small configurations. Vertices are printed as
//! binary delivery patterns, parity bits first separated by a colon,
//! so a line reads "parity:data -> parity:data".

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use fra_core::graph::Graph;
use fra_core::recovery_graph::RecoveryGraph;
use fra_masks::standard_factories;

fn format_vertex(vertex: usize, n: usize, k: usize) -> String {
    let data = vertex & ((1 << n) - 1);
    let parity = vertex >> n;
    format!("{:0k$b}:{:0n$b}", parity, data, k = k, n = n)
}

/// Writes edge dumps for every mask type and `n <= max_n`, `k <= n`.
pub fn write_graph_reports(out_dir: &str, max_n: usize) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir))?;

    for (mask_name, factory) in standard_factories() {
        println!("Generating {} graphs...", mask_name);

        let path = Path::new(out_dir).join(format!("{}_graphs.txt", mask_name));
        let mut file = BufWriter::new(
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?,
        );

        writeln!(file, "{} FEC Graphs", mask_name)?;
        writeln!(file, "{}", "=".repeat(mask_name.len() + 11))?;
        writeln!(file)?;

        for n in 1..=max_n {
            for k in 1..=n {
                let Ok(mask) = factory.create_mask(n, k) else {
                    continue;
                };
                let graph = RecoveryGraph::new(mask);

                writeln!(file, "N={}, K={} ({} vertices)", n, k, graph.num_vertices())?;
                let mut edge_count = 0usize;
                for vertex in 0..graph.num_vertices() {
                    let edges = graph.edges_from(vertex);
                    if edges.is_empty() {
                        continue;
                    }
                    for destination in &edges {
                        writeln!(
                            file,
                            "  {} -> {}",
                            format_vertex(vertex, n, k),
                            format_vertex(*destination, n, k)
                        )?;
                    }
                    edge_count += edges.len();
                }
                writeln!(file, "  {} edges", edge_count)?;
                writeln!(file)?;
            }
        }
        file.flush()?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
