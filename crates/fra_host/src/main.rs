mod analysis;
mod graphs;
mod matrices;
mod models;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "FEC recovery graph analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep mask types and N/K configurations, reporting recovery
    /// probability and worst-case loss characteristics.
    Analyze {
        #[arg(long, default_value_t = 10)]
        max_n: usize,
        #[arg(long, default_value_t = 0.05)]
        pe0: f64,
        #[arg(long, default_value_t = 0.7)]
        pe1: f64,
        #[arg(long, default_value_t = 0.05)]
        p01: f64,
        #[arg(long, default_value_t = 0.2)]
        p10: f64,
        /// Analyze a single mask loaded from a text file instead of the
        /// generated mask sweep.
        #[arg(long)]
        mask_file: Option<String>,
        /// Analyze a single byte-encoded mask given as hex (two bytes per
        /// parity packet, MSB first); requires --mask-n.
        #[arg(long)]
        mask_bytes: Option<String>,
        #[arg(long)]
        mask_n: Option<usize>,
    },
    /// Dump every recovery-graph edge for small configurations.
    Graphs {
        #[arg(long, default_value = "graphs")]
        out_dir: String,
        #[arg(long, default_value_t = 6)]
        max_n: usize,
    },
    /// Print protection matrices for each mask type.
    Matrices {
        #[arg(long, default_value = "matrices")]
        out_dir: String,
        #[arg(long, default_value_t = 12)]
        max_n: usize,
    },
    /// Tabulate per-pattern loss model probabilities.
    Models {
        #[arg(long, default_value = "loss-models")]
        out_dir: String,
        #[arg(long, default_value_t = 8)]
        max_n: usize,
        #[arg(long, default_value_t = 0.05)]
        pe0: f64,
        #[arg(long, default_value_t = 0.7)]
        pe1: f64,
        #[arg(long, default_value_t = 0.05)]
        p01: f64,
        #[arg(long, default_value_t = 0.2)]
        p10: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            max_n,
            pe0,
            pe1,
            p01,
            p10,
            mask_file,
            mask_bytes,
            mask_n,
        } => {
            let chain = analysis::ChainParams { pe0, pe1, p01, p10 };
            if let Some(path) = mask_file {
                analysis::analyze_mask_file(&path, &chain)?;
            } else if let Some(hex) = mask_bytes {
                analysis::analyze_mask_bytes(&hex, mask_n, &chain)?;
            } else {
                analysis::run_sweep(max_n, &chain)?;
            }
        }
        Commands::Graphs { out_dir, max_n } => {
            graphs::write_graph_reports(&out_dir, max_n)?;
        }
        Commands::Matrices { out_dir, max_n } => {
            matrices::write_matrix_reports(&out_dir, max_n)?;
        }
        Commands::Models {
            out_dir,
            max_n,
            pe0,
            pe1,
            p01,
            p10,
        } => {
            let chain = analysis::ChainParams { pe0, pe1, p01, p10 };
            models::write_model_reports(&out_dir, max_n, &chain)?;
        }
    }
    Ok(())
}
