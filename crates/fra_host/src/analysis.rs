//! Recovery analysis sweep over mask types and configurations.
//!
//! For each configuration the reachable set is computed once by BFS from
//! the fully-delivered sources, then shared by the probability summation
//! and the worst-case characteristics search. Configurations are evaluated
//! in parallel and sorted before printing, so the parallelism cannot
//! reorder the reported minima.

use anyhow::{Context, Result, bail};
use fra_core::characteristics::RecoveryCharacteristics;
use fra_core::graph::{Graph, bfs};
use fra_core::independent::IndependentLossModel;
use fra_core::loss_model::LossModel;
use fra_core::markov::MarkovLossModel;
use fra_core::mask::Mask;
use fra_core::recovery_graph::{RecoveryGraph, full_delivery_sources};
use fra_masks::bitmask::BytePatternMask;
use fra_masks::loader::load_mask_file;
use fra_masks::standard_factories;
use rayon::prelude::*;

use crate::report;

/// Gilbert-Elliott chain parameters taken from the command line.
pub struct ChainParams {
    pub pe0: f64,
    pub pe1: f64,
    pub p01: f64,
    pub p10: f64,
}

impl ChainParams {
    pub fn model(&self) -> MarkovLossModel {
        MarkovLossModel::new(self.pe0, self.pe1, self.p01, self.p10)
    }
}

/// Recovery probability of one loss model for one configuration.
pub struct ModelOutcome {
    pub name: String,
    pub average_loss: f64,
    pub recovery_probability: f64,
}

/// Full analysis result for one mask configuration.
pub struct ConfigOutcome {
    pub n: usize,
    pub k: usize,
    pub overhead: f64,
    pub scenarios: usize,
    pub models: Vec<ModelOutcome>,
    pub characteristics: RecoveryCharacteristics,
}

/// Analyzes one mask against the given loss models.
pub fn evaluate_mask(
    mask: Box<dyn Mask + Send + Sync>,
    models: &[(&str, &(dyn LossModel + Sync))],
) -> ConfigOutcome {
    let n = mask.n();
    let k = mask.k();
    let total_packets = n + k;

    let graph = RecoveryGraph::new(mask);
    let reachable = bfs(&graph, &full_delivery_sources(n, k));

    let models = models
        .iter()
        .map(|(name, model)| {
            let mut recovery_probability: f64 = reachable
                .iter()
                .map(|&vertex| model.probability(vertex, total_packets))
                .sum();
            // N-th root normalization: recovering the group means
            // recovering all N data packets.
            if recovery_probability > 0.0 && n > 0 {
                recovery_probability = recovery_probability.powf(1.0 / n as f64);
            }
            ModelOutcome {
                name: (*name).to_string(),
                average_loss: model.average_loss_probability(),
                recovery_probability,
            }
        })
        .collect();

    ConfigOutcome {
        n,
        k,
        overhead: k as f64 * 100.0 / n as f64,
        scenarios: graph.num_vertices(),
        models,
        characteristics: RecoveryCharacteristics::from_reachable(n, k, &reachable),
    }
}

/// Runs the full sweep: every mask type, `n = 1..=max_n`, `k = 1..=n`.
pub fn run_sweep(max_n: usize, chain: &ChainParams) -> Result<()> {
    println!("FEC Recovery Graph Analysis");
    println!("===========================");
    println!();

    let markov = chain.model();
    let independent = IndependentLossModel::new(markov.average_loss_probability());
    let models: Vec<(&str, &(dyn LossModel + Sync))> = vec![
        ("Independent", &independent),
        ("Gilbert-Elliott", &markov),
    ];

    let configs: Vec<(usize, usize)> = (1..=max_n)
        .flat_map(|n| (1..=n).map(move |k| (n, k)))
        .collect();

    for (mask_name, factory) in standard_factories() {
        println!("{} Masks:", mask_name);

        let mut results: Vec<ConfigOutcome> = configs
            .par_iter()
            .filter_map(|&(n, k)| {
                // Skip configurations the factory cannot satisfy.
                let mask = factory.create_mask(n, k).ok()?;
                Some(evaluate_mask(mask, &models))
            })
            .collect();

        results.sort_by(|a, b| {
            a.overhead
                .total_cmp(&b.overhead)
                .then(a.n.cmp(&b.n))
                .then(a.k.cmp(&b.k))
        });

        report::print_sweep_table(&results, &models);
        println!();
    }

    Ok(())
}

/// Analyzes a single mask loaded from a text file.
pub fn analyze_mask_file(path: &str, chain: &ChainParams) -> Result<()> {
    let mask = load_mask_file(path)?;
    single_mask_report(&format!("mask file {}", path), Box::new(mask), chain)
}

/// Analyzes a single byte-encoded mask given as a hex string.
pub fn analyze_mask_bytes(hex: &str, mask_n: Option<usize>, chain: &ChainParams) -> Result<()> {
    let Some(n) = mask_n else {
        bail!("--mask-bytes requires --mask-n");
    };

    let bytes = parse_hex(hex)?;
    if bytes.is_empty() || bytes.len() % 2 != 0 {
        bail!("--mask-bytes must supply two bytes per parity packet");
    }
    let k = bytes.len() / 2;

    let mask = BytePatternMask::from_bytes(&bytes, n, k)
        .with_context(|| format!("invalid byte mask for n={}, k={}", n, k))?;
    single_mask_report(&format!("byte mask {}", hex), Box::new(mask), chain)
}

fn single_mask_report(
    label: &str,
    mask: Box<dyn Mask + Send + Sync>,
    chain: &ChainParams,
) -> Result<()> {
    let markov = chain.model();
    let independent = IndependentLossModel::new(markov.average_loss_probability());
    let models: Vec<(&str, &(dyn LossModel + Sync))> = vec![
        ("Independent", &independent),
        ("Gilbert-Elliott", &markov),
    ];

    let outcome = evaluate_mask(mask, &models);

    println!("Analysis of {}", label);
    println!("N = {}, K = {} ({} scenarios)", outcome.n, outcome.k, outcome.scenarios);
    for model in &outcome.models {
        println!(
            "{:<16} loss {:.4}  recovery probability {:.6}",
            model.name, model.average_loss, model.recovery_probability
        );
    }
    println!(
        "Min lost packets for failure: {}",
        report::sentinel(outcome.characteristics.min_lost_for_failure)
    );
    println!(
        "Min consecutive lost for failure: {}",
        report::sentinel(outcome.characteristics.min_consecutive_lost_for_failure)
    );

    Ok(())
}

fn parse_hex(hex: &str) -> Result<Vec<u8>> {
    let cleaned: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    if !cleaned.is_ascii() {
        bail!("hex mask contains non-ASCII characters");
    }
    if cleaned.len() % 2 != 0 {
        bail!("hex mask has an odd number of digits");
    }
    cleaned
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            // Safe to slice: the string is ASCII, so every byte pair is a
            // valid str boundary.
            let digits = std::str::from_utf8(pair)?;
            u8::from_str_radix(digits, 16).with_context(|| format!("bad hex byte {:?}", digits))
        })
        .collect()
}
