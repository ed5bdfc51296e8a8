//! Loss model probability tables.
//!
//! Writes a report comparing the independent and Gilbert-Elliott models:
//! per-pattern probabilities for every delivery pattern of each length,
//! with sum and expected-loss verification lines. The independent model is
//! parameterized with the chain's average loss rate so the two columns
//! differ only in burst structure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use fra_core::independent::IndependentLossModel;
use fra_core::loss_model::LossModel;

use crate::analysis::ChainParams;

/// Writes the loss model comparison report.
pub fn write_model_reports(out_dir: &str, max_n: usize, chain: &ChainParams) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir))?;

    let markov = chain.model();
    let independent = IndependentLossModel::new(markov.average_loss_probability());
    let models: Vec<(&str, &dyn LossModel)> = vec![
        ("Independent", &independent),
        ("Gilbert-Elliott", &markov),
    ];

    let path = Path::new(out_dir).join("loss_models_analysis.txt");
    let mut file = BufWriter::new(
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?,
    );

    writeln!(file, "Loss Model Analysis")?;
    writeln!(file, "===================")?;
    writeln!(file)?;

    writeln!(file, "Average loss rates:")?;
    for (name, model) in &models {
        let average = model.average_loss_probability();
        writeln!(file, "  {:<16} {:.8} ({:.4}%)", name, average, average * 100.0)?;
    }
    writeln!(file)?;

    let mut patterns_analyzed = 0usize;
    for n in 1..=max_n {
        write_length_table(&mut file, n, &models)?;
        patterns_analyzed += 1 << n;
    }
    file.flush()?;

    println!("Analyzed {} patterns, wrote {}", patterns_analyzed, path.display());
    Ok(())
}

fn write_length_table<W: Write>(
    file: &mut W,
    n: usize,
    models: &[(&str, &dyn LossModel)],
) -> Result<()> {
    writeln!(file, "Pattern length N={}", n)?;

    write!(file, "  {:<15}", "Pattern")?;
    for (name, _) in models {
        write!(file, " {:>15}", name)?;
    }
    writeln!(file)?;

    let mut sums = vec![0.0f64; models.len()];
    let mut expected_losses = vec![0.0f64; models.len()];

    for pattern in 0..1usize << n {
        write!(file, "  {:<15}", format!("{:0n$b}", pattern, n = n))?;
        let lost = n - pattern.count_ones() as usize;
        for (index, (_, model)) in models.iter().enumerate() {
            let probability = model.probability(pattern, n);
            write!(file, " {:>15.8}", probability)?;
            sums[index] += probability;
            expected_losses[index] += probability * lost as f64;
        }
        writeln!(file)?;
    }

    write!(file, "  {:<15}", "sum")?;
    for sum in &sums {
        write!(file, " {:>15.8}", sum)?;
    }
    writeln!(file)?;

    write!(file, "  {:<15}", "mean lost")?;
    for expected in &expected_losses {
        write!(file, " {:>15.8}", expected)?;
    }
    writeln!(file)?;
    writeln!(file)?;

    Ok(())
}
