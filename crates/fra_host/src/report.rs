//! Table rendering for analysis results.

use fra_core::loss_model::LossModel;

use crate::analysis::ConfigOutcome;

/// Renders a characteristics value, with the `-1` "no failing pattern"
/// sentinel shown as unbounded rather than as a small number.
pub fn sentinel(value: i32) -> String {
    if value < 0 {
        "∞".to_string()
    } else {
        value.to_string()
    }
}

/// Prints the sweep results table for one mask type.
pub fn print_sweep_table(results: &[ConfigOutcome], models: &[(&str, &(dyn LossModel + Sync))]) {
    let mut header = String::from("Overhead\tN\tK\t");
    for (name, model) in models {
        header.push_str(&format!("{} (P={:.2})\t", name, model.average_loss_probability()));
    }
    header.push_str("Min Lost\tMin Consec");
    println!("{}", header);
    println!("{}", "─".repeat(header.len() - header.matches('\t').count()));

    for result in results {
        print!("{:.1}%\t\t{}\t{}\t", result.overhead, result.n, result.k);
        for model in &result.models {
            print!("{:.6}\t\t", model.recovery_probability);
        }
        println!(
            "{}\t{}",
            sentinel(result.characteristics.min_lost_for_failure),
            sentinel(result.characteristics.min_consecutive_lost_for_failure)
        );
    }
}
