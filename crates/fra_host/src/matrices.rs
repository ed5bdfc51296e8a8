//! Protection matrix pretty-printing.
//!
//! Writes one text file per mask type showing each configuration's
//! protection matrix as a grid: one row per parity packet, `X` where the
//! data packet is protected, `.` where it is not.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use fra_core::mask::Mask;
use fra_masks::standard_factories;

fn write_matrix<W: Write>(file: &mut W, mask: &dyn Mask) -> std::io::Result<()> {
    for fec in 0..mask.k() {
        write!(file, "  F{:<2} ", fec)?;
        for packet in 0..mask.n() {
            let cell = if mask.is_protected(packet, fec) { 'X' } else { '.' };
            write!(file, "{} ", cell)?;
        }
        writeln!(file)?;
    }
    Ok(())
}

/// Writes protection matrices for every mask type and `n <= max_n`.
pub fn write_matrix_reports(out_dir: &str, max_n: usize) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir))?;

    for (mask_name, factory) in standard_factories() {
        println!("Generating {} matrices...", mask_name);

        let path = Path::new(out_dir).join(format!("{}_matrices.txt", mask_name));
        let mut file = BufWriter::new(
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?,
        );

        writeln!(file, "{} FEC Matrices", mask_name)?;
        writeln!(file, "{}", "=".repeat(mask_name.len() + 13))?;
        writeln!(file)?;

        for n in 1..=max_n {
            for k in 1..=n {
                let Ok(mask) = factory.create_mask(n, k) else {
                    continue;
                };
                writeln!(file, "N={}, K={}", n, k)?;
                write_matrix(&mut file, mask.as_ref())?;
                writeln!(file)?;
            }
        }
        file.flush()?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
