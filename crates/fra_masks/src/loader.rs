//! Text-file mask loading.
//!
//! A mask file holds one row per parity packet, each row a string of `1`
//! and `0` characters, one per data packet. Blank lines and `#` comments
//! are skipped. All rows must have the same width.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::matrix::MatrixMask;

/// Loads a protection mask from a text file.
///
/// # Arguments
///
/// * `path` - Path to the mask file
///
/// # Returns
///
/// The parsed mask, or an error describing the malformed line.
pub fn load_mask_file<P: AsRef<Path>>(path: P) -> Result<MatrixMask> {
    let file = File::open(&path)
        .with_context(|| format!("failed to open mask file {}", path.as_ref().display()))?;
    let reader = BufReader::new(file);

    let mut rows: Vec<Vec<bool>> = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut row = Vec::with_capacity(trimmed.len());
        for ch in trimmed.chars() {
            match ch {
                '1' => row.push(true),
                '0' => row.push(false),
                _ => bail!(
                    "mask file line {}: unexpected character {:?}",
                    line_number + 1,
                    ch
                ),
            }
        }

        if let Some(first) = rows.first()
            && first.len() != row.len()
        {
            bail!(
                "mask file line {}: row width {} does not match first row width {}",
                line_number + 1,
                row.len(),
                first.len()
            );
        }

        rows.push(row);
    }

    if rows.is_empty() {
        bail!("mask file contains no rows");
    }

    let n = rows[0].len();
    let k = rows.len();
    MatrixMask::new(rows, n, k).context("mask file dimensions are invalid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_core::mask::Mask;
    use std::io::Write;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "fra_mask_test_{}_{}.txt",
            std::process::id(),
            contents.len()
        ));
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn parses_rows_comments_and_blanks() {
        let path = write_temp("# parity rows\n110\n\n011\n");
        let mask = load_mask_file(&path).expect("valid mask file");
        std::fs::remove_file(&path).ok();

        assert_eq!(mask.n(), 3);
        assert_eq!(mask.k(), 2);
        assert!(mask.is_protected(0, 0));
        assert!(mask.is_protected(1, 0));
        assert!(!mask.is_protected(2, 0));
        assert!(!mask.is_protected(0, 1));
        assert!(mask.is_protected(2, 1));
    }

    #[test]
    fn rejects_ragged_rows() {
        let path = write_temp("110\n01\n");
        assert!(load_mask_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_unexpected_characters() {
        let path = write_temp("1x0\n");
        assert!(load_mask_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_empty_files() {
        let path = write_temp("# only a comment\n");
        assert!(load_mask_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
