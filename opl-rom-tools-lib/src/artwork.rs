//! Artwork copying.
//!
//! OPL finds cover art by serial prefix (`SLUS_200.62_COV.jpg`), so every file
//! in the source directory whose name starts with the raw serial is copied
//! across unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProcessError;

/// Result of copying the artwork for one serial.
#[derive(Debug, Default)]
pub struct ArtworkSummary {
    /// Number of source files matching the serial
    pub matched: usize,
    /// Destination paths written (or that would be written, in a dry run)
    pub copied: Vec<PathBuf>,
    /// Per-file copy failures
    pub failures: Vec<ProcessError>,
}

/// Names that start with `serial` (case-sensitive), in input order.
pub fn select_artwork<'a>(names: &'a [String], serial: &str) -> Vec<&'a str> {
    names
        .iter()
        .filter(|name| name.starts_with(serial))
        .map(String::as_str)
        .collect()
}

/// Copy every file in `src_dir` whose name starts with `raw_serial` into `dst_dir`.
///
/// Only a failure to list `src_dir` is returned as an error; failed copies are
/// collected in the summary and the remaining files are still copied.
pub fn copy_artwork(
    raw_serial: &str,
    src_dir: &Path,
    dst_dir: &Path,
    dry_run: bool,
) -> Result<ArtworkSummary, ProcessError> {
    let names = list_file_names(src_dir)?;
    let selected = select_artwork(&names, raw_serial);

    let mut summary = ArtworkSummary {
        matched: selected.len(),
        ..Default::default()
    };

    if selected.is_empty() {
        log::info!("No artwork found for {}", raw_serial);
        return Ok(summary);
    }

    for name in selected {
        let from = src_dir.join(name);
        let to = dst_dir.join(name);

        if dry_run {
            log::info!("Would copy artwork: {}", name);
            summary.copied.push(to);
            continue;
        }

        match fs::copy(&from, &to) {
            Ok(bytes) => {
                log::debug!("Copied artwork: {} ({} bytes)", name, bytes);
                summary.copied.push(to);
            }
            Err(source) => {
                let err = ProcessError::Copy { from, to, source };
                log::error!("{}", err);
                summary.failures.push(err);
            }
        }
    }

    Ok(summary)
}

/// Sorted names of the files (or links to files) directly inside `dir`.
fn list_file_names(dir: &Path) -> Result<Vec<String>, ProcessError> {
    let entries = fs::read_dir(dir).map_err(|source| ProcessError::ListArtwork {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    Ok(names)
}

#[cfg(test)]
#[path = "tests/artwork_tests.rs"]
mod tests;
