//! Sequential per-file pipeline: read SYSTEM.CNF, copy artwork, rename.

use std::path::{Path, PathBuf};

use opl_rom_tools_core::DiscSerial;
use opl_rom_tools_core::naming::MAX_TITLE_LEN;
use opl_rom_tools_disc::read_config;
use opl_rom_tools_lookup::TitleLookup;

use crate::artwork::copy_artwork;
use crate::config::RunConfig;
use crate::error::ProcessError;
use crate::rename::{RenameOutcome, apply_rename, plan_rename};

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum BatchProgress {
    /// Disc images found, before the first one is processed
    Scanning { total: usize },
    /// Starting on a disc image
    Processing {
        file_name: String,
        index: usize,
        total: usize,
    },
    /// Finished all disc images
    Done,
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub renamed: usize,
    pub already_correct: usize,
    /// Renames reported but not applied (dry run)
    pub planned: usize,
    pub artwork_copied: usize,
    /// Names kept longer than the OPL display limit
    pub over_length: usize,
    pub failures: Vec<(PathBuf, ProcessError)>,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Process every disc image in order. A failing file is logged, recorded and skipped.
pub fn run_batch(
    paths: &[PathBuf],
    config: &RunConfig,
    lookup: &dyn TitleLookup,
    progress: &dyn Fn(BatchProgress),
) -> BatchSummary {
    let total = paths.len();
    let mut summary = BatchSummary::default();

    progress(BatchProgress::Scanning { total });

    for (index, path) in paths.iter().enumerate() {
        let file_name = display_name(path);
        progress(BatchProgress::Processing {
            file_name: file_name.clone(),
            index,
            total,
        });
        log::info!("Processing file: {}", file_name);

        if let Err(e) = process_file(path, config, lookup, &mut summary) {
            log::error!("{}", e);
            summary.failures.push((path.clone(), e));
        }
        summary.processed += 1;
    }

    progress(BatchProgress::Done);
    summary
}

fn process_file(
    path: &Path,
    config: &RunConfig,
    lookup: &dyn TitleLookup,
    summary: &mut BatchSummary,
) -> Result<(), ProcessError> {
    let text = read_config(path)?;
    let serial = DiscSerial::from_config(&text).ok_or(ProcessError::SerialNotFound)?;
    log::debug!("Disc serial found: {} ({})", serial.raw, serial.normalized);

    // Artwork only needs the serial, so it is copied even if the lookup fails later
    if let Some(dirs) = &config.artwork {
        match copy_artwork(&serial.raw, dirs.source(), dirs.destination(), config.dry_run) {
            Ok(artwork) => {
                summary.artwork_copied += artwork.copied.len();
                summary
                    .failures
                    .extend(artwork.failures.into_iter().map(|e| (path.to_path_buf(), e)));
            }
            Err(e) => {
                log::error!("{}", e);
                summary.failures.push((path.to_path_buf(), e));
            }
        }
    }

    if !config.rename {
        return Ok(());
    }

    let action = plan_rename(path, &serial, config, lookup)?;
    let target_name = display_name(&action.target);

    match apply_rename(&action, config.dry_run)? {
        RenameOutcome::Renamed => {
            summary.renamed += 1;
            log::info!("Renamed file: {} => {}", display_name(path), target_name);
        }
        RenameOutcome::AlreadyCorrect => {
            summary.already_correct += 1;
            log::debug!("Already named correctly: {}", target_name);
        }
        RenameOutcome::Planned => {
            summary.planned += 1;
            log::info!("Would rename: {} => {}", display_name(path), target_name);
        }
    }

    if action.name.truncated {
        log::debug!("Game name truncated: {}", action.title);
    }
    if action.name.over_length {
        summary.over_length += 1;
        log::warn!(
            "Game name exceeds {} characters. Consider renaming it manually.",
            MAX_TITLE_LEN
        );
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
