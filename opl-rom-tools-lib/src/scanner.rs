//! Disc image discovery.

use std::fs;
use std::path::{Path, PathBuf};

use opl_rom_tools_core::naming::DISC_IMAGE_EXTENSION;

use crate::error::ConfigError;

/// List the disc images directly inside `dir`, sorted by name.
///
/// Not recursive. Only files (or links to files) with an `.iso` extension (any case)
/// are returned.
pub fn find_disc_images(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let entries = fs::read_dir(dir).map_err(|source| ConfigError::ScanDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_disc_image(path))
        .collect();
    images.sort();

    Ok(images)
}

/// Whether a path has the disc image extension.
pub fn is_disc_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(DISC_IMAGE_EXTENSION))
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
