use std::fs;
use std::path::{Path, PathBuf};

use opl_rom_tools_core::{DiscSerial, NameOutcome, build_name, sanitize};
use opl_rom_tools_lookup::TitleLookup;

use crate::config::RunConfig;
use crate::error::ProcessError;

/// A planned rename action.
#[derive(Debug, Clone)]
pub struct RenameAction {
    /// Original file path
    pub source: PathBuf,
    /// Target file path (same directory, new name)
    pub target: PathBuf,
    /// Title as returned by the lookup, before sanitizing
    pub title: String,
    /// Composed name and whether the title was cut or is over-length
    pub name: NameOutcome,
}

/// What applying a [`RenameAction`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// The file already has its target name
    AlreadyCorrect,
    /// Dry run: nothing was touched
    Planned,
}

/// Resolve the title for a disc and compose its target path.
pub fn plan_rename(
    path: &Path,
    serial: &DiscSerial,
    config: &RunConfig,
    lookup: &dyn TitleLookup,
) -> Result<RenameAction, ProcessError> {
    let title = lookup.resolve_title(&serial.normalized)?;

    let sanitized = sanitize(&title, config.charset);
    if sanitized.trim().is_empty() {
        return Err(ProcessError::EmptyName { title });
    }

    let name = build_name(&serial.raw, &sanitized, config.naming, config.truncate);
    let parent = path.parent().unwrap_or(Path::new(""));
    let target = parent.join(&name.file_name);

    Ok(RenameAction {
        source: path.to_path_buf(),
        target,
        title,
        name,
    })
}

/// Apply a planned rename. Never overwrites another file.
pub fn apply_rename(action: &RenameAction, dry_run: bool) -> Result<RenameOutcome, ProcessError> {
    if action.source == action.target {
        return Ok(RenameOutcome::AlreadyCorrect);
    }

    // Case-only renames on case-insensitive file systems see the source as the target
    if action.target.exists() && !same_file(&action.source, &action.target) {
        return Err(ProcessError::TargetExists(action.target.clone()));
    }

    if dry_run {
        return Ok(RenameOutcome::Planned);
    }

    fs::rename(&action.source, &action.target).map_err(|source| ProcessError::Rename {
        from: action.source.clone(),
        to: action.target.clone(),
        source,
    })?;

    Ok(RenameOutcome::Renamed)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/rename_tests.rs"]
mod tests;
