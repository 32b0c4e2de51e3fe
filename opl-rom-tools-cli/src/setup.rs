//! Turns parsed flags and saved settings into a validated [`RunConfig`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use opl_rom_tools_core::{CharsetPolicy, NamingScheme};
use opl_rom_tools_lib::{ArtworkDirs, RunConfig, Settings, resolve_path};
use opl_rom_tools_lookup::{DEFAULT_BASE_URL, RedumpClient};

use crate::cli_types::Cli;
use crate::error::CliError;

/// Build the run configuration. Artwork directories missing from both the
/// flags and the settings file are asked for on `input`.
pub(crate) fn build_run_config(
    cli: &Cli,
    settings: &Settings,
    input: &mut dyn BufRead,
) -> Result<RunConfig, CliError> {
    let mut config = RunConfig::new()
        .rename(cli.rename)
        .naming(if cli.old_naming {
            NamingScheme::SerialTitle
        } else {
            NamingScheme::Title
        })
        .charset(if cli.strict {
            CharsetPolicy::Strict
        } else {
            CharsetPolicy::Permissive
        })
        .truncate(cli.truncate)
        .dry_run(cli.dry_run);

    if cli.copy_artwork {
        let source = match resolve_path(
            cli.artwork_src.clone(),
            settings.artwork.source.as_deref(),
        ) {
            Some(path) => path,
            None => prompt_dir("Artwork source directory", input)?,
        };
        let destination = match resolve_path(
            cli.artwork_dst.clone(),
            settings.artwork.destination.as_deref(),
        ) {
            Some(path) => path,
            None => prompt_dir("Artwork destination directory", input)?,
        };

        config = config.artwork(ArtworkDirs::new(source, destination)?);
    }

    Ok(config)
}

/// Ask for a directory path. Empty input (or end of input) yields an empty path,
/// which [`ArtworkDirs::new`] rejects.
fn prompt_dir(label: &str, input: &mut dyn BufRead) -> Result<PathBuf, CliError> {
    eprint!("  {}: ", label);
    std::io::stderr().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

/// Lookup client for the configured site.
pub(crate) fn lookup_client(settings: &Settings) -> Result<RedumpClient, CliError> {
    let base_url = settings
        .lookup
        .base_url
        .as_deref()
        .unwrap_or(DEFAULT_BASE_URL);
    log::debug!("Title lookups go to {}", base_url);
    Ok(RedumpClient::with_base_url(base_url)?)
}

#[cfg(test)]
#[path = "tests/setup_tests.rs"]
mod tests;
