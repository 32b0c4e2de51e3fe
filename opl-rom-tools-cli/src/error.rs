use std::path::PathBuf;

use opl_rom_tools_lib::ConfigError;
use opl_rom_tools_lookup::LookupError;
use thiserror::Error;

/// Errors that stop the run before the first disc image is processed.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Invalid settings, artwork directories or scan directory
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP client could not be created
    #[error("Lookup setup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Cannot open log file {}: {source}", .path.display())]
    Logfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A logger was already installed
    #[error("{0}")]
    Logger(#[from] log::SetLoggerError),
}
