use std::path::PathBuf;

use opl_rom_tools_core::DiscError;
use opl_rom_tools_lookup::LookupError;
use thiserror::Error;

/// Errors that skip a single disc image (or a single artwork file).
#[derive(Debug, Error)]
pub enum ProcessError {
    /// SYSTEM.CNF could not be read from the image
    #[error("Error occurred while reading SYSTEM.CNF => {0}")]
    Image(#[from] DiscError),

    /// SYSTEM.CNF has no `cdrom0:\` boot path
    #[error("Disc serial not found in SYSTEM.CNF")]
    SerialNotFound,

    /// The title lookup failed
    #[error("Error occurred while fetching game name => {0}")]
    Lookup(#[from] LookupError),

    /// Sanitizing removed every character of the title
    #[error("Game name \"{title}\" is empty after sanitizing")]
    EmptyName { title: String },

    /// Another file already has the target name
    #[error("Target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("Error occurred while renaming {} => {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot list artwork directory {}: {source}", .path.display())]
    ListArtwork {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} => {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Broad category of a [`ProcessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Image,
    Parse,
    Lookup,
    FileSystem,
}

impl ProcessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Image(_) => ErrorKind::Image,
            Self::SerialNotFound | Self::EmptyName { .. } => ErrorKind::Parse,
            Self::Lookup(_) => ErrorKind::Lookup,
            Self::TargetExists(_)
            | Self::Rename { .. }
            | Self::ListArtwork { .. }
            | Self::Copy { .. } => ErrorKind::FileSystem,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Image => write!(f, "image"),
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Lookup => write!(f, "lookup"),
            ErrorKind::FileSystem => write!(f, "file system"),
        }
    }
}

/// Errors in the run configuration, detected before any disc is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Artwork {role} directory is not set")]
    MissingArtworkDir { role: &'static str },

    #[error("Artwork {role} directory does not exist: {}", .path.display())]
    NotADirectory { role: &'static str, path: PathBuf },

    #[error("Artwork source and destination are the same directory: {}", .0.display())]
    SameArtworkDir(PathBuf),

    #[error("Cannot read settings file {}: {source}", .path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {}: {source}", .path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot list {}: {source}", .path.display())]
    ScanDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
