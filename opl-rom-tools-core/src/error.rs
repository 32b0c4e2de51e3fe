use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading the configuration entry of a disc image.
#[derive(Debug, Error)]
pub enum DiscError {
    /// The image file could not be opened
    #[error("Cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading the image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image layout is not recognized
    #[error("Invalid disc format: {0}")]
    InvalidFormat(String),

    /// A descriptor or directory structure is damaged
    #[error("Corrupted image: {0}")]
    Corrupted(String),

    /// The image is too small to contain a volume descriptor
    #[error("Image too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },

    /// The requested entry is not present in the root directory
    #[error("File '{0}' not found in root directory")]
    EntryNotFound(String),

    /// The entry exists but its contents are not UTF-8
    #[error("{entry} is not valid UTF-8: {source}")]
    Decode {
        entry: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl DiscError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }

    pub fn entry_not_found(name: impl Into<String>) -> Self {
        Self::EntryNotFound(name.into())
    }
}
