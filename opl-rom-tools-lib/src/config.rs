//! Run configuration, built once before a batch and read-only afterwards.

use std::path::{Path, PathBuf};

use opl_rom_tools_core::{CharsetPolicy, NamingScheme};

use crate::error::ConfigError;

/// Validated pair of artwork directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkDirs {
    source: PathBuf,
    destination: PathBuf,
}

impl ArtworkDirs {
    /// Check that both paths are existing, distinct directories.
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let source = source.into();
        let destination = destination.into();
        require_dir("source", &source)?;
        require_dir("destination", &destination)?;

        let same = match (source.canonicalize(), destination.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => source == destination,
        };
        if same {
            return Err(ConfigError::SameArtworkDir(source));
        }

        Ok(Self {
            source,
            destination,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

fn require_dir(role: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::MissingArtworkDir { role });
    }
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory {
            role,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Options controlling a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Look up titles and rename disc images
    pub rename: bool,
    /// How serial and title are combined
    pub naming: NamingScheme,
    /// Which characters a title may keep
    pub charset: CharsetPolicy,
    /// Cut long titles instead of warning about them
    pub truncate: bool,
    /// Copy artwork matching each serial, when set
    pub artwork: Option<ArtworkDirs>,
    /// Report what would happen without touching the file system
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, rename: bool) -> Self {
        self.rename = rename;
        self
    }

    pub fn naming(mut self, naming: NamingScheme) -> Self {
        self.naming = naming;
        self
    }

    pub fn charset(mut self, charset: CharsetPolicy) -> Self {
        self.charset = charset;
        self
    }

    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn artwork(mut self, artwork: ArtworkDirs) -> Self {
        self.artwork = Some(artwork);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether any stage is enabled at all.
    pub fn has_work(&self) -> bool {
        self.rename || self.artwork.is_some()
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
