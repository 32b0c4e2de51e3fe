//! SYSTEM.CNF extraction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use opl_rom_tools_core::{DiscError, ReadSeek};

use crate::iso::IsoVolume;

/// Root-directory name of the boot configuration file.
pub const SYSTEM_CNF_NAME: &str = "SYSTEM.CNF";

/// Version suffix the configuration file is stored under (`;1`).
pub const SYSTEM_CNF_VERSION: u32 = 1;

/// Anything larger is not a real SYSTEM.CNF; refuse to allocate for it.
const MAX_SYSTEM_CNF_SIZE: u32 = 64 * 1024;

/// Read `/SYSTEM.CNF;1` from the disc image at `path` as UTF-8 text.
///
/// The image is opened read-only and closed before this returns, whether or
/// not the read succeeded.
pub fn read_config(path: &Path) -> Result<String, DiscError> {
    let file = File::open(path).map_err(|source| DiscError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    read_config_from(&mut reader)
}

/// Read `/SYSTEM.CNF;1` from an already opened disc image.
pub fn read_config_from(reader: &mut dyn ReadSeek) -> Result<String, DiscError> {
    let mut volume = IsoVolume::open(reader)?;
    log::debug!(
        "{} volume '{}' (system '{}')",
        volume.layout().name(),
        volume.volume_id,
        volume.system_id
    );

    let entry = volume.find_in_root(SYSTEM_CNF_NAME, SYSTEM_CNF_VERSION)?;
    if entry.extent.len > MAX_SYSTEM_CNF_SIZE {
        return Err(DiscError::corrupted(format!(
            "{} claims {} bytes",
            entry.identifier, entry.extent.len
        )));
    }

    let bytes = volume.read(&entry)?;
    String::from_utf8(bytes).map_err(|source| DiscError::Decode {
        entry: entry.identifier,
        source,
    })
}

#[cfg(test)]
#[path = "tests/system_cnf_tests.rs"]
mod tests;
