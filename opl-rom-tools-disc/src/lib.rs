//! PS2 disc image reading.
//!
//! Only as much ISO 9660 as it takes to get `SYSTEM.CNF` out of the root
//! directory:
//!
//! - cooked 2048-byte-sector images
//! - raw 2352-byte-sector images

pub mod iso;
mod system_cnf;

#[cfg(any(test, feature = "test-util"))]
pub mod testutil;

pub use iso::{DirEntry, IsoVolume, SectorLayout};
pub use system_cnf::{SYSTEM_CNF_NAME, SYSTEM_CNF_VERSION, read_config, read_config_from};
