//! Shared types for opl-rom-tools.
//!
//! Everything here is pure: serial parsing from SYSTEM.CNF text, file name
//! sanitizing, and the naming policy used when renaming disc images. The
//! disc reader and title lookup live in their own crates and build on these.

use std::io::{Read, Seek};

pub mod error;
pub mod naming;
pub mod serial;

pub use error::DiscError;
pub use naming::{CharsetPolicy, NameOutcome, NamingScheme, build_name, sanitize};
pub use serial::{DiscSerial, extract_serial, normalize_serial};

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}
