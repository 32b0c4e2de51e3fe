//! Disc serial extraction from SYSTEM.CNF text.
//!
//! PS2 discs name their boot executable after the product serial, e.g.
//! `BOOT2 = cdrom0:\SCES_123.45;1`. The raw serial is the executable name as
//! written (`SCES_123.45`); the normalized form is what catalog lookups expect
//! (`SCES-12345`).

use std::sync::LazyLock;

use regex::Regex;

static BOOT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"cdrom0:\\([A-Za-z0-9_.]+)").expect("static pattern")
});

/// Both forms of a disc serial, always derived from the same boot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscSerial {
    /// Executable name between `cdrom0:\` and the version separator, unmodified.
    pub raw: String,
    /// `raw` with punctuation stripped and underscores turned into hyphens.
    pub normalized: String,
}

impl DiscSerial {
    /// Parse the serial out of SYSTEM.CNF contents.
    ///
    /// Returns `None` when no `cdrom0:\` boot path is present, or when the
    /// token is nothing but punctuation.
    pub fn from_config(text: &str) -> Option<Self> {
        let raw = boot_token(text)?;
        let normalized = normalize_serial(raw);
        if normalized.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            normalized,
        })
    }
}

/// Extract the serial from SYSTEM.CNF contents, either raw or normalized.
///
/// - `"BOOT2 = cdrom0:\SCES_123.45;1"`, `normalize = false` → `"SCES_123.45"`
/// - `"BOOT2 = cdrom0:\SCES_123.45;1"`, `normalize = true` → `"SCES-12345"`
pub fn extract_serial(text: &str, normalize: bool) -> Option<String> {
    let serial = DiscSerial::from_config(text)?;
    if normalize {
        Some(serial.normalized)
    } else {
        Some(serial.raw)
    }
}

/// Normalize a raw serial for catalog lookups.
///
/// Everything outside `[A-Za-z0-9_-]` is removed first, then underscores
/// become hyphens. Periods are dropped rather than converted. Hyphens survive
/// the first pass so that normalizing twice gives the same result.
pub fn normalize_serial(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| if c == '_' { '-' } else { c })
        .collect()
}

fn boot_token(text: &str) -> Option<&str> {
    BOOT_PATH
        .captures(text)?
        .get(1)
        .map(|m| m.as_str())
}

#[cfg(test)]
#[path = "tests/serial_tests.rs"]
mod tests;
