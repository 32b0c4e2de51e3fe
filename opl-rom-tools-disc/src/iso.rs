//! Minimal ISO 9660 volume access.
//!
//! PS2 DVDs are dumped as cooked 2048-byte-sector images. The few CD titles are
//! sometimes dumped raw (2352 bytes per sector, Mode 2 Form 1), so both layouts
//! are accepted. Only the root directory is ever walked.

use std::io::{ErrorKind, SeekFrom};

use opl_rom_tools_core::{DiscError, ReadSeek};

/// User data bytes per sector.
pub const SECTOR_SIZE: usize = 2048;

/// Bytes per sector in a raw CD image.
const RAW_SECTOR_SIZE: u64 = 2352;

/// Sync, header and subheader in front of the user data of a raw Mode 2 Form 1 sector.
const RAW_DATA_OFFSET: u64 = 24;

/// Every raw CD sector starts with this.
pub(crate) const SYNC_PATTERN: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// LBA of the primary volume descriptor.
const PVD_LBA: u32 = 16;

/// Fixed part of a directory record plus a one-byte identifier.
const MIN_RECORD_LEN: usize = 34;

const FLAG_DIRECTORY: u8 = 0x02;

/// How sectors are laid out in the image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorLayout {
    /// 2048 bytes of user data per sector, nothing else
    Cooked,
    /// 2352-byte raw sectors, Mode 2 Form 1
    Raw,
}

impl SectorLayout {
    /// Work out the layout from the first bytes of the image.
    ///
    /// Raw images are recognized by the CD sync pattern. Anything else must
    /// carry the `CD001` signature where a cooked image keeps its PVD.
    pub fn detect(reader: &mut dyn ReadSeek) -> Result<Self, DiscError> {
        let mut head = [0u8; SYNC_PATTERN.len()];
        let got = fill(reader, 0, &mut head)?;
        if got < head.len() {
            return Err(DiscError::TooSmall {
                expected: head.len() as u64,
                actual: got as u64,
            });
        }
        if head == SYNC_PATTERN {
            return Ok(Self::Raw);
        }

        let mut signature = [0u8; 5];
        let offset = Self::Cooked.byte_offset(PVD_LBA) + 1;
        if fill(reader, offset, &mut signature)? == signature.len() && &signature == b"CD001" {
            Ok(Self::Cooked)
        } else {
            Err(DiscError::invalid_format(
                "No ISO 9660 volume descriptor at sector 16",
            ))
        }
    }

    /// File offset of the user data of sector `lba`.
    pub fn byte_offset(self, lba: u32) -> u64 {
        match self {
            Self::Cooked => lba as u64 * SECTOR_SIZE as u64,
            Self::Raw => lba as u64 * RAW_SECTOR_SIZE + RAW_DATA_OFFSET,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cooked => "ISO 9660 (2048)",
            Self::Raw => "raw Mode 2 (2352)",
        }
    }
}

/// Read into `buf` from `offset`, stopping early only at end of file.
fn fill(reader: &mut dyn ReadSeek, offset: u64, buf: &mut [u8]) -> Result<usize, DiscError> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(DiscError::Io(e)),
        }
    }
    Ok(filled)
}

/// Contiguous run of sectors holding a file or directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub lba: u32,
    /// Length in bytes
    pub len: u32,
}

impl Extent {
    fn sector_count(self) -> u32 {
        self.len.div_ceil(SECTOR_SIZE as u32)
    }

    /// Sectors covered by the extent. Fails if it runs past the last addressable LBA.
    fn sectors(self) -> Result<std::ops::Range<u32>, DiscError> {
        let end = self.lba.checked_add(self.sector_count()).ok_or_else(|| {
            DiscError::corrupted(format!(
                "Extent at LBA {} ({} bytes) runs past the end of the address space",
                self.lba, self.len
            ))
        })?;
        Ok(self.lba..end)
    }
}

/// One entry of a directory.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub extent: Extent,
    pub flags: u8,
    /// Identifier as stored, e.g. `SYSTEM.CNF;1`. `.` and `..` for the self
    /// and parent entries.
    pub identifier: String,
}

impl DirEntry {
    /// Decode a directory record. `None` if it is shorter than it claims.
    pub fn parse(record: &[u8]) -> Option<Self> {
        let len = *record.first()? as usize;
        if len < MIN_RECORD_LEN || record.len() < len {
            return None;
        }

        let id_len = record[32] as usize;
        let id = record.get(33..33 + id_len).filter(|_| 33 + id_len <= len)?;
        let identifier = match id {
            [0x00] => ".".to_string(),
            [0x01] => "..".to_string(),
            _ => String::from_utf8_lossy(id).into_owned(),
        };

        Some(Self {
            extent: Extent {
                lba: le_u32(&record[2..6]),
                len: le_u32(&record[10..14]),
            },
            flags: record[25],
            identifier,
        })
    }

    pub fn is_dir(&self) -> bool {
        self.flags & FLAG_DIRECTORY != 0
    }

    /// Whether this entry is `name;version`, ignoring ASCII case. An
    /// identifier without `;` is taken as version 1.
    pub fn is_named(&self, name: &str, version: u32) -> bool {
        let (stem, ver) = match self.identifier.split_once(';') {
            Some((stem, ver)) => (stem, ver.parse::<u32>().ok()),
            None => (self.identifier.as_str(), Some(1)),
        };
        ver == Some(version) && stem.eq_ignore_ascii_case(name)
    }
}

/// Directory records packed into one sector.
struct Records<'a> {
    sector: &'a [u8],
    pos: usize,
}

impl Iterator for Records<'_> {
    type Item = DirEntry;

    fn next(&mut self) -> Option<DirEntry> {
        loop {
            let len = *self.sector.get(self.pos)? as usize;
            // A zero length marks the padding after the last record of a sector
            if len == 0 || self.pos + len > self.sector.len() {
                return None;
            }
            let record = &self.sector[self.pos..self.pos + len];
            self.pos += len;
            if let Some(entry) = DirEntry::parse(record) {
                return Some(entry);
            }
        }
    }
}

/// Both-endian fields are read from their little-endian half.
fn le_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Space-padded `a-characters` field.
fn padded_str(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}

/// An opened ISO 9660 volume.
pub struct IsoVolume<'r> {
    reader: &'r mut dyn ReadSeek,
    layout: SectorLayout,
    root: Extent,
    pub system_id: String,
    pub volume_id: String,
}

impl<'r> IsoVolume<'r> {
    /// Detect the sector layout and read the primary volume descriptor.
    pub fn open(reader: &'r mut dyn ReadSeek) -> Result<Self, DiscError> {
        let layout = SectorLayout::detect(reader)?;
        let pvd = read_sector(reader, layout, PVD_LBA)?;

        if pvd[0] != 0x01 || &pvd[1..6] != b"CD001" {
            return Err(DiscError::invalid_format(format!(
                "Sector 16 is not a primary volume descriptor (type 0x{:02X})",
                pvd[0]
            )));
        }

        // The root directory record is embedded at offset 156
        let root = DirEntry::parse(&pvd[156..190])
            .ok_or_else(|| DiscError::corrupted("Unreadable root directory record"))?;

        Ok(Self {
            system_id: padded_str(&pvd[8..40]),
            volume_id: padded_str(&pvd[40..72]),
            reader,
            layout,
            root: root.extent,
        })
    }

    pub fn layout(&self) -> SectorLayout {
        self.layout
    }

    pub fn root(&self) -> Extent {
        self.root
    }

    /// User data of one sector.
    pub fn sector(&mut self, lba: u32) -> Result<[u8; SECTOR_SIZE], DiscError> {
        read_sector(self.reader, self.layout, lba)
    }

    /// Find the file `name;version` in the root directory.
    pub fn find_in_root(&mut self, name: &str, version: u32) -> Result<DirEntry, DiscError> {
        for lba in self.root.sectors()? {
            let sector = self.sector(lba)?;
            let records = Records {
                sector: &sector,
                pos: 0,
            };
            if let Some(entry) = records
                .filter(|e| !e.is_dir())
                .find(|e| e.is_named(name, version))
            {
                log::debug!(
                    "{} at LBA {} ({} bytes)",
                    entry.identifier,
                    entry.extent.lba,
                    entry.extent.len
                );
                return Ok(entry);
            }
        }

        Err(DiscError::entry_not_found(format!("{};{}", name, version)))
    }

    /// Whole contents of a file.
    pub fn read(&mut self, entry: &DirEntry) -> Result<Vec<u8>, DiscError> {
        let extent = entry.extent;
        let mut data = Vec::with_capacity(extent.len as usize);
        for lba in extent.sectors()? {
            data.extend_from_slice(&self.sector(lba)?);
        }
        data.truncate(extent.len as usize);
        Ok(data)
    }
}

fn read_sector(
    reader: &mut dyn ReadSeek,
    layout: SectorLayout,
    lba: u32,
) -> Result<[u8; SECTOR_SIZE], DiscError> {
    let mut data = [0u8; SECTOR_SIZE];
    if fill(reader, layout.byte_offset(lba), &mut data)? < SECTOR_SIZE {
        return Err(DiscError::corrupted(format!(
            "Sector {} is beyond the end of the image",
            lba
        )));
    }
    Ok(data)
}

#[cfg(test)]
#[path = "tests/iso_tests.rs"]
mod tests;
