//! Builders for small synthetic disc images.

use crate::iso::{SECTOR_SIZE as SECTOR, SYNC_PATTERN};
const ROOT_DIR_LBA: u32 = 18;

/// Build a 2048-byte PVD sector with the root directory at `root_lba`.
pub fn make_pvd_sector(system_id: &str, root_lba: u32, root_len: u32) -> [u8; SECTOR] {
    let mut sector = [0u8; SECTOR];
    sector[0] = 0x01; // PVD type
    sector[1..6].copy_from_slice(b"CD001");
    sector[6] = 0x01; // version

    pad_str(&mut sector[8..40], system_id);
    pad_str(&mut sector[40..72], "OPL_TEST");

    // Root directory record at offset 156 (34 bytes)
    sector[156] = 34;
    sector[158..162].copy_from_slice(&root_lba.to_le_bytes());
    sector[162..166].copy_from_slice(&root_lba.to_be_bytes());
    sector[166..170].copy_from_slice(&root_len.to_le_bytes());
    sector[170..174].copy_from_slice(&root_len.to_be_bytes());
    sector[181] = 0x02; // directory flag
    sector[188] = 1;

    sector
}

fn pad_str(field: &mut [u8], value: &str) {
    field.fill(b' ');
    let bytes = value.as_bytes();
    let len = bytes.len().min(field.len());
    field[..len].copy_from_slice(&bytes[..len]);
}

/// Build a directory record. `flags` 0x02 marks a directory.
pub fn make_dir_record(identifier: &[u8], extent_lba: u32, data_length: u32, flags: u8) -> Vec<u8> {
    let id_len = identifier.len();
    // Identifier is padded so the record length stays even
    let record_len = 33 + id_len + (1 - id_len % 2);
    let mut record = vec![0u8; record_len];
    record[0] = record_len as u8;
    record[2..6].copy_from_slice(&extent_lba.to_le_bytes());
    record[6..10].copy_from_slice(&extent_lba.to_be_bytes());
    record[10..14].copy_from_slice(&data_length.to_le_bytes());
    record[14..18].copy_from_slice(&data_length.to_be_bytes());
    record[25] = flags;
    record[32] = id_len as u8;
    record[33..33 + id_len].copy_from_slice(identifier);
    record
}

/// Build a cooked ISO whose root directory holds the given files.
///
/// Layout: 16 empty sectors, PVD at 16, terminator at 17, root directory at
/// 18, then each file's contents starting at sector 19.
pub fn make_iso(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut data = vec![0u8; 16 * SECTOR];
    data.extend_from_slice(&make_pvd_sector("PLAYSTATION", ROOT_DIR_LBA, SECTOR as u32));

    let mut terminator = [0u8; SECTOR];
    terminator[0] = 0xFF;
    terminator[1..6].copy_from_slice(b"CD001");
    terminator[6] = 0x01;
    data.extend_from_slice(&terminator);

    let mut dir_sector = vec![0u8; SECTOR];
    let mut pos = 0;
    let mut push = |record: Vec<u8>| {
        dir_sector[pos..pos + record.len()].copy_from_slice(&record);
        pos += record.len();
    };
    push(make_dir_record(b"\0", ROOT_DIR_LBA, SECTOR as u32, 0x02));
    push(make_dir_record(b"\x01", ROOT_DIR_LBA, SECTOR as u32, 0x02));

    let mut next_lba = ROOT_DIR_LBA + 1;
    let mut contents = Vec::new();
    for (name, bytes) in files {
        push(make_dir_record(name.as_bytes(), next_lba, bytes.len() as u32, 0));
        let sectors = bytes.len().div_ceil(SECTOR).max(1);
        let mut padded = bytes.to_vec();
        padded.resize(sectors * SECTOR, 0);
        contents.extend_from_slice(&padded);
        next_lba += sectors as u32;
    }
    data.extend_from_slice(&dir_sector);
    data.extend_from_slice(&contents);
    data
}

/// Build a cooked ISO containing only `SYSTEM.CNF;1` with the given text.
pub fn make_iso_with_system_cnf(content: &str) -> Vec<u8> {
    make_iso(&[("SYSTEM.CNF;1", content.as_bytes())])
}

/// Re-wrap a cooked ISO as raw 2352-byte Mode 2 Form 1 sectors.
pub fn to_raw_image(iso: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(iso.len() / SECTOR * 2352);
    for user_data in iso.chunks(SECTOR) {
        let mut sector = [0u8; 2352];
        sector[0..12].copy_from_slice(&SYNC_PATTERN);
        sector[15] = 0x02; // mode 2
        sector[24..24 + user_data.len()].copy_from_slice(user_data);
        data.extend_from_slice(&sector);
    }
    data
}
