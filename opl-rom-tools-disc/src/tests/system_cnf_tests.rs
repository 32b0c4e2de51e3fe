use super::*;
use crate::testutil::{make_iso, make_iso_with_system_cnf, to_raw_image};
use std::io::{Cursor, Write};

const CNF: &str = "BOOT2 = cdrom0:\\SCES_123.45;1\r\nVER = 1.00\r\nVMODE = PAL\r\n";

#[test]
fn test_read_config_from_iso() {
    let mut cursor = Cursor::new(make_iso_with_system_cnf(CNF));
    assert_eq!(read_config_from(&mut cursor).unwrap(), CNF);
}

#[test]
fn test_read_config_from_raw_image() {
    let mut cursor = Cursor::new(to_raw_image(&make_iso_with_system_cnf(CNF)));
    assert_eq!(read_config_from(&mut cursor).unwrap(), CNF);
}

#[test]
fn test_read_config_missing_entry() {
    let mut cursor = Cursor::new(make_iso(&[("README.TXT;1", &b"nothing here"[..])]));
    assert!(matches!(
        read_config_from(&mut cursor),
        Err(DiscError::EntryNotFound(_))
    ));
}

#[test]
fn test_read_config_not_utf8() {
    let mut cursor = Cursor::new(make_iso(&[("SYSTEM.CNF;1", &[0x42u8, 0xFF, 0xFE, 0x00][..])]));
    assert!(matches!(
        read_config_from(&mut cursor),
        Err(DiscError::Decode { .. })
    ));
}

#[test]
fn test_read_config_not_a_disc() {
    let mut cursor = Cursor::new(b"just some text that is not a disc image".to_vec());
    assert!(read_config_from(&mut cursor).is_err());
}

#[test]
fn test_read_config_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&make_iso_with_system_cnf(CNF)).unwrap();
    file.flush().unwrap();
    assert_eq!(read_config(file.path()).unwrap(), CNF);
}

#[test]
fn test_read_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_config(&dir.path().join("nope.iso")).unwrap_err();
    assert!(matches!(err, DiscError::Open { .. }));
}

#[test]
fn test_read_config_root_past_address_space() {
    let mut iso = make_iso_with_system_cnf(CNF);
    let root_lba = 16 * crate::iso::SECTOR_SIZE + 158;
    iso[root_lba..root_lba + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    let mut cursor = Cursor::new(iso);
    assert!(matches!(
        read_config_from(&mut cursor),
        Err(DiscError::Corrupted(_))
    ));
}
