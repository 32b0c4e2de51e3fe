use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_select_artwork_prefix() {
    let all = names(&[
        "SCES_123.45_COV.jpg",
        "SCES_123.45_BG.png",
        "OTHER_art.png",
        "SCES_123.46_COV.jpg",
        "xSCES_123.45.png",
    ]);
    assert_eq!(
        select_artwork(&all, "SCES_123.45"),
        vec!["SCES_123.45_COV.jpg", "SCES_123.45_BG.png"]
    );
}

#[test]
fn test_select_artwork_case_sensitive() {
    let all = names(&["sces_123.45_COV.jpg", "SCES_123.45_COV.jpg"]);
    assert_eq!(
        select_artwork(&all, "SCES_123.45"),
        vec!["SCES_123.45_COV.jpg"]
    );
}

#[test]
fn test_select_artwork_none() {
    let all = names(&["OTHER_art.png"]);
    assert!(select_artwork(&all, "SCES_123.45").is_empty());
}

fn art_dirs() -> (tempfile::TempDir, tempfile::TempDir) {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    fs::write(src.path().join("SCES_123.45_cover.png"), b"cover").unwrap();
    fs::write(src.path().join("SCES_123.45_bg.png"), b"bg").unwrap();
    fs::write(src.path().join("OTHER_art.png"), b"other").unwrap();
    (src, dst)
}

#[test]
fn test_copy_artwork_matching_only() {
    let (src, dst) = art_dirs();

    let summary = copy_artwork("SCES_123.45", src.path(), dst.path(), false).unwrap();
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.copied.len(), 2);
    assert!(summary.failures.is_empty());

    assert_eq!(
        fs::read(dst.path().join("SCES_123.45_cover.png")).unwrap(),
        b"cover"
    );
    assert_eq!(fs::read(dst.path().join("SCES_123.45_bg.png")).unwrap(), b"bg");
    assert!(!dst.path().join("OTHER_art.png").exists());
    // Source files stay where they were
    assert!(src.path().join("SCES_123.45_cover.png").exists());
}

#[test]
fn test_copy_artwork_skips_directories() {
    let (src, dst) = art_dirs();
    fs::create_dir(src.path().join("SCES_123.45_extra")).unwrap();

    let summary = copy_artwork("SCES_123.45", src.path(), dst.path(), false).unwrap();
    assert_eq!(summary.matched, 2);
    assert!(!dst.path().join("SCES_123.45_extra").exists());
}

#[test]
fn test_copy_artwork_overwrites_destination() {
    let (src, dst) = art_dirs();
    fs::write(dst.path().join("SCES_123.45_cover.png"), b"stale").unwrap();

    copy_artwork("SCES_123.45", src.path(), dst.path(), false).unwrap();
    assert_eq!(
        fs::read(dst.path().join("SCES_123.45_cover.png")).unwrap(),
        b"cover"
    );
}

#[test]
fn test_copy_artwork_no_match() {
    let (src, dst) = art_dirs();

    let summary = copy_artwork("SLUS_999.99", src.path(), dst.path(), false).unwrap();
    assert_eq!(summary.matched, 0);
    assert!(summary.copied.is_empty());
    assert_eq!(fs::read_dir(dst.path()).unwrap().count(), 0);
}

#[test]
fn test_copy_artwork_dry_run() {
    let (src, dst) = art_dirs();

    let summary = copy_artwork("SCES_123.45", src.path(), dst.path(), true).unwrap();
    assert_eq!(summary.copied.len(), 2);
    assert_eq!(fs::read_dir(dst.path()).unwrap().count(), 0);
}

#[test]
fn test_copy_artwork_failure_is_collected() {
    let (src, dst) = art_dirs();
    // A directory in the way makes that one copy fail
    fs::create_dir(dst.path().join("SCES_123.45_bg.png")).unwrap();

    let summary = copy_artwork("SCES_123.45", src.path(), dst.path(), false).unwrap();
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.copied.len(), 1);
    assert_eq!(summary.failures.len(), 1);
    assert!(matches!(summary.failures[0], ProcessError::Copy { .. }));
    assert!(dst.path().join("SCES_123.45_cover.png").is_file());
}

#[test]
fn test_copy_artwork_missing_source() {
    let dst = tempfile::tempdir().unwrap();
    let missing = dst.path().join("missing");
    let err = copy_artwork("SCES_123.45", &missing, dst.path(), false).unwrap_err();
    assert!(matches!(err, ProcessError::ListArtwork { .. }));
}
