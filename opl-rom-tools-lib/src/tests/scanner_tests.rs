use super::*;

#[test]
fn test_is_disc_image() {
    assert!(is_disc_image(Path::new("game.iso")));
    assert!(is_disc_image(Path::new("GAME.ISO")));
    assert!(is_disc_image(Path::new("/roms/Some Game.Iso")));
    assert!(!is_disc_image(Path::new("game.bin")));
    assert!(!is_disc_image(Path::new("game.iso.bak")));
    assert!(!is_disc_image(Path::new("iso")));
}

#[test]
fn test_find_disc_images_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.iso", "a.ISO", "notes.txt", "c.bin"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    fs::create_dir(dir.path().join("folder.iso")).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("nested.iso"), b"").unwrap();

    let images = find_disc_images(dir.path()).unwrap();
    let names: Vec<_> = images
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.ISO", "b.iso"]);
}

#[test]
fn test_find_disc_images_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(find_disc_images(dir.path()).unwrap().is_empty());
}

#[test]
fn test_find_disc_images_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_disc_images(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, ConfigError::ScanDir { .. }));
}
