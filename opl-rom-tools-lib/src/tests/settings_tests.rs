use super::*;

#[test]
fn test_settings_path_ends_with_app_dir() {
    let path = settings_path();
    assert!(path.ends_with("opl-rom-tools/settings.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.toml")).unwrap();
    assert!(settings.artwork.source.is_none());
    assert!(settings.artwork.destination.is_none());
    assert!(settings.lookup.base_url.is_none());
}

#[test]
fn test_full_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[artwork]
source = "/mnt/art/PS2"
destination = "/mnt/opl/ART"

[lookup]
base_url = "http://localhost:8080"
"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(
        settings.artwork.source.as_deref(),
        Some(Path::new("/mnt/art/PS2"))
    );
    assert_eq!(
        settings.artwork.destination.as_deref(),
        Some(Path::new("/mnt/opl/ART"))
    );
    assert_eq!(
        settings.lookup.base_url.as_deref(),
        Some("http://localhost:8080")
    );
}

#[test]
fn test_partial_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[artwork]\nsource = \"/art\"\n").unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.artwork.source.as_deref(), Some(Path::new("/art")));
    assert!(settings.artwork.destination.is_none());
    assert!(settings.lookup.base_url.is_none());
}

#[test]
fn test_invalid_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[artwork\nsource = 3").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::SettingsParse { .. }));
}

#[test]
fn test_settings_path_is_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::SettingsRead { .. }));
}

#[test]
fn test_resolve_path_priority() {
    let saved = PathBuf::from("/saved");
    assert_eq!(
        resolve_path(Some(PathBuf::from("/cli")), Some(&saved)),
        Some(PathBuf::from("/cli"))
    );
    assert_eq!(resolve_path(None, Some(&saved)), Some(saved.clone()));
    assert_eq!(resolve_path(None, None), None);
}
