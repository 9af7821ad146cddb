use dicetray_generator::{cut_angles, gencuts};
use dicetray_settings::{Config, SettingsError};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tray.toml");

    let mut config = Config::default();
    config.design.tray_width = 150.0;
    config.output.base_name = Some("LanternDiceHolder".to_string());
    config.output.stl = true;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tray.json");

    let mut config = Config::default();
    config.output.directory = PathBuf::from("models");
    config.foot.foot_diameter = 40.0;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "[design]\nsquare = 15.0\n\n[output]\npreview = true\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.design.square, 15.0);
    assert_eq!(config.design.tray_width, 136.0);
    assert!(config.output.preview);
    assert_eq!(config.output.resolution, 250);
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "output": { "mesh_segments": 2 } }"#).unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
}

#[test]
fn test_malformed_toml_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[design\nsquare = ").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
}

#[test]
fn test_foot_section_drives_gencuts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feet.toml");
    std::fs::write(&path, "[foot]\nfoot_diameter = 20.0\ncut_space = 5.0\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    let cuts = gencuts(3, &config.foot).unwrap();
    assert_eq!(cuts.primitive_count(), 3);

    // asin(5 / 10) = 30 degrees between cuts
    let angles = cut_angles(3, &config.foot);
    assert!((angles[0] - 30.0).abs() < 1e-9);
    assert!(angles[1].abs() < 1e-9);
    assert!((angles[2] + 30.0).abs() < 1e-9);
}
