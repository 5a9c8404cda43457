use housekit_joinery::{HouseBoxMaker, HouseStyle};
use housekit_settings::config::MeasurementSystem;
use housekit_settings::{Config, SettingsError};
use tempfile::tempdir;

fn sample() -> Config {
    let mut config = Config::new();
    config.house.length = 120.0;
    config.house.gable_angle = 40.0;
    config.material.kerf = 0.1;
    config.generation.style = HouseStyle::HouseNoRoof;
    config.generation.panel_spacing = Some(4.0);
    config
}

#[test]
fn test_json_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("design.json");
    let config = sample();
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_roundtrip_without_spacing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("design.toml");
    let mut config = sample();
    config.generation.panel_spacing = None;
    config.save_to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[house]"));
    assert!(text.contains("style = \"house_no_roof\""));
    assert!(!text.contains("panel_spacing"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "units = \"imperial\"\n\n[material]\nsheet_width = 24.0\n").unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.units, MeasurementSystem::Imperial);
    assert_eq!(loaded.material.sheet_width, 24.0);
    assert_eq!(loaded.house, Config::new().house);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("design.yaml");
    let err = Config::new().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "material": { "thickness": -3.0 } }"#).unwrap();

    match Config::load_from_file(&path) {
        Err(SettingsError::InvalidSetting { key, .. }) => assert_eq!(key, "material.thickness"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = Config::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
}

#[test]
fn test_imperial_sheet_drives_maker() {
    let mut config = Config::new();
    config.units = MeasurementSystem::Imperial;
    config.house.length = 80.0 / 25.4;
    config.house.width = 60.0 / 25.4;
    config.house.height = 70.0 / 25.4;
    config.material.thickness = 3.0 / 25.4;
    config.material.finger_length = 10.0 / 25.4;
    config.material.sheet_width = 18.0;
    config.material.sheet_height = 12.0;

    let params = config.to_parameters().unwrap();
    assert!((params.sheet_width - 457.2).abs() < 1e-9);
    assert!((params.sheet_height - 304.8).abs() < 1e-9);

    let mut maker = HouseBoxMaker::new(params).unwrap();
    maker.generate().unwrap();
    assert_eq!(maker.panels().len(), 7);
}

#[test]
fn test_engine_rejection_converts() {
    let mut config = Config::new();
    config.material.finger_length = 500.0;
    let params = config.to_parameters().unwrap();
    let err: SettingsError = HouseBoxMaker::new(params).err().unwrap().into();
    assert!(matches!(err, SettingsError::Design(_)));
}

#[test]
fn test_sheet_size_in_inches_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stock.toml");
    std::fs::write(
        &path,
        "[material]\nsheet_width = \"18in\"\nsheet_height = \"12in\"\nthickness = \"3mm\"\n",
    )
    .unwrap();

    let params = Config::load_from_file(&path).unwrap().to_parameters().unwrap();
    assert!((params.sheet_width - 457.2).abs() < 1e-9);
    assert!((params.sheet_height - 304.8).abs() < 1e-9);
    assert!((params.thickness - 3.0).abs() < 1e-9);
}

#[test]
fn test_unparseable_length_string() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[house]\nwidth = \"wide\"\n").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
    assert!(err.to_string().contains("house.width"));
}
