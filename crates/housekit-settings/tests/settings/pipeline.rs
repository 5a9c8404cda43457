use housekit_joinery::{CuttingSummary, HouseBoxMaker, HouseStyle, PanelKind};
use housekit_settings::config::MeasurementSystem;
use housekit_settings::Config;
use tempfile::tempdir;

#[test]
fn test_design_file_to_panels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cottage.toml");
    std::fs::write(
        &path,
        r#"
[house]
length = 100.0
width = 70.0
height = 60.0
gable_angle = 30.0

[generation]
style = "house_no_roof"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    let mut maker = HouseBoxMaker::new(config.to_parameters().unwrap()).unwrap();
    maker.generate().unwrap();

    assert_eq!(maker.panels().len(), 5);
    assert!(maker.panel(PanelKind::RoofPanelLeft).is_none());
    for (_, d) in maker.to_path_data() {
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
    }

    let summary = CuttingSummary::from_maker(&maker).unwrap();
    assert_eq!(summary.style, HouseStyle::HouseNoRoof);
    assert_eq!(summary.sheets_needed, 1);
}

#[test]
fn test_saved_design_reloads_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("design.json");
    let mut config = Config::new();
    config.units = MeasurementSystem::Metric;
    config.generation.single_joints = true;
    config.save_to_file(&path).unwrap();

    let reloaded = Config::load_from_file(&path).unwrap();
    let mut a = HouseBoxMaker::new(config.to_parameters().unwrap()).unwrap();
    let mut b = HouseBoxMaker::new(reloaded.to_parameters().unwrap()).unwrap();
    a.generate().unwrap();
    b.generate().unwrap();
    assert_eq!(a.to_path_data(), b.to_path_data());
}
