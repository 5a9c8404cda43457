use housekit_core::{FingerJointError, Point};
use housekit_joinery::{HouseGeometry, PanelGenerator, PanelKind, PathCommand};

fn generator(kerf: f64) -> PanelGenerator {
    let geometry = HouseGeometry::new(80.0, 60.0, 70.0, 35.0, 3.0, 10.0, kerf).unwrap();
    PanelGenerator::new(geometry, false)
}

#[test]
fn test_floor_tabs_protrude_by_thickness_plus_kerf() {
    let outline = generator(0.1).generate(PanelKind::Floor, Point::ORIGIN).unwrap();
    let (min, max) = outline.path.bounds().unwrap();
    assert!((min.x + 3.1).abs() < 1e-9);
    assert!((min.y + 3.1).abs() < 1e-9);
    assert!((max.x - (80.1 + 3.1)).abs() < 1e-9);
    assert!((max.y - (60.1 + 3.1)).abs() < 1e-9);
}

#[test]
fn test_side_wall_slots_stay_inside() {
    let outline = generator(0.1)
        .generate(PanelKind::SideWallLeft, Point::ORIGIN)
        .unwrap();
    let (min, max) = outline.path.bounds().unwrap();
    // bottom edge is slotted, so nothing sticks out below it
    assert!(min.y.abs() < 1e-9);
    assert!(outline.path.points().iter().any(|p| (p.y - 2.9).abs() < 1e-9));
    // plain top edge
    assert!((max.y - 70.1).abs() < 1e-9);
    // male left and right edges
    assert!((min.x + 3.1).abs() < 1e-9);
}

#[test]
fn test_gable_outline_has_peak() {
    let g = generator(0.0);
    let outline = g.generate(PanelKind::GableWallFront, Point::ORIGIN).unwrap();
    assert_eq!(outline.corners.len(), 5);
    let peak = outline.corners[3];
    assert!((peak.x - 33.0).abs() < 1e-9);
    assert!((peak.y - g.geometry().total_gable_height()).abs() < 1e-9);
    assert!(outline
        .path
        .commands()
        .iter()
        .any(|c| *c == PathCommand::LineTo(peak)));
}

#[test]
fn test_path_data_is_three_decimals() {
    let outline = generator(0.0)
        .generate(PanelKind::RoofPanelRight, Point::ORIGIN)
        .unwrap();
    let data = outline.to_path_data();
    assert!(data.starts_with("M 0.000,0.000 L "));
    assert!(data.ends_with(" Z"));
    assert_eq!(data.matches('M').count(), 3);
    for token in data.split(' ').filter(|t| t.contains(',')) {
        for number in token.split(',') {
            let decimals = number.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 3, "{token}");
        }
    }
}

#[test]
fn test_cutout_size_is_kerf_compensated() {
    let outline = generator(0.2)
        .generate(PanelKind::RoofPanelLeft, Point::new(10.0, 20.0))
        .unwrap();
    for cutout in &outline.cutouts {
        assert!((cutout.width - 2.8).abs() < 1e-9);
        assert!((cutout.height - 9.8).abs() < 1e-9);
    }
    assert!((outline.cutouts[0].center.x - 17.5).abs() < 1e-9);
}

#[test]
fn test_unknown_panel_name_is_rejected() {
    let err = "porch".parse::<PanelKind>().unwrap_err();
    assert_eq!(err, FingerJointError::UnknownPanel("porch".to_string()));
}
