use housekit_joinery::{HouseBoxMaker, HouseParameters, HouseStyle, PanelKind};

#[test]
fn test_reference_house_dimensions() {
    let maker = HouseBoxMaker::new(HouseParameters::default()).unwrap();
    let g = maker.geometry();
    assert!((g.gable_peak_height() - 21.0).abs() < 0.01);
    assert_eq!(g.roof_panel_length(), 98.0);
}

#[test]
fn test_generated_panels_do_not_overlap() {
    let mut maker = HouseBoxMaker::new(HouseParameters::default()).unwrap();
    maker.generate().unwrap();
    let bounds: Vec<_> = maker
        .panels()
        .iter()
        .map(|p| p.path.bounds().unwrap())
        .collect();
    for (i, (a_min, a_max)) in bounds.iter().enumerate() {
        for (b_min, b_max) in &bounds[i + 1..] {
            let apart = a_max.x <= b_min.x + 1e-9
                || b_max.x <= a_min.x + 1e-9
                || a_max.y <= b_min.y + 1e-9
                || b_max.y <= a_min.y + 1e-9;
            assert!(apart);
        }
        assert!(a_max.x <= 457.2 + 1e-9);
    }
}

#[test]
fn test_styles_select_panels() {
    let mut maker = HouseBoxMaker::new(HouseParameters {
        style: HouseStyle::WallsOnly,
        ..HouseParameters::default()
    })
    .unwrap();
    maker.generate().unwrap();
    assert_eq!(maker.panels().len(), 4);
    assert!(maker.panel(PanelKind::Floor).is_none());
    assert!(maker.panel(PanelKind::GableWallBack).is_some());
}

#[test]
fn test_narrow_sheet_is_rejected() {
    let mut maker = HouseBoxMaker::new(HouseParameters {
        sheet_width: 60.0,
        ..HouseParameters::default()
    })
    .unwrap();
    let err = maker.generate().unwrap_err();
    assert!(err.is_geometry_error());
    assert!(maker.panels().is_empty());
}

#[test]
fn test_single_joint_mode_uses_one_joint_per_edge() {
    let maker = HouseBoxMaker::new(HouseParameters {
        single_joints: true,
        ..HouseParameters::default()
    })
    .unwrap();
    let info = maker.generator().panel_info(PanelKind::Floor).unwrap();
    assert!(info.values().all(|i| i.joint_count == 1));
}

#[test]
fn test_summary_and_instructions() {
    let mut maker = HouseBoxMaker::new(HouseParameters::default()).unwrap();
    maker.generate().unwrap();
    let summary = maker.cutting_summary().unwrap();
    assert_eq!(summary.panel_count, 7);
    assert!(summary.total_cut_length_m > 0.0);
    let steps = summary.assembly_instructions();
    assert_eq!(steps[0], "House Box Assembly Instructions:");
    assert!(steps.iter().any(|s| s == "Material thickness: 3mm"));
}
