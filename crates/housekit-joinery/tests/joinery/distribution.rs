use housekit_joinery::{EdgeName, HouseGeometry, JointDistributor, PanelKind};
use proptest::prelude::*;

fn geometry() -> HouseGeometry {
    HouseGeometry::new(80.0, 60.0, 70.0, 35.0, 3.0, 10.0, 0.0).unwrap()
}

#[test]
fn test_single_joint_mode_scenario() {
    let joints = JointDistributor::new(10.0, true).distribute(100.0, 0.0);
    assert_eq!(joints.len(), 1);
    assert_eq!((joints[0].start, joints[0].end), (45.0, 55.0));
}

#[test]
fn test_multi_joint_scenario_is_ordered() {
    let joints = JointDistributor::new(10.0, false).distribute(100.0, 0.0);
    assert_eq!(joints.len(), 5);
    for pair in joints.windows(2) {
        assert!(pair[0].end < pair[1].start);
    }
    let mid = &joints[2];
    assert!(((mid.start + mid.end) / 2.0 - 50.0).abs() < 1e-9);
}

#[test]
fn test_gable_roof_edges_pinned_to_one_joint() {
    let g = geometry();
    let d = JointDistributor::new(10.0, false);
    for edge in [EdgeName::RoofRight, EdgeName::RoofLeft] {
        let joints = d
            .distribute_for_edge(&g, PanelKind::GableWallFront, edge)
            .unwrap();
        assert_eq!(joints.len(), 1);
    }
}

#[test]
fn test_gable_bottom_aligns_with_floor() {
    let g = geometry();
    let d = JointDistributor::new(10.0, false);
    let floor = d
        .distribute_for_edge(&g, PanelKind::Floor, EdgeName::Left)
        .unwrap();
    let gable = d
        .distribute_for_edge(&g, PanelKind::GableWallFront, EdgeName::Bottom)
        .unwrap();
    assert_eq!(floor.len(), gable.len());
    for (f, w) in floor.iter().zip(&gable) {
        assert!((w.start - f.start - 3.0).abs() < 1e-9);
    }
}

#[test]
fn test_edge_info_reports_coverage() {
    let info = JointDistributor::new(10.0, false)
        .edge_info(&geometry(), PanelKind::SideWallLeft, EdgeName::Bottom)
        .unwrap();
    assert_eq!(info.edge_length, 80.0);
    assert_eq!(info.joint_count, 3);
    assert!((info.coverage_percentage - 37.5).abs() < 1e-9);
}

proptest! {
    #[test]
    fn prop_joint_count_is_odd(length in 25.0f64..2000.0, finger in 3.0f64..10.0) {
        let d = JointDistributor::new(finger, false);
        let joints = d.distribute(length.max(2.5 * finger), 0.0);
        prop_assert!(joints.len() % 2 == 1);
        prop_assert!(joints.len() <= 7);
    }

    #[test]
    fn prop_coverage_and_gaps(length in 25.0f64..2000.0, finger in 3.0f64..10.0) {
        let length = length.max(2.5 * finger);
        let joints = JointDistributor::new(finger, false).distribute(length, 0.0);
        let coverage: f64 = joints.iter().map(|j| j.length()).sum();
        prop_assert!(coverage <= length + 1e-9);
        prop_assert!(joints[0].start >= -1e-9);
        prop_assert!(joints[joints.len() - 1].end <= length + 1e-9);
        for pair in joints.windows(2) {
            prop_assert!(pair[1].start - pair[0].end >= 0.3 * finger - 1e-9);
        }
        for joint in &joints {
            prop_assert!((joint.length() - finger).abs() < 1e-9);
        }
    }
}
