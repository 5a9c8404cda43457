use housekit_joinery::joint_table::{joint_span, mate, polarity};
use housekit_joinery::{
    EdgeName, HouseGeometry, JointDistributor, Mate, PanelGenerator, PanelKind, Polarity,
};

fn geometry() -> HouseGeometry {
    HouseGeometry::new(80.0, 60.0, 70.0, 35.0, 3.0, 10.0, 0.0).unwrap()
}

/// Every male edge's partner, with the number of mated pairs checked
fn check_reciprocity(g: &HouseGeometry, distributor: &JointDistributor) -> usize {
    let mut checked = 0;
    for kind in PanelKind::ALL {
        for &edge in kind.edges() {
            if polarity(kind, edge).unwrap() != Polarity::Male {
                continue;
            }
            match mate(kind, edge) {
                Some(Mate::Edge(other, other_edge)) => {
                    assert_eq!(
                        polarity(other, other_edge).unwrap(),
                        Polarity::Female,
                        "{kind}.{edge} mates {other}.{other_edge}"
                    );
                    let a = joint_span(g, kind, edge).unwrap();
                    let b = joint_span(g, other, other_edge).unwrap();
                    assert!((a - b).abs() < 1e-9, "{kind}.{edge}: {a} vs {other}.{other_edge}: {b}");

                    let tabs = distributor.distribute_for_edge(g, kind, edge).unwrap();
                    let slots = distributor
                        .distribute_for_edge(g, other, other_edge)
                        .unwrap();
                    assert_eq!(
                        tabs.len(),
                        slots.len(),
                        "{kind}.{edge} vs {other}.{other_edge} at z={} k={}",
                        g.height(),
                        g.kerf()
                    );
                    for (tab, slot) in tabs.iter().zip(&slots) {
                        assert!((tab.start - slot.start).abs() < 1e-9);
                        assert!((tab.end - slot.end).abs() < 1e-9);
                    }
                    checked += 1;
                }
                Some(Mate::RoofSlot(roof)) => {
                    assert!(matches!(
                        roof,
                        PanelKind::RoofPanelLeft | PanelKind::RoofPanelRight
                    ));
                    checked += 1;
                }
                None => panic!("male edge {kind}.{edge} has no mate"),
            }
        }
    }
    checked
}

#[test]
fn test_male_edges_mate_female_edges_of_equal_span() {
    let g = geometry();
    // floor 4, side walls 2x2, gable roof edges 2x2, ridge 1
    assert_eq!(check_reciprocity(&g, &JointDistributor::new(10.0, false)), 13);
}

#[test]
fn test_mated_edges_share_joints_with_kerf() {
    let distributor = JointDistributor::new(10.0, false);
    for kerf in [0.0, 0.1, 0.2, 0.5] {
        for step in 0..130 {
            let z = 31.0 + step as f64 * 0.7;
            let g = HouseGeometry::new(80.0, 60.0, z, 35.0, 3.0, 10.0, kerf).unwrap();
            assert_eq!(check_reciprocity(&g, &distributor), 13);
        }
    }
}

#[test]
fn test_wall_corner_joint_counts_match_at_threshold() {
    // z + k crosses the three-joint threshold while z alone does not
    let g = HouseGeometry::new(80.0, 60.0, 55.9, 35.0, 3.0, 10.0, 0.2).unwrap();
    let generator = PanelGenerator::new(g, false);
    let wall = generator.panel_info(PanelKind::SideWallLeft).unwrap();
    let gable = generator.panel_info(PanelKind::GableWallFront).unwrap();
    assert_eq!(
        wall[&EdgeName::Right].joint_count,
        gable[&EdgeName::Left].joint_count
    );
}

#[test]
fn test_female_edges_all_have_mates() {
    for kind in PanelKind::ALL {
        for &edge in kind.edges() {
            if polarity(kind, edge).unwrap() == Polarity::Female {
                assert!(mate(kind, edge).is_some(), "{kind}.{edge}");
            }
        }
    }
}

#[test]
fn test_plain_edges_have_no_mate() {
    for kind in PanelKind::ALL {
        for &edge in kind.edges() {
            if polarity(kind, edge).unwrap() == Polarity::None {
                assert!(mate(kind, edge).is_none(), "{kind}.{edge}");
            }
        }
    }
}

#[test]
fn test_each_roof_panel_receives_two_tabs() {
    for roof in [PanelKind::RoofPanelLeft, PanelKind::RoofPanelRight] {
        let tabs = [PanelKind::GableWallFront, PanelKind::GableWallBack]
            .iter()
            .flat_map(|&gable| gable.edges().iter().map(move |&edge| mate(gable, edge)))
            .filter(|m| *m == Some(Mate::RoofSlot(roof)))
            .count();
        assert_eq!(tabs, 2);
    }
}
