use housekit_core::GeometryError;
use housekit_joinery::{LayoutItem, LayoutPacker, SheetSettings};
use proptest::prelude::*;

fn packer() -> LayoutPacker {
    LayoutPacker::new(SheetSettings::default())
}

#[test]
fn test_three_panel_scenario() {
    let items = vec![
        LayoutItem::new("roof", 98.0, 44.0),
        LayoutItem::new("wall_a", 80.0, 70.0),
        LayoutItem::new("wall_b", 80.0, 70.0),
    ];
    let result = packer().pack(&items).unwrap();
    assert_eq!(result.placements.len(), 3);
    assert!(result.width <= 457.2);
    for (i, a) in result.placements.iter().enumerate() {
        assert!(a.rect.right() <= 457.2);
        for b in &result.placements[i + 1..] {
            assert!(!a.rect.overlaps(&b.rect, result.spacing));
        }
    }
    // placements come back in input order
    assert_eq!(result.placements[0].name, "roof");
    assert_eq!(result.sheets_needed, 1);
}

#[test]
fn test_tallest_panel_placed_first() {
    let items = vec![
        LayoutItem::new("short", 50.0, 20.0),
        LayoutItem::new("tall", 50.0, 90.0),
    ];
    let result = packer().pack(&items).unwrap();
    let tall = result.placement("tall").unwrap();
    assert_eq!((tall.rect.x, tall.rect.y), (0.0, 0.0));
}

#[test]
fn test_wide_panel_scenario() {
    let err = packer()
        .pack(&[
            LayoutItem::new("ok", 80.0, 70.0),
            LayoutItem::new("too_wide", 500.0, 70.0),
        ])
        .unwrap_err();
    match err {
        GeometryError::PanelTooWide {
            panel,
            width,
            sheet_width,
        } => {
            assert_eq!(panel, "too_wide");
            assert_eq!(width, 500.0);
            assert_eq!(sheet_width, 457.2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_tall_layout_spans_several_sheets() {
    let items: Vec<LayoutItem> = (0..4)
        .map(|i| LayoutItem::new(format!("p{i}"), 400.0, 200.0))
        .collect();
    let result = packer().pack(&items).unwrap();
    // one per row: 4 * 200 + 3 * 2 = 806mm tall
    assert!((result.height - 806.0).abs() < 1e-9);
    assert_eq!(result.sheets_needed, 3);
}

#[test]
fn test_efficiency_is_area_ratio() {
    let items = vec![
        LayoutItem::new("a", 100.0, 50.0),
        LayoutItem::new("b", 100.0, 50.0),
    ];
    let result = packer().pack(&items).unwrap();
    let expected = 10_000.0 / (result.width * result.height) * 100.0;
    assert!((result.efficiency - expected).abs() < 1e-9);
    assert_eq!(result.used_area, 10_000.0);
}

proptest! {
    #[test]
    fn prop_packed_rects_never_overlap(
        sizes in prop::collection::vec((5.0f64..200.0, 5.0f64..150.0), 1..15),
        spacing in 0.0f64..8.0,
    ) {
        let items: Vec<LayoutItem> = sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| LayoutItem::new(format!("p{i}"), w, h))
            .collect();
        let packer = LayoutPacker::new(SheetSettings { spacing, ..SheetSettings::default() });
        let result = packer.pack(&items).unwrap();
        prop_assert_eq!(result.placements.len(), items.len());
        for (i, a) in result.placements.iter().enumerate() {
            prop_assert!(a.rect.x >= 0.0 && a.rect.y >= 0.0);
            prop_assert!(a.rect.right() <= 457.2 + 1e-9);
            for b in &result.placements[i + 1..] {
                prop_assert!(!a.rect.overlaps(&b.rect, result.spacing));
            }
        }
        prop_assert!(result.width <= 457.2 + 1e-9);
    }
}
