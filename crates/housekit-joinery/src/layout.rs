//! Sheet layout packer
//!
//! Greedy skyline heuristic: tallest panels go first, each one at the lowest
//! then leftmost free position. Sheet width is a hard limit; sheet height is
//! only used to report how many sheets the layout spans.

use housekit_core::constants::{DEFAULT_SHEET_HEIGHT, DEFAULT_SHEET_WIDTH, MIN_PANEL_SPACING};
use housekit_core::GeometryError;
use serde::{Deserialize, Serialize};
use tracing::debug;

const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    /// Hard width limit in mm
    pub width: f64,
    /// Reference height in mm
    pub height: f64,
    /// Gap between panels in mm
    pub spacing: f64,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_SHEET_WIDTH,
            height: DEFAULT_SHEET_HEIGHT,
            spacing: MIN_PANEL_SPACING,
        }
    }
}

/// A panel to be placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl LayoutItem {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True if the rectangles come closer than `spacing` on both axes
    pub fn overlaps(&self, other: &LayoutRect, spacing: f64) -> bool {
        self.x < other.right() + spacing - EPSILON
            && other.x < self.right() + spacing - EPSILON
            && self.y < other.bottom() + spacing - EPSILON
            && other.y < self.bottom() + spacing - EPSILON
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub rect: LayoutRect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Placements in input order
    pub placements: Vec<Placement>,
    pub width: f64,
    pub height: f64,
    /// Sum of panel areas
    pub used_area: f64,
    /// Used area as a percentage of the bounding box
    pub efficiency: f64,
    pub sheets_needed: usize,
    pub spacing: f64,
}

impl LayoutResult {
    pub fn placement(&self, name: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone)]
pub struct LayoutPacker {
    settings: SheetSettings,
}

impl LayoutPacker {
    pub fn new(settings: SheetSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SheetSettings {
        &self.settings
    }

    /// Effective gap between panels
    pub fn spacing(&self) -> f64 {
        self.settings.spacing.max(MIN_PANEL_SPACING)
    }

    pub fn pack(&self, items: &[LayoutItem]) -> Result<LayoutResult, GeometryError> {
        let sheet_width = self.settings.width;
        let spacing = self.spacing();

        if !(sheet_width.is_finite() && sheet_width > 0.0) {
            return Err(GeometryError::NonPositive {
                name: "sheet width".to_string(),
                value: sheet_width,
            });
        }
        for item in items {
            for (dimension, value) in [("width", item.width), ("height", item.height)] {
                if !(value.is_finite() && value > 0.0) {
                    return Err(GeometryError::NonPositive {
                        name: format!("{} {}", item.name, dimension),
                        value,
                    });
                }
            }
        }

        if let Some(item) = items.iter().find(|i| i.width > sheet_width + EPSILON) {
            return Err(GeometryError::PanelTooWide {
                panel: item.name.clone(),
                width: item.width,
                sheet_width,
            });
        }

        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (&items[a], &items[b]);
            b.height
                .total_cmp(&a.height)
                .then_with(|| b.area().total_cmp(&a.area()))
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut placed: Vec<LayoutRect> = Vec::with_capacity(items.len());
        let mut rects: Vec<Option<LayoutRect>> = vec![None; items.len()];

        for index in order {
            let item = &items[index];
            // an anchor below everything placed always fits a panel no wider
            // than the sheet, so this only trips on a broken candidate set
            let rect = self.best_position(&placed, item, spacing).ok_or_else(|| {
                let right = placed.iter().map(LayoutRect::right).fold(0.0, f64::max);
                GeometryError::LayoutTooWide {
                    width: right + spacing + item.width,
                    sheet_width,
                }
            })?;
            debug!(
                "Placed {} ({:.1}x{:.1}) at ({:.1}, {:.1})",
                item.name, item.width, item.height, rect.x, rect.y
            );
            placed.push(rect);
            rects[index] = Some(rect);
        }

        let placements: Vec<Placement> = items
            .iter()
            .zip(rects)
            .filter_map(|(item, rect)| {
                rect.map(|rect| Placement {
                    name: item.name.clone(),
                    rect,
                })
            })
            .collect();

        let width = placed.iter().map(LayoutRect::right).fold(0.0, f64::max);
        let height = placed.iter().map(LayoutRect::bottom).fold(0.0, f64::max);

        let used_area: f64 = placed.iter().map(LayoutRect::area).sum();
        let bounding_area = width * height;
        let efficiency = if bounding_area > 0.0 {
            used_area / bounding_area * 100.0
        } else {
            0.0
        };
        let sheets_needed = if self.settings.height > 0.0 {
            ((height / self.settings.height).ceil() as usize).max(1)
        } else {
            1
        };

        Ok(LayoutResult {
            placements,
            width,
            height,
            used_area,
            efficiency,
            sheets_needed,
            spacing,
        })
    }

    fn best_position(
        &self,
        placed: &[LayoutRect],
        item: &LayoutItem,
        spacing: f64,
    ) -> Option<LayoutRect> {
        candidates(placed, spacing)
            .into_iter()
            .map(|(x, y)| LayoutRect::new(x, y, item.width, item.height))
            .filter(|rect| rect.right() <= self.settings.width + EPSILON)
            .filter(|rect| !placed.iter().any(|p| rect.overlaps(p, spacing)))
            .min_by(|a, b| a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x)))
    }
}

/// Candidate origins: the sheet origin, the right, bottom and corner of every
/// placed rectangle, and right/bottom combinations of every pair.
fn candidates(placed: &[LayoutRect], spacing: f64) -> Vec<(f64, f64)> {
    let mut out = vec![(0.0, 0.0)];
    for r in placed {
        out.push((r.right() + spacing, r.y));
        out.push((r.x, r.bottom() + spacing));
        out.push((r.right() + spacing, r.bottom() + spacing));
    }
    for a in placed {
        for b in placed {
            out.push((a.right() + spacing, b.bottom() + spacing));
            out.push((0.0, b.bottom() + spacing));
        }
    }

    out.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.total_cmp(&b.0)));
    out.dedup_by(|a, b| (a.0 - b.0).abs() < EPSILON && (a.1 - b.1).abs() < EPSILON);
    out
}
