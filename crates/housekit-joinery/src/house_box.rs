//! House Box Maker
//!
//! Generates the interlocking panels of a gable-roofed house box and nests
//! them on a sheet. Each panel is generated once at the origin to measure its
//! real extent (tabs included), the extents are packed, and the panel is then
//! regenerated at its packed position.

mod types;

pub use types::{HouseParameters, HouseStyle};

use crate::geometry::HouseGeometry;
use crate::layout::{LayoutItem, LayoutPacker, LayoutResult};
use crate::panel::PanelKind;
use crate::panels::{PanelGenerator, PanelOutline};
use crate::summary::CuttingSummary;
use housekit_core::{Error, Point, Result};
use tracing::{debug, info};

pub struct HouseBoxMaker {
    params: HouseParameters,
    generator: PanelGenerator,
    panels: Vec<PanelOutline>,
    layout: Option<LayoutResult>,
}

impl HouseBoxMaker {
    pub fn new(params: HouseParameters) -> Result<Self> {
        let geometry = HouseGeometry::new(
            params.length,
            params.width,
            params.height,
            params.gable_angle,
            params.thickness,
            params.finger_length,
            params.kerf,
        )?;

        if !(params.sheet_width > 0.0) || !(params.sheet_height > 0.0) {
            return Err(Error::config(format!(
                "Sheet size must be positive (got {}x{})",
                params.sheet_width, params.sheet_height
            )));
        }
        if let Some(spacing) = params.panel_spacing {
            if !(spacing >= 0.0) {
                return Err(Error::config(format!(
                    "Panel spacing must not be negative (got {})",
                    spacing
                )));
            }
        }

        let generator = PanelGenerator::new(geometry, params.single_joints);
        Ok(Self {
            params,
            generator,
            panels: Vec::new(),
            layout: None,
        })
    }

    pub fn params(&self) -> &HouseParameters {
        &self.params
    }

    pub fn geometry(&self) -> &HouseGeometry {
        self.generator.geometry()
    }

    pub fn generator(&self) -> &PanelGenerator {
        &self.generator
    }

    /// Panels cut for the configured style
    pub fn panel_kinds(&self) -> &'static [PanelKind] {
        self.params.style.panels()
    }

    pub fn generate(&mut self) -> Result<()> {
        self.panels.clear();
        self.layout = None;

        let kinds = self.panel_kinds();
        let mut items = Vec::with_capacity(kinds.len());
        let mut offsets = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            let outline = self.generator.generate(kind, Point::ORIGIN)?;
            let (min, max) = outline.path.bounds().ok_or_else(|| {
                Error::other(format!("Panel {} produced an empty outline", kind))
            })?;
            items.push(LayoutItem::new(kind.name(), max.x - min.x, max.y - min.y));
            offsets.push(min);
        }

        let packer = LayoutPacker::new(self.params.sheet());
        let layout = packer.pack(&items)?;

        for (&kind, min) in kinds.iter().zip(offsets) {
            let placement = layout
                .placement(kind.name())
                .ok_or_else(|| Error::other(format!("Panel {} was not placed", kind)))?;
            let origin = Point::new(placement.rect.x - min.x, placement.rect.y - min.y);
            let outline = self.generator.generate(kind, origin)?;
            debug!(
                "Generated {} ({:.1}x{:.1}mm) at {}",
                kind, outline.width, outline.height, origin
            );
            self.panels.push(outline);
        }

        info!(
            "Generated {} panels on {:.1}x{:.1}mm ({:.1}% efficiency, {} sheet(s))",
            self.panels.len(),
            layout.width,
            layout.height,
            layout.efficiency,
            layout.sheets_needed
        );
        self.layout = Some(layout);
        Ok(())
    }

    pub fn panels(&self) -> &[PanelOutline] {
        &self.panels
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&PanelOutline> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    /// Path data strings for every generated panel
    pub fn to_path_data(&self) -> Vec<(PanelKind, String)> {
        self.panels
            .iter()
            .map(|p| (p.kind, p.to_path_data()))
            .collect()
    }

    pub fn cutting_summary(&self) -> Result<CuttingSummary> {
        CuttingSummary::from_maker(self)
    }
}
