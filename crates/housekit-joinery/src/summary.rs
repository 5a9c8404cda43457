//! Cutting summary and assembly instructions

use crate::house_box::{HouseBoxMaker, HouseStyle};
use crate::joint_table::{self, Mate};
use crate::panel::{EdgeName, PanelKind, Polarity};
use housekit_core::{format_length, Error, MeasurementSystem, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSummary {
    pub kind: PanelKind,
    pub label: String,
    pub width: f64,
    pub height: f64,
    pub area: f64,
    /// Perimeter of the nominal outline, without joints
    pub perimeter: f64,
    /// Length of the generated outline and cutouts
    pub cut_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuttingSummary {
    pub style: HouseStyle,
    pub panel_count: usize,
    pub panels: Vec<PanelSummary>,
    pub total_cut_length_mm: f64,
    pub total_cut_length_m: f64,
    pub total_area: f64,
    pub layout_width: f64,
    pub layout_height: f64,
    pub efficiency: f64,
    pub sheets_needed: usize,
    pub sheet_width: f64,
    pub sheet_height: f64,
    pub thickness: f64,
    pub finger_length: f64,
    pub gable_angle: f64,
    pub gable_peak_height: f64,
    pub roof_panel_left_width: f64,
    pub roof_panel_right_width: f64,
}

impl CuttingSummary {
    /// Summarize a maker after `generate()` has run
    pub fn from_maker(maker: &HouseBoxMaker) -> Result<Self> {
        let layout = maker
            .layout()
            .ok_or_else(|| Error::other("No layout: call generate() first"))?;
        let geometry = maker.geometry();

        let panels: Vec<PanelSummary> = maker
            .panels()
            .iter()
            .map(|outline| {
                let corners = &outline.corners;
                let perimeter: f64 = corners
                    .iter()
                    .zip(corners.iter().cycle().skip(1))
                    .map(|(a, b)| a.distance_to(*b))
                    .sum();
                PanelSummary {
                    kind: outline.kind,
                    label: outline.kind.label(),
                    width: outline.width,
                    height: outline.height,
                    area: outline.width * outline.height,
                    perimeter,
                    cut_length: outline.cut_length(),
                }
            })
            .collect();

        let total_cut_length_mm: f64 = panels.iter().map(|p| p.cut_length).sum();
        let params = maker.params();
        Ok(Self {
            style: params.style,
            panel_count: panels.len(),
            total_area: panels.iter().map(|p| p.area).sum(),
            panels,
            total_cut_length_mm,
            total_cut_length_m: total_cut_length_mm / 1000.0,
            layout_width: layout.width,
            layout_height: layout.height,
            efficiency: layout.efficiency,
            sheets_needed: layout.sheets_needed,
            sheet_width: params.sheet_width,
            sheet_height: params.sheet_height,
            thickness: geometry.thickness(),
            finger_length: geometry.finger_length(),
            gable_angle: geometry.gable_angle(),
            gable_peak_height: geometry.gable_peak_height(),
            roof_panel_left_width: geometry.roof_panel_left_width(),
            roof_panel_right_width: geometry.roof_panel_right_width(),
        })
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&PanelSummary> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Human-readable cutting report with lengths in `system`
    pub fn report(&self, system: MeasurementSystem) -> Vec<String> {
        let unit = system.label();
        let length = |mm: f64| format!("{} {}", format_length(mm, system), unit);

        let mut lines = vec![format!("House Box Cutting Summary ({})", self.style)];
        for panel in &self.panels {
            lines.push(format!(
                "  {}: {} x {}, cut {}",
                panel.label,
                length(panel.width),
                length(panel.height),
                length(panel.cut_length)
            ));
        }
        lines.push(format!("Total cut length: {}", length(self.total_cut_length_mm)));
        lines.push(format!(
            "Layout: {} x {} ({:.1}% efficiency)",
            length(self.layout_width),
            length(self.layout_height),
            self.efficiency
        ));
        lines.push(format!(
            "Sheets: {} of {} x {}",
            self.sheets_needed,
            length(self.sheet_width),
            length(self.sheet_height)
        ));
        lines
    }

    /// Assembly steps for the summarized house
    pub fn assembly_instructions(&self) -> Vec<String> {
        let mut steps = assembly_instructions(self.style);
        steps.push(String::new());
        steps.push(format!("Material thickness: {}mm", self.thickness));
        steps.push(format!("Gable angle: {}°", self.gable_angle));
        steps.push(format!("Finger joint length: {}mm", self.finger_length));
        steps
    }
}

/// Ordered assembly steps for a house style, derived from the mating table
pub fn assembly_instructions(style: HouseStyle) -> Vec<String> {
    let included = style.panels();
    let mut steps = vec!["House Box Assembly Instructions:".to_string(), String::new()];

    let mut joins = Vec::new();
    for &kind in included {
        for &edge in kind.edges() {
            if !matches!(joint_table::polarity(kind, edge), Ok(Polarity::Male)) {
                continue;
            }
            match joint_table::mate(kind, edge) {
                Some(Mate::Edge(other, other_edge)) if included.contains(&other) => {
                    joins.push((
                        kind,
                        format!(
                            "Fit the {} edge of the {} into the {} edge of the {}",
                            describe(edge),
                            kind.label(),
                            describe(other_edge),
                            other.label()
                        ),
                    ));
                }
                Some(Mate::RoofSlot(roof)) if included.contains(&roof) => {
                    joins.push((
                        kind,
                        format!(
                            "Push the {} tab of the {} into its slot in the {}",
                            describe(edge),
                            kind.label(),
                            roof.label()
                        ),
                    ));
                }
                _ => {}
            }
        }
    }

    let sections: [(&str, &[PanelKind]); 4] = [
        (
            "Start with the floor panel and stand the walls on it:",
            &[PanelKind::Floor],
        ),
        (
            "Connect the walls to each other:",
            &[PanelKind::SideWallLeft, PanelKind::SideWallRight],
        ),
        (
            "Join the roof panels along the ridge:",
            &[PanelKind::RoofPanelLeft, PanelKind::RoofPanelRight],
        ),
        (
            "Lower the roof onto the gable walls:",
            &[PanelKind::GableWallFront, PanelKind::GableWallBack],
        ),
    ];

    let mut number = 0;
    for (title, owners) in sections {
        let lines: Vec<&String> = joins
            .iter()
            .filter(|(kind, _)| owners.contains(kind))
            .map(|(_, line)| line)
            .collect();
        if lines.is_empty() {
            continue;
        }
        number += 1;
        steps.push(format!("{}. {}", number, title));
        for line in lines {
            steps.push(format!("   - {}", line));
        }
    }
    number += 1;
    steps.push(format!(
        "{}. Press all joints firmly together for secure assembly",
        number
    ));
    steps
}

fn describe(edge: EdgeName) -> String {
    edge.name().replace('_', " ")
}
