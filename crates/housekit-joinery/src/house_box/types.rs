//! Type definitions for the House Box Maker

use crate::layout::SheetSettings;
use crate::panel::PanelKind;
use housekit_core::constants::{
    DEFAULT_FINGER_LENGTH, DEFAULT_GABLE_ANGLE, DEFAULT_HEIGHT, DEFAULT_KERF, DEFAULT_LENGTH,
    DEFAULT_SHEET_HEIGHT, DEFAULT_SHEET_WIDTH, DEFAULT_THICKNESS, DEFAULT_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseStyle {
    #[default]
    BasicHouse = 0,
    HouseNoRoof = 1,
    WallsOnly = 2,
}

impl From<i32> for HouseStyle {
    fn from(value: i32) -> Self {
        match value {
            1 => HouseStyle::HouseNoRoof,
            2 => HouseStyle::WallsOnly,
            _ => HouseStyle::BasicHouse,
        }
    }
}

impl HouseStyle {
    /// Panels cut for this style
    pub fn panels(self) -> &'static [PanelKind] {
        const WALLS: [PanelKind; 4] = [
            PanelKind::SideWallLeft,
            PanelKind::SideWallRight,
            PanelKind::GableWallFront,
            PanelKind::GableWallBack,
        ];
        const NO_ROOF: [PanelKind; 5] = [
            PanelKind::Floor,
            PanelKind::SideWallLeft,
            PanelKind::SideWallRight,
            PanelKind::GableWallFront,
            PanelKind::GableWallBack,
        ];
        match self {
            HouseStyle::BasicHouse => &PanelKind::ALL,
            HouseStyle::HouseNoRoof => &NO_ROOF,
            HouseStyle::WallsOnly => &WALLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HouseStyle::BasicHouse => "basic_house",
            HouseStyle::HouseNoRoof => "house_no_roof",
            HouseStyle::WallsOnly => "walls_only",
        }
    }
}

impl fmt::Display for HouseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "basic_house" | "basic" => Ok(HouseStyle::BasicHouse),
            "house_no_roof" | "no_roof" => Ok(HouseStyle::HouseNoRoof),
            "walls_only" | "walls" => Ok(HouseStyle::WallsOnly),
            _ => Err(format!("Unknown house style: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseParameters {
    /// House length (x) in mm
    pub length: f64,
    /// House width (y) in mm
    pub width: f64,
    /// Wall height (z) in mm
    pub height: f64,
    /// Gable angle in degrees
    pub gable_angle: f64,
    pub thickness: f64,
    pub finger_length: f64,
    pub kerf: f64,
    /// Force a single centred joint on every edge
    pub single_joints: bool,
    pub style: HouseStyle,
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Gap between panels; `None` means twice the thickness
    pub panel_spacing: Option<f64>,
}

impl Default for HouseParameters {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gable_angle: DEFAULT_GABLE_ANGLE,
            thickness: DEFAULT_THICKNESS,
            finger_length: DEFAULT_FINGER_LENGTH,
            kerf: DEFAULT_KERF,
            single_joints: false,
            style: HouseStyle::BasicHouse,
            sheet_width: DEFAULT_SHEET_WIDTH,
            sheet_height: DEFAULT_SHEET_HEIGHT,
            panel_spacing: None,
        }
    }
}

impl HouseParameters {
    pub fn spacing(&self) -> f64 {
        self.panel_spacing.unwrap_or(2.0 * self.thickness)
    }

    pub fn sheet(&self) -> SheetSettings {
        SheetSettings {
            width: self.sheet_width,
            height: self.sheet_height,
            spacing: self.spacing(),
        }
    }
}
