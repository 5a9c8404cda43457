//! Panel and edge identities
//!
//! The set of panels and the edges each panel family owns are closed and
//! known up front, so both are plain enums. Edge order matches the order of
//! the family's corner template: edge `i` runs from corner `i` to corner
//! `i + 1` (wrapping).

use housekit_core::FingerJointError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Panel family: determines corner template, edge names and outward sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelFamily {
    Floor,
    SideWall,
    GableWall,
    RoofPanel,
}

impl PanelFamily {
    /// Ordered edge names for this family
    pub fn edges(self) -> &'static [EdgeName] {
        match self {
            PanelFamily::Floor | PanelFamily::SideWall => &RECT_EDGES,
            PanelFamily::GableWall => &GABLE_EDGES,
            PanelFamily::RoofPanel => &ROOF_EDGES,
        }
    }
}

const RECT_EDGES: [EdgeName; 4] = [
    EdgeName::Bottom,
    EdgeName::Right,
    EdgeName::Top,
    EdgeName::Left,
];

const GABLE_EDGES: [EdgeName; 5] = [
    EdgeName::Bottom,
    EdgeName::Right,
    EdgeName::RoofRight,
    EdgeName::RoofLeft,
    EdgeName::Left,
];

const ROOF_EDGES: [EdgeName; 4] = [
    EdgeName::GableEdge,
    EdgeName::Right,
    EdgeName::Outer,
    EdgeName::Left,
];

/// The seven standard panels of a gable house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Floor,
    SideWallLeft,
    SideWallRight,
    GableWallFront,
    GableWallBack,
    RoofPanelLeft,
    RoofPanelRight,
}

impl PanelKind {
    pub const ALL: [PanelKind; 7] = [
        PanelKind::Floor,
        PanelKind::SideWallLeft,
        PanelKind::SideWallRight,
        PanelKind::GableWallFront,
        PanelKind::GableWallBack,
        PanelKind::RoofPanelLeft,
        PanelKind::RoofPanelRight,
    ];

    pub fn family(self) -> PanelFamily {
        match self {
            PanelKind::Floor => PanelFamily::Floor,
            PanelKind::SideWallLeft | PanelKind::SideWallRight => PanelFamily::SideWall,
            PanelKind::GableWallFront | PanelKind::GableWallBack => PanelFamily::GableWall,
            PanelKind::RoofPanelLeft | PanelKind::RoofPanelRight => PanelFamily::RoofPanel,
        }
    }

    pub fn edges(self) -> &'static [EdgeName] {
        self.family().edges()
    }

    pub fn name(self) -> &'static str {
        match self {
            PanelKind::Floor => "floor",
            PanelKind::SideWallLeft => "side_wall_left",
            PanelKind::SideWallRight => "side_wall_right",
            PanelKind::GableWallFront => "gable_wall_front",
            PanelKind::GableWallBack => "gable_wall_back",
            PanelKind::RoofPanelLeft => "roof_panel_left",
            PanelKind::RoofPanelRight => "roof_panel_right",
        }
    }

    /// Human-readable label ("Gable Wall Front")
    pub fn label(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelKind {
    type Err = FingerJointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FingerJointError::UnknownPanel(s.to_string()))
    }
}

/// Named panel edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeName {
    Bottom,
    Right,
    Top,
    Left,
    RoofRight,
    RoofLeft,
    GableEdge,
    Outer,
}

impl EdgeName {
    pub fn name(self) -> &'static str {
        match self {
            EdgeName::Bottom => "bottom",
            EdgeName::Right => "right",
            EdgeName::Top => "top",
            EdgeName::Left => "left",
            EdgeName::RoofRight => "roof_right",
            EdgeName::RoofLeft => "roof_left",
            EdgeName::GableEdge => "gable_edge",
            EdgeName::Outer => "outer",
        }
    }
}

impl fmt::Display for EdgeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgeName {
    type Err = FingerJointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom" => Ok(EdgeName::Bottom),
            "right" => Ok(EdgeName::Right),
            "top" => Ok(EdgeName::Top),
            "left" => Ok(EdgeName::Left),
            "roof_right" => Ok(EdgeName::RoofRight),
            "roof_left" => Ok(EdgeName::RoofLeft),
            "gable_edge" => Ok(EdgeName::GableEdge),
            "outer" => Ok(EdgeName::Outer),
            _ => Err(FingerJointError::UnknownEdge(s.to_string())),
        }
    }
}

/// Joint polarity of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Protruding tab
    Male,
    /// Recessed slot
    Female,
    /// Plain edge
    None,
}

impl Polarity {
    pub fn has_joint(self) -> bool {
        !matches!(self, Polarity::None)
    }

    pub fn is_male(self) -> bool {
        matches!(self, Polarity::Male)
    }
}
