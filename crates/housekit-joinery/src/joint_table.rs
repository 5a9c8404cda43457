//! Joint configuration table
//!
//! Fixed polarity assignment for every edge of the seven standard panels.
//! The floor is the hub and is male all round; walls are female against the
//! floor and male against each other; the roof panels meet at the ridge with
//! one male and one female edge and receive the gable tabs in internal slots.
//!
//! New panel types extend this table explicitly. Polarity is never derived
//! from panel shape.

use crate::geometry::HouseGeometry;
use crate::panel::{EdgeName, PanelFamily, PanelKind, Polarity};
use housekit_core::FingerJointError;

/// Look up the polarity of one panel edge
pub fn polarity(kind: PanelKind, edge: EdgeName) -> Result<Polarity, FingerJointError> {
    use EdgeName::*;
    use PanelKind::*;
    use Polarity::{Female, Male};

    let polarity = match (kind, edge) {
        (Floor, Bottom | Right | Top | Left) => Male,

        (SideWallLeft | SideWallRight, Bottom) => Female,
        (SideWallLeft | SideWallRight, Right | Left) => Male,
        (SideWallLeft | SideWallRight, Top) => Polarity::None,

        (GableWallFront | GableWallBack, Bottom | Right | Left) => Female,
        (GableWallFront | GableWallBack, RoofRight | RoofLeft) => Male,

        (RoofPanelLeft, GableEdge) => Female,
        (RoofPanelRight, GableEdge) => Male,
        (RoofPanelLeft | RoofPanelRight, Right | Outer | Left) => Polarity::None,

        _ => {
            return Err(FingerJointError::MissingEntry {
                panel: kind.name().to_string(),
                edge: edge.name().to_string(),
            })
        }
    };
    Ok(polarity)
}

/// String-keyed lookup for callers that hold panel and edge names
pub fn polarity_by_name(panel: &str, edge: &str) -> Result<Polarity, FingerJointError> {
    polarity(panel.parse()?, edge.parse()?)
}

/// What a jointed edge interlocks with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mate {
    /// Another panel's edge
    Edge(PanelKind, EdgeName),
    /// An internal slot cut into a roof panel
    RoofSlot(PanelKind),
}

/// Mating partner of a jointed edge; `None` for plain edges
pub fn mate(kind: PanelKind, edge: EdgeName) -> Option<Mate> {
    use EdgeName::*;
    use PanelKind::*;

    let mate = match (kind, edge) {
        (Floor, Bottom) => Mate::Edge(SideWallLeft, Bottom),
        (Floor, Top) => Mate::Edge(SideWallRight, Bottom),
        (Floor, Left) => Mate::Edge(GableWallFront, Bottom),
        (Floor, Right) => Mate::Edge(GableWallBack, Bottom),

        (SideWallLeft, Bottom) => Mate::Edge(Floor, Bottom),
        (SideWallRight, Bottom) => Mate::Edge(Floor, Top),
        (GableWallFront, Bottom) => Mate::Edge(Floor, Left),
        (GableWallBack, Bottom) => Mate::Edge(Floor, Right),

        (SideWallLeft, Right) => Mate::Edge(GableWallFront, Left),
        (SideWallLeft, Left) => Mate::Edge(GableWallBack, Right),
        (SideWallRight, Right) => Mate::Edge(GableWallBack, Left),
        (SideWallRight, Left) => Mate::Edge(GableWallFront, Right),

        (GableWallFront, Left) => Mate::Edge(SideWallLeft, Right),
        (GableWallBack, Right) => Mate::Edge(SideWallLeft, Left),
        (GableWallBack, Left) => Mate::Edge(SideWallRight, Right),
        (GableWallFront, Right) => Mate::Edge(SideWallRight, Left),

        // The back gable faces the other way, so its sides are mirrored
        (GableWallFront, RoofRight) | (GableWallBack, RoofLeft) => Mate::RoofSlot(RoofPanelRight),
        (GableWallFront, RoofLeft) | (GableWallBack, RoofRight) => Mate::RoofSlot(RoofPanelLeft),

        (RoofPanelLeft, GableEdge) => Mate::Edge(RoofPanelRight, GableEdge),
        (RoofPanelRight, GableEdge) => Mate::Edge(RoofPanelLeft, GableEdge),

        _ => return None,
    };
    Some(mate)
}

/// Length the joint distribution runs over for an edge.
///
/// Equal to the physical edge length except on gable bottoms, which are one
/// thickness wider than the floor on each side and distribute over the
/// floor's length instead.
pub fn joint_span(
    geometry: &HouseGeometry,
    kind: PanelKind,
    edge: EdgeName,
) -> Result<f64, FingerJointError> {
    let index = edge_index(kind, edge)?;
    let length = geometry.edge_length(kind, index);
    Ok(match (kind.family(), edge) {
        (PanelFamily::GableWall, EdgeName::Bottom) => length - 2.0 * geometry.thickness(),
        _ => length,
    })
}

/// Position of `edge` in the panel's edge list
pub fn edge_index(kind: PanelKind, edge: EdgeName) -> Result<usize, FingerJointError> {
    kind.edges()
        .iter()
        .position(|&e| e == edge)
        .ok_or_else(|| FingerJointError::MissingEntry {
            panel: kind.name().to_string(),
            edge: edge.name().to_string(),
        })
}

/// Number of internal slots cut into a panel
pub fn internal_cutout_count(kind: PanelKind) -> usize {
    match kind {
        PanelKind::RoofPanelLeft | PanelKind::RoofPanelRight => 2,
        _ => 0,
    }
}
