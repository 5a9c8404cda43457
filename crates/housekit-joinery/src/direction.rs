//! Joint direction resolver
//!
//! Decides which perpendicular of an edge a joint extrudes along. Each panel
//! family has one outward sign; males follow it and females take the
//! opposite, since a slot is material removed from inside the panel.
//!
//! A direction of `+1` selects the counter-clockwise perpendicular
//! `(-uy, ux)` of the unit edge vector, `-1` the clockwise one `(uy, -ux)`.
//! Corners are laid out counter-clockwise in a y-up frame, so the clockwise
//! perpendicular points away from the panel body.

use crate::panel::{EdgeName, PanelFamily, PanelKind, Polarity};
use housekit_core::FingerJointError;

/// Outward perpendicular sign for a panel family
pub fn outward_sign(family: PanelFamily) -> i8 {
    match family {
        PanelFamily::Floor => -1,
        PanelFamily::SideWall => -1,
        PanelFamily::GableWall => -1,
        PanelFamily::RoofPanel => -1,
    }
}

/// Resolve the extrusion direction for a jointed edge.
///
/// `index` is the edge's position in the panel's corner list. It must agree
/// with `edge`; a mismatch is reported as a missing table entry.
pub fn resolve(
    kind: PanelKind,
    edge: EdgeName,
    index: usize,
    polarity: Polarity,
) -> Result<i8, FingerJointError> {
    if kind.edges().get(index) != Some(&edge) {
        return Err(FingerJointError::MissingEntry {
            panel: kind.name().to_string(),
            edge: edge.name().to_string(),
        });
    }

    let outward = outward_sign(kind.family());
    match polarity {
        Polarity::Male => Ok(outward),
        Polarity::Female => Ok(-outward),
        Polarity::None => Err(FingerJointError::NoJointDirection {
            panel: kind.name().to_string(),
            edge: edge.name().to_string(),
        }),
    }
}
