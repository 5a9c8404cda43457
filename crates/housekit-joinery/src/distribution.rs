//! Multi-joint distribution
//!
//! Spreads an odd number of equal joints along an edge with equal gaps
//! between them and at both ends. Odd counts keep every edge symmetric about
//! its midpoint.

use crate::geometry::HouseGeometry;
use crate::joint_table;
use crate::panel::{EdgeName, PanelFamily, PanelKind};
use housekit_core::constants::{
    MAX_JOINTS_PER_EDGE, MIN_GAP_FACTOR, MIN_JOINT_SPACING_FACTOR, MULTI_JOINT_MIN_EDGE_FACTOR,
};
use housekit_core::FingerJointError;
use serde::Serialize;
use tracing::debug;

/// One joint along an edge, as offsets from the edge start
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Joint {
    pub start: f64,
    pub end: f64,
}

impl Joint {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Diagnostic view of one edge's joints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JointInfo {
    pub joint_count: usize,
    pub positions: Vec<Joint>,
    pub edge_length: f64,
    pub joint_length: f64,
    pub total_coverage: f64,
    pub coverage_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointDistributor {
    finger_length: f64,
    single_joints: bool,
}

impl JointDistributor {
    pub fn new(finger_length: f64, single_joints: bool) -> Self {
        Self {
            finger_length,
            single_joints,
        }
    }

    pub fn finger_length(&self) -> f64 {
        self.finger_length
    }

    pub fn single_joints(&self) -> bool {
        self.single_joints
    }

    /// Initial joint count for an edge, before the gap check
    pub fn joint_count(&self, length: f64) -> usize {
        let f = self.finger_length;
        if self.single_joints || length < MULTI_JOINT_MIN_EDGE_FACTOR * f {
            return 1;
        }

        let spacing = MIN_JOINT_SPACING_FACTOR * f;
        let fit = ((length - f + spacing) / (f + spacing)).floor();
        let fit = if fit.is_finite() && fit > 0.0 {
            fit as usize
        } else {
            1
        };
        snap_odd(fit.min(MAX_JOINTS_PER_EDGE))
    }

    /// Joints for an edge of `length`, shifted by `offset`
    pub fn distribute(&self, length: f64, offset: f64) -> Vec<Joint> {
        let f = self.finger_length;
        if self.single_joints || length < MULTI_JOINT_MIN_EDGE_FACTOR * f {
            return vec![centered(length, f, offset)];
        }

        let mut count = self.joint_count(length);
        let mut gap = (length - count as f64 * f) / (count as f64 + 1.0);
        while gap < MIN_GAP_FACTOR * f && count > 1 {
            debug!(
                "Gap {:.3} below minimum on {:.3}mm edge, reducing joints from {} to {}",
                gap,
                length,
                count,
                count - 2
            );
            count -= 2;
            gap = (length - count as f64 * f) / (count as f64 + 1.0);
        }

        (0..count)
            .map(|i| {
                let start = offset + gap + i as f64 * (f + gap);
                Joint::new(start, start + f)
            })
            .collect()
    }

    /// Joints for a named panel edge, applying the per-edge rules.
    ///
    /// Gable roof edges always get a single joint to line up with the roof
    /// slot. Gable bottoms distribute over the floor's edge and are shifted
    /// by one thickness.
    pub fn distribute_for_edge(
        &self,
        geometry: &HouseGeometry,
        kind: PanelKind,
        edge: EdgeName,
    ) -> Result<Vec<Joint>, FingerJointError> {
        let span = joint_table::joint_span(geometry, kind, edge)?;
        let joints = match (kind.family(), edge) {
            (PanelFamily::GableWall, EdgeName::RoofRight | EdgeName::RoofLeft) => {
                vec![centered(span, self.finger_length, 0.0)]
            }
            (PanelFamily::GableWall, EdgeName::Bottom) => {
                self.distribute(span, geometry.thickness())
            }
            _ => self.distribute(span, 0.0),
        };
        Ok(joints)
    }

    /// Diagnostics for an edge of `length`
    pub fn joint_info(&self, length: f64) -> JointInfo {
        let positions = self.distribute(length, 0.0);
        summarize(positions, length, self.finger_length)
    }

    /// Diagnostics for a named panel edge
    pub fn edge_info(
        &self,
        geometry: &HouseGeometry,
        kind: PanelKind,
        edge: EdgeName,
    ) -> Result<JointInfo, FingerJointError> {
        let span = joint_table::joint_span(geometry, kind, edge)?;
        let positions = self.distribute_for_edge(geometry, kind, edge)?;
        Ok(summarize(positions, span, self.finger_length))
    }
}

fn centered(length: f64, finger_length: f64, offset: f64) -> Joint {
    let start = (length - finger_length) / 2.0 + offset;
    Joint::new(start, start + finger_length)
}

/// Largest odd count not above `count`, at least one
fn snap_odd(count: usize) -> usize {
    match count {
        0 | 1 => 1,
        n if n % 2 == 0 => n - 1,
        n => n,
    }
}

fn summarize(positions: Vec<Joint>, length: f64, finger_length: f64) -> JointInfo {
    let total_coverage = positions.len() as f64 * finger_length;
    let coverage_percentage = if length > 0.0 {
        total_coverage / length * 100.0
    } else {
        0.0
    };
    JointInfo {
        joint_count: positions.len(),
        positions,
        edge_length: length,
        joint_length: finger_length,
        total_coverage,
        coverage_percentage,
    }
}
