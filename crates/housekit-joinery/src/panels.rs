//! Panel outline generator
//!
//! Builds the closed outline of each panel from its corner template, the
//! joint table and the direction resolver, then adds the internal slots cut
//! into the roof panels.

use crate::direction;
use crate::distribution::{JointDistributor, JointInfo};
use crate::edge_path::{EdgeJoints, EdgePathGenerator, EdgeSegment};
use crate::geometry::HouseGeometry;
use crate::joint_table;
use crate::panel::{EdgeName, PanelKind, Polarity};
use crate::path::{PanelPath, PathBuilder};
use housekit_core::{FingerJointError, Point};
use serde::Serialize;
use std::collections::BTreeMap;

/// Rectangular slot cut inside a panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cutout {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Cutout {
    pub fn min(&self) -> Point {
        self.center.translate(-self.width / 2.0, -self.height / 2.0)
    }
}

/// A generated panel, positioned at `origin`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelOutline {
    pub kind: PanelKind,
    pub origin: Point,
    /// Corners in absolute coordinates
    pub corners: Vec<Point>,
    /// Outline followed by one closed subpath per cutout
    pub path: PanelPath,
    pub cutouts: Vec<Cutout>,
    pub width: f64,
    pub height: f64,
}

impl PanelOutline {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn to_path_data(&self) -> String {
        self.path.to_path_data()
    }

    /// Outline perimeter plus the perimeter of every cutout
    pub fn cut_length(&self) -> f64 {
        self.path.cut_length()
    }
}

#[derive(Debug, Clone)]
pub struct PanelGenerator {
    geometry: HouseGeometry,
    distributor: JointDistributor,
    edges: EdgePathGenerator,
}

impl PanelGenerator {
    pub fn new(geometry: HouseGeometry, single_joints: bool) -> Self {
        let finger_length = geometry.finger_length();
        Self {
            geometry,
            distributor: JointDistributor::new(finger_length, single_joints),
            edges: EdgePathGenerator::new(finger_length),
        }
    }

    pub fn geometry(&self) -> &HouseGeometry {
        &self.geometry
    }

    pub fn distributor(&self) -> &JointDistributor {
        &self.distributor
    }

    /// Corner template of a panel, relative to its own origin
    pub fn corners(&self, kind: PanelKind) -> Vec<Point> {
        self.geometry.panel_corners(kind)
    }

    /// Generate the full outline of `kind` with its origin at `origin`
    pub fn generate(
        &self,
        kind: PanelKind,
        origin: Point,
    ) -> Result<PanelOutline, FingerJointError> {
        let corners = self.corners(kind);
        let edge_names = kind.edges();
        if corners.len() != edge_names.len() {
            return Err(FingerJointError::CornerMismatch {
                panel: kind.name().to_string(),
                corners: corners.len(),
                edges: edge_names.len(),
            });
        }

        let n = corners.len();
        let mut segments = Vec::with_capacity(n);
        for (index, &edge) in edge_names.iter().enumerate() {
            let start = corners[index];
            let end = corners[(index + 1) % n];
            let polarity = joint_table::polarity(kind, edge)?;
            if !polarity.has_joint() {
                segments.push(EdgeSegment::plain(start, end));
                continue;
            }

            let direction = direction::resolve(kind, edge, index, polarity)?;
            let joints = self
                .distributor
                .distribute_for_edge(&self.geometry, kind, edge)?;
            let depth = match polarity {
                Polarity::Male => self.geometry.male_thickness(),
                _ => self.geometry.female_thickness(),
            };
            segments.push(EdgeSegment::jointed(
                start,
                end,
                EdgeJoints {
                    joints,
                    depth,
                    direction,
                },
            ));
        }

        let mut path = self.edges.outline(&segments);

        let cutouts = self.roof_cutouts(kind);
        if !cutouts.is_empty() {
            let mut builder = PathBuilder::new();
            for cutout in &cutouts {
                builder.rectangle(cutout.min(), cutout.width, cutout.height);
            }
            path.extend(builder.build());
        }

        let (width, height) = self.geometry.panel_dimensions(kind);
        Ok(PanelOutline {
            kind,
            origin,
            corners: corners.iter().map(|c| c.offset_by(origin)).collect(),
            path: path.translated(origin),
            cutouts: cutouts
                .into_iter()
                .map(|c| Cutout {
                    center: c.center.offset_by(origin),
                    ..c
                })
                .collect(),
            width,
            height,
        })
    }

    /// Internal slots receiving the gable roof tabs, relative to the panel
    pub fn roof_cutouts(&self, kind: PanelKind) -> Vec<Cutout> {
        let g = &self.geometry;
        let t = g.thickness();
        let center_y = match kind {
            PanelKind::RoofPanelLeft => g.base_roof_width() / 2.0 + t,
            PanelKind::RoofPanelRight => g.base_roof_width() / 2.0,
            _ => return Vec::new(),
        };

        [2.5 * t, g.roof_panel_length() - 2.5 * t]
            .into_iter()
            .map(|x| Cutout {
                center: Point::new(x, center_y),
                width: g.cutout_thickness(),
                height: g.cutout_length(),
            })
            .collect()
    }

    /// Joint diagnostics for every jointed edge of a panel
    pub fn panel_info(
        &self,
        kind: PanelKind,
    ) -> Result<BTreeMap<EdgeName, JointInfo>, FingerJointError> {
        let mut info = BTreeMap::new();
        for &edge in kind.edges() {
            if joint_table::polarity(kind, edge)?.has_joint() {
                let edge_info = self.distributor.edge_info(&self.geometry, kind, edge)?;
                info.insert(edge, edge_info);
            }
        }
        Ok(info)
    }
}
