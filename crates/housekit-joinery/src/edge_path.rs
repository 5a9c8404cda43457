//! Edge path generator
//!
//! Expands the corner list of a panel into a closed outline, replacing
//! jointed edges with their tab or slot profile.

use crate::distribution::Joint;
use crate::path::{PanelPath, PathBuilder};
use housekit_core::constants::MIN_JOINT_EDGE_FACTOR;
use housekit_core::Point;
use nalgebra::Vector2;
use tracing::debug;

/// Joint profile for one edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeJoints {
    /// Joint offsets measured from the edge start
    pub joints: Vec<Joint>,
    /// Kerf-adjusted extrusion depth
    pub depth: f64,
    /// `+1` for the counter-clockwise perpendicular, `-1` for clockwise
    pub direction: i8,
}

/// One edge of a panel outline
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSegment {
    pub start: Point,
    pub end: Point,
    pub joints: Option<EdgeJoints>,
}

impl EdgeSegment {
    pub fn plain(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            joints: None,
        }
    }

    pub fn jointed(start: Point, end: Point, joints: EdgeJoints) -> Self {
        Self {
            start,
            end,
            joints: Some(joints),
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EdgePathGenerator {
    finger_length: f64,
}

impl EdgePathGenerator {
    pub fn new(finger_length: f64) -> Self {
        Self { finger_length }
    }

    /// Closed outline through every edge, starting at the first edge's start
    pub fn outline(&self, edges: &[EdgeSegment]) -> PanelPath {
        let mut builder = PathBuilder::new();
        if let Some(first) = edges.first() {
            builder.move_to(first.start);
            for edge in edges {
                self.append_edge(&mut builder, edge);
            }
            builder.close();
        }
        builder.build()
    }

    /// Draw one edge from the builder's current point to `edge.end`
    pub fn append_edge(&self, builder: &mut PathBuilder, edge: &EdgeSegment) {
        let Some(profile) = &edge.joints else {
            builder.line_to(edge.end);
            return;
        };

        let length = edge.length();
        if length < MIN_JOINT_EDGE_FACTOR * self.finger_length {
            debug!(
                "Edge of {:.3}mm too short for a {:.3}mm joint, drawing straight",
                length, self.finger_length
            );
            builder.line_to(edge.end);
            return;
        }

        let start = Vector2::new(edge.start.x, edge.start.y);
        let end = Vector2::new(edge.end.x, edge.end.y);
        let tangent = (end - start) / length;
        let normal = Vector2::new(-tangent.y, tangent.x) * f64::from(profile.direction);
        let extrusion = normal * profile.depth;

        let at = |v: Vector2<f64>| Point::new(v.x, v.y);

        for joint in &profile.joints {
            let joint_start = start + tangent * joint.start;
            let joint_end = start + tangent * joint.end;
            builder
                .line_to(at(joint_start))
                .line_to(at(joint_start + extrusion))
                .line_to(at(joint_end + extrusion))
                .line_to(at(joint_end));
        }
        builder.line_to(edge.end);
    }
}
