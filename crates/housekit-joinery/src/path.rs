//! Typed path instructions
//!
//! Outlines are accumulated as `PathCommand`s and only formatted to text at
//! the boundary, in `PanelPath::to_path_data`.

use housekit_core::Point;
use serde::Serialize;
use std::fmt::Write;

/// Points closer than this are treated as the same point
const POINT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadraticTo { control: Point, to: Point },
    Close,
}

/// Ordered path instructions; may hold several closed subpaths
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PanelPath {
    commands: Vec<PathCommand>,
}

impl PanelPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// Append every subpath of `other`
    pub fn extend(&mut self, other: PanelPath) {
        self.commands.extend(other.commands);
    }

    /// Shift every point by `origin`
    pub fn translated(&self, origin: Point) -> PanelPath {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p.offset_by(origin)),
                PathCommand::LineTo(p) => PathCommand::LineTo(p.offset_by(origin)),
                PathCommand::QuadraticTo { control, to } => PathCommand::QuadraticTo {
                    control: control.offset_by(origin),
                    to: to.offset_by(origin),
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        PanelPath { commands }
    }

    /// Every vertex of the path, including quadratic endpoints
    pub fn points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                PathCommand::QuadraticTo { to, .. } => Some(to),
                PathCommand::Close => None,
            })
            .collect()
    }

    /// Axis-aligned bounds as `(min, max)`
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let points = self.points();
        let first = *points.first()?;
        Some(points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// Total length of all segments, closing segments included.
    ///
    /// Quadratic segments are measured by their chord.
    pub fn cut_length(&self) -> f64 {
        let mut total = 0.0;
        let mut start = Point::ORIGIN;
        let mut current = Point::ORIGIN;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    start = p;
                    current = p;
                }
                PathCommand::LineTo(p) | PathCommand::QuadraticTo { to: p, .. } => {
                    total += current.distance_to(p);
                    current = p;
                }
                PathCommand::Close => {
                    total += current.distance_to(start);
                    current = start;
                }
            }
        }
        total
    }

    /// Path data string: `M x,y L x,y ... Z`, 3 decimal places
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing to a String cannot fail
            let _ = match command {
                PathCommand::MoveTo(p) => write!(out, "M {}", p),
                PathCommand::LineTo(p) => write!(out, "L {}", p),
                PathCommand::QuadraticTo { control, to } => write!(out, "Q {} {}", control, to),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}

/// Accumulates path commands, dropping zero-length segments
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current: Option<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pen position, if a subpath is open
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self.current = Some(point);
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        match self.current {
            Some(last) if last.approx_eq(point, POINT_EPSILON) => {}
            Some(_) => {
                self.commands.push(PathCommand::LineTo(point));
                self.current = Some(point);
            }
            None => {
                self.move_to(point);
            }
        }
        self
    }

    pub fn quadratic_to(&mut self, control: Point, to: Point) -> &mut Self {
        if self.current.is_none() {
            self.move_to(control);
        }
        self.commands.push(PathCommand::QuadraticTo { control, to });
        self.current = Some(to);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self.current = None;
        self
    }

    /// Closed axis-aligned rectangle as its own subpath
    pub fn rectangle(&mut self, min: Point, width: f64, height: f64) -> &mut Self {
        self.move_to(min)
            .line_to(min.translate(width, 0.0))
            .line_to(min.translate(width, height))
            .line_to(min.translate(0.0, height))
            .close()
    }

    pub fn build(self) -> PanelPath {
        PanelPath {
            commands: self.commands,
        }
    }
}
