//! House geometry model
//!
//! Derives every panel dimension from the base parameters: length `x`,
//! width `y`, wall height `z`, gable angle `θ`, material thickness `t`,
//! finger length `F` and kerf `k`. Construction validates the inputs and
//! caches the derived quantities; the value is immutable afterwards.

use crate::panel::PanelKind;
use housekit_core::constants::MAX_GABLE_PROPORTION;
use housekit_core::{GeometryError, Point};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseGeometry {
    x: f64,
    y: f64,
    z: f64,
    theta: f64,
    thickness: f64,
    finger_length: f64,
    kerf: f64,

    gable_peak_height: f64,
    total_gable_height: f64,
    roof_panel_length: f64,
    base_roof_width: f64,
    roof_panel_left_width: f64,
    roof_panel_right_width: f64,
}

impl HouseGeometry {
    /// Build and validate a geometry.
    ///
    /// `theta` is the gable angle in degrees. Kerf may be zero.
    pub fn new(
        x: f64,
        y: f64,
        z: f64,
        theta: f64,
        thickness: f64,
        finger_length: f64,
        kerf: f64,
    ) -> Result<Self, GeometryError> {
        for (name, value) in [
            ("length", x),
            ("width", y),
            ("height", z),
            ("thickness", thickness),
            ("finger_length", finger_length),
        ] {
            // NaN fails this comparison as well
            if !(value > 0.0) {
                return Err(GeometryError::NonPositive {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if !(theta > 0.0 && theta < 90.0) {
            return Err(GeometryError::AngleOutOfRange { value: theta });
        }

        if !(kerf >= 0.0) {
            return Err(GeometryError::NonPositive {
                name: "kerf".to_string(),
                value: kerf,
            });
        }
        if kerf >= thickness {
            return Err(GeometryError::KerfTooLarge {
                kerf,
                name: "thickness".to_string(),
                limit: thickness,
            });
        }
        if kerf >= finger_length {
            return Err(GeometryError::KerfTooLarge {
                kerf,
                name: "finger_length".to_string(),
                limit: finger_length,
            });
        }

        let theta_rad = theta.to_radians();
        let gable_peak_height = (y / 2.0) * theta_rad.tan();
        let base_roof_width = (y / 2.0) / theta_rad.cos();

        let geometry = Self {
            x,
            y,
            z,
            theta,
            thickness,
            finger_length,
            kerf,
            gable_peak_height,
            total_gable_height: z + gable_peak_height,
            roof_panel_length: x + 6.0 * thickness,
            base_roof_width,
            // The two roof panels differ by one thickness so they cannot be
            // swapped during assembly.
            roof_panel_left_width: base_roof_width + 4.0 * thickness,
            roof_panel_right_width: base_roof_width + 3.0 * thickness,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    fn validate(&self) -> Result<(), GeometryError> {
        for (name, value) in [
            ("gable_peak_height", self.gable_peak_height),
            ("base_roof_width", self.base_roof_width),
            ("roof_panel_left_width", self.roof_panel_left_width),
            ("roof_panel_right_width", self.roof_panel_right_width),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(GeometryError::NonPositive {
                    name: name.to_string(),
                    value,
                });
            }
        }

        let limit = MAX_GABLE_PROPORTION * self.x.max(self.y).max(self.z);
        if self.total_gable_height > limit {
            return Err(GeometryError::Disproportionate {
                total_gable_height: self.total_gable_height,
                limit,
            });
        }

        let smallest_edge = self.x.min(self.y).min(self.z);
        if self.finger_length > smallest_edge / 3.0 {
            return Err(GeometryError::FingerTooLarge {
                finger_length: self.finger_length,
                smallest_edge,
            });
        }

        Ok(())
    }

    pub fn length(&self) -> f64 {
        self.x
    }

    pub fn width(&self) -> f64 {
        self.y
    }

    pub fn height(&self) -> f64 {
        self.z
    }

    /// Gable angle in degrees
    pub fn gable_angle(&self) -> f64 {
        self.theta
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn finger_length(&self) -> f64 {
        self.finger_length
    }

    pub fn kerf(&self) -> f64 {
        self.kerf
    }

    /// Height of the gable peak above the wall top
    pub fn gable_peak_height(&self) -> f64 {
        self.gable_peak_height
    }

    /// Wall height plus gable peak height
    pub fn total_gable_height(&self) -> f64 {
        self.total_gable_height
    }

    pub fn roof_panel_length(&self) -> f64 {
        self.roof_panel_length
    }

    /// Sloped length from eave to ridge, before the thickness allowance
    pub fn base_roof_width(&self) -> f64 {
        self.base_roof_width
    }

    /// Left roof panel width, kerf included
    pub fn roof_panel_left_width(&self) -> f64 {
        self.roof_panel_left_width + self.kerf
    }

    /// Right roof panel width, kerf included
    pub fn roof_panel_right_width(&self) -> f64 {
        self.roof_panel_right_width + self.kerf
    }

    /// Height of a gable wall at the peak, kerf included
    pub fn gable_wall_height(&self) -> f64 {
        self.total_gable_height + self.kerf
    }

    /// Width of a gable wall: floor width plus a thickness on each side
    pub fn gable_wall_width(&self) -> f64 {
        self.y + self.kerf + 2.0 * self.thickness
    }

    /// Tab depth: grown by kerf so the tab is full size after cutting
    pub fn male_thickness(&self) -> f64 {
        self.thickness + self.kerf
    }

    /// Slot depth: shrunk by kerf so the slot is full size after cutting
    pub fn female_thickness(&self) -> f64 {
        self.thickness - self.kerf
    }

    /// Length of an internal roof slot
    pub fn cutout_length(&self) -> f64 {
        self.finger_length - self.kerf
    }

    /// Width of an internal roof slot
    pub fn cutout_thickness(&self) -> f64 {
        self.thickness - self.kerf
    }

    /// Nominal `(width, height)` of a panel
    pub fn panel_dimensions(&self, kind: PanelKind) -> (f64, f64) {
        let k = self.kerf;
        match kind {
            PanelKind::Floor => (self.x + k, self.y + k),
            PanelKind::SideWallLeft | PanelKind::SideWallRight => (self.x + k, self.z + k),
            PanelKind::GableWallFront | PanelKind::GableWallBack => {
                (self.gable_wall_width(), self.gable_wall_height())
            }
            PanelKind::RoofPanelLeft => (self.roof_panel_length, self.roof_panel_left_width()),
            PanelKind::RoofPanelRight => (self.roof_panel_length, self.roof_panel_right_width()),
        }
    }

    /// Dimensions of all seven panels, in `PanelKind::ALL` order
    pub fn all_panel_dimensions(&self) -> Vec<(PanelKind, (f64, f64))> {
        PanelKind::ALL
            .iter()
            .map(|&kind| (kind, self.panel_dimensions(kind)))
            .collect()
    }

    /// Corner template of a panel, counter-clockwise from `(0, 0)`.
    ///
    /// Edge `i` of the panel runs from corner `i` to corner `i + 1`, in the
    /// order given by `PanelKind::edges`.
    pub fn panel_corners(&self, kind: PanelKind) -> Vec<Point> {
        match kind {
            PanelKind::GableWallFront | PanelKind::GableWallBack => self.gable_profile_points(),
            _ => {
                let (w, h) = self.panel_dimensions(kind);
                vec![
                    Point::new(0.0, 0.0),
                    Point::new(w, 0.0),
                    Point::new(w, h),
                    Point::new(0.0, h),
                ]
            }
        }
    }

    /// House-shaped gable outline: rectangle of wall height plus the peak.
    ///
    /// The vertical sides grow by kerf like the side walls they join.
    pub fn gable_profile_points(&self) -> Vec<Point> {
        let w = self.gable_wall_width();
        let eave = self.z + self.kerf;
        vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, eave),
            Point::new(w / 2.0, self.gable_wall_height()),
            Point::new(0.0, eave),
        ]
    }

    /// Physical length of one panel edge
    pub fn edge_length(&self, kind: PanelKind, index: usize) -> f64 {
        let corners = self.panel_corners(kind);
        let n = corners.len();
        corners[index % n].distance_to(corners[(index + 1) % n])
    }
}
