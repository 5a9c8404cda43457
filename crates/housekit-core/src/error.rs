//! Error handling for HouseKit
//!
//! Provides the error types for the joint and layout engine:
//! - Geometry errors (dimensions, proportions, sheet constraints)
//! - Finger joint errors (joint table completeness, polarity)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when input dimensions or derived quantities are unusable, or when
/// a panel cannot be placed on the sheet. Always fatal; the payload carries
/// the offending values so the caller can adjust its parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimension that must be strictly positive was not
    #[error("{name} must be positive (got {value})")]
    NonPositive {
        /// The dimension name.
        name: String,
        /// The rejected value.
        value: f64,
    },

    /// Gable angle outside the open interval (0, 90) degrees
    #[error("Gable angle must be between 0 and 90 degrees (got {value})")]
    AngleOutOfRange {
        /// The rejected angle in degrees.
        value: f64,
    },

    /// Finger joints cannot fit on the smallest house edge
    #[error("Finger joints too large ({finger_length}) for smallest edge ({smallest_edge})")]
    FingerTooLarge {
        /// The configured finger length.
        finger_length: f64,
        /// The smallest of length, width and height.
        smallest_edge: f64,
    },

    /// Kerf would consume a whole slot or finger
    #[error("Kerf ({kerf}) must be smaller than {name} ({limit})")]
    KerfTooLarge {
        /// The configured kerf.
        kerf: f64,
        /// Which dimension the kerf exceeds.
        name: String,
        /// The value of that dimension.
        limit: f64,
    },

    /// Gable height is absurd relative to the base
    #[error(
        "House geometry is unreasonably tall: gable height {total_gable_height:.1} exceeds {limit:.1}"
    )]
    Disproportionate {
        /// Wall height plus gable peak height.
        total_gable_height: f64,
        /// The proportion limit that was exceeded.
        limit: f64,
    },

    /// A single panel is wider than the sheet
    #[error("Panel {panel} width ({width:.1}mm) exceeds material width ({sheet_width:.1}mm)")]
    PanelTooWide {
        /// The panel name.
        panel: String,
        /// The panel width.
        width: f64,
        /// The sheet width constraint.
        sheet_width: f64,
    },

    /// The packed layout ended up wider than the sheet
    #[error("Layout width ({width:.1}mm) exceeds material width ({sheet_width:.1}mm)")]
    LayoutTooWide {
        /// The layout bounding width.
        width: f64,
        /// The sheet width constraint.
        sheet_width: f64,
    },
}

/// Finger joint error type
///
/// Configuration errors: a request that the joint table cannot answer.
/// These indicate a programming or configuration defect and are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FingerJointError {
    /// The joint table has no entry for this panel/edge pair
    #[error("No joint configuration for edge '{edge}' of panel '{panel}'")]
    MissingEntry {
        /// The panel name.
        panel: String,
        /// The edge name.
        edge: String,
    },

    /// Unknown panel name
    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    /// Unknown edge name
    #[error("Unknown edge: {0}")]
    UnknownEdge(String),

    /// A joint direction was requested for an edge that carries no joint
    #[error("Invalid joint polarity for edge '{edge}' of panel '{panel}': edge has no joint")]
    NoJointDirection {
        /// The panel name.
        panel: String,
        /// The edge name.
        edge: String,
    },

    /// Corner list and edge list disagree
    #[error("Panel '{panel}' has {corners} corners but {edges} edges")]
    CornerMismatch {
        /// The panel name.
        panel: String,
        /// Number of corners supplied.
        corners: usize,
        /// Number of edges in the panel family.
        edges: usize,
    },
}

/// Main error type for HouseKit
///
/// A unified error type that can represent any error from the engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Finger joint error
    #[error("Finger joint error: {0}")]
    FingerJoint(#[from] FingerJointError),

    /// Invalid design configuration
    #[error("Invalid configuration: {reason}")]
    Config {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a finger joint error
    pub fn is_finger_joint_error(&self) -> bool {
        matches!(self, Error::FingerJoint(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
