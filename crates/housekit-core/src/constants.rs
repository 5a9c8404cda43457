//! Design defaults and engine tuning constants.

/// Default house length (x) in mm
pub const DEFAULT_LENGTH: f64 = 80.0;
/// Default house width (y) in mm
pub const DEFAULT_WIDTH: f64 = 60.0;
/// Default wall height (z) in mm
pub const DEFAULT_HEIGHT: f64 = 70.0;
/// Default gable angle in degrees
pub const DEFAULT_GABLE_ANGLE: f64 = 35.0;
/// Default material thickness in mm
pub const DEFAULT_THICKNESS: f64 = 3.0;
/// Default finger joint length in mm
pub const DEFAULT_FINGER_LENGTH: f64 = 10.0;
/// Default laser kerf in mm
pub const DEFAULT_KERF: f64 = 0.0;

/// Default sheet width: 18 inches
pub const DEFAULT_SHEET_WIDTH: f64 = 457.2;
/// Default sheet height: 12 inches
pub const DEFAULT_SHEET_HEIGHT: f64 = 304.8;

/// Smallest gap the packer will leave between two panels
pub const MIN_PANEL_SPACING: f64 = 2.0;

/// Decimal places used when formatting path coordinates
pub const COORDINATE_PRECISION: usize = 3;

/// Maximum joints placed on a single edge
pub const MAX_JOINTS_PER_EDGE: usize = 7;
/// Minimum spacing between adjacent joints, as a multiple of finger length
pub const MIN_JOINT_SPACING_FACTOR: f64 = 0.8;
/// Edges shorter than this multiple of finger length get a single joint
pub const MULTI_JOINT_MIN_EDGE_FACTOR: f64 = 2.5;
/// Smallest acceptable gap between joints, as a multiple of finger length
pub const MIN_GAP_FACTOR: f64 = 0.3;
/// Edges shorter than this multiple of finger length are drawn straight
pub const MIN_JOINT_EDGE_FACTOR: f64 = 1.5;

/// Gable height limit as a multiple of the largest base dimension
pub const MAX_GABLE_PROPORTION: f64 = 5.0;
