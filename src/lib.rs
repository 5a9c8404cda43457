//! # HouseKit
//!
//! Laser-cut house box generator. Turns a handful of dimensions into flat,
//! finger-jointed panel outlines for a gable-roofed house and nests them on
//! a material sheet.
//!
//! ## Architecture
//!
//! HouseKit is organized as a workspace with multiple crates:
//!
//! 1. **housekit-core** - Point type, error taxonomy, units, defaults
//! 2. **housekit-joinery** - Joint engine, panel outlines, layout packer
//! 3. **housekit-settings** - Design files (JSON/TOML) and validation
//! 4. **housekit** - This facade crate
//!
//! ## Example
//!
//! ```no_run
//! use housekit::{HouseBoxMaker, HouseParameters};
//!
//! let mut maker = HouseBoxMaker::new(HouseParameters::default())?;
//! maker.generate()?;
//! for (kind, d) in maker.to_path_data() {
//!     println!("{}: {}", kind, d);
//! }
//! # Ok::<(), housekit::Error>(())
//! ```

pub use housekit_core::{
    format_length, inches_to_mm, mm_to_inches, parse_length, Error, FingerJointError,
    GeometryError, MeasurementSystem, Point, Result,
};

pub use housekit_joinery::{
    assembly_instructions, CuttingSummary, EdgeName, HouseBoxMaker, HouseGeometry,
    HouseParameters, HouseStyle, JointDistributor, JointInfo, LayoutItem, LayoutPacker,
    LayoutResult, PanelGenerator, PanelKind, PanelOutline, PanelPath, Placement, Polarity,
    SheetSettings,
};

pub use housekit_settings::{
    Config, GenerationSettings, HouseSettings, MaterialSettings, SettingsError, SettingsResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Console output, `RUST_LOG` support, INFO by default. Fails if a global
/// subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
