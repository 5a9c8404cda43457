//! # HouseKit Core
//!
//! Core types and utilities shared by the HouseKit crates.
//! Provides the 2D point type, the error taxonomy used by the joint and
//! layout engine, unit conversion, and design defaults.

pub mod constants;
pub mod error;
pub mod types;
pub mod units;

pub use error::{Error, FingerJointError, GeometryError, Result};
pub use types::Point;
pub use units::{format_length, inches_to_mm, mm_to_inches, parse_length, MeasurementSystem};
