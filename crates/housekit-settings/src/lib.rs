//! HouseKit Settings Crate
//!
//! Loads and saves house designs as JSON or TOML files and turns them into
//! `HouseParameters` for the maker.

pub mod config;
pub mod error;

pub use config::{Config, GenerationSettings, HouseSettings, MaterialSettings};
pub use error::{SettingsError, SettingsResult};
