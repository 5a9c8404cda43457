//! Design configuration for HouseKit
//!
//! A design file describes one house: its dimensions, the material it is cut
//! from and how the panels are generated. Files are JSON or TOML, picked by
//! extension. All lengths are expressed in the file's measurement system and
//! converted to millimetres by `Config::to_parameters`.
//!
//! A length may also be written as a string with a unit suffix
//! (`"18in"`, `"3mm"`, `"1 1/2"`); it is converted to the file's system on
//! load. Saved files always hold plain numbers.

pub use housekit_core::units::MeasurementSystem;
use crate::error::{SettingsError, SettingsResult};
use housekit_core::constants::{
    DEFAULT_FINGER_LENGTH, DEFAULT_GABLE_ANGLE, DEFAULT_HEIGHT, DEFAULT_KERF, DEFAULT_LENGTH,
    DEFAULT_SHEET_HEIGHT, DEFAULT_SHEET_WIDTH, DEFAULT_THICKNESS, DEFAULT_WIDTH,
};
use housekit_core::units::parse_length;
use housekit_joinery::{HouseParameters, HouseStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// House dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseSettings {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Gable angle in degrees
    pub gable_angle: f64,
}

impl Default for HouseSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gable_angle: DEFAULT_GABLE_ANGLE,
        }
    }
}

/// Stock material and cutter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    pub thickness: f64,
    pub finger_length: f64,
    pub kerf: f64,
    pub sheet_width: f64,
    pub sheet_height: f64,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            finger_length: DEFAULT_FINGER_LENGTH,
            kerf: DEFAULT_KERF,
            sheet_width: DEFAULT_SHEET_WIDTH,
            sheet_height: DEFAULT_SHEET_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub style: HouseStyle,
    pub single_joints: bool,
    /// Gap between packed panels; twice the thickness when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_spacing: Option<f64>,
}

/// Complete design configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    /// Unit of every length in the file
    pub units: MeasurementSystem,
    pub house: HouseSettings,
    pub material: MaterialSettings,
    pub generation: GenerationSettings,
}

/// A length as written in a design file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(f64),
    Text(String),
}

impl RawLength {
    fn resolve(self, key: &str, units: MeasurementSystem) -> SettingsResult<f64> {
        match self {
            RawLength::Number(value) => Ok(value),
            RawLength::Text(text) => parse_length(&text, units)
                .map(|mm| units.from_mm(mm))
                .map_err(|reason| SettingsError::invalid(key, format!("{}: {}", text, reason))),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawHouse {
    length: RawLength,
    width: RawLength,
    height: RawLength,
    gable_angle: f64,
}

impl Default for RawHouse {
    fn default() -> Self {
        let house = HouseSettings::default();
        Self {
            length: RawLength::Number(house.length),
            width: RawLength::Number(house.width),
            height: RawLength::Number(house.height),
            gable_angle: house.gable_angle,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawMaterial {
    thickness: RawLength,
    finger_length: RawLength,
    kerf: RawLength,
    sheet_width: RawLength,
    sheet_height: RawLength,
}

impl Default for RawMaterial {
    fn default() -> Self {
        let material = MaterialSettings::default();
        Self {
            thickness: RawLength::Number(material.thickness),
            finger_length: RawLength::Number(material.finger_length),
            kerf: RawLength::Number(material.kerf),
            sheet_width: RawLength::Number(material.sheet_width),
            sheet_height: RawLength::Number(material.sheet_height),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawGeneration {
    style: HouseStyle,
    single_joints: bool,
    panel_spacing: Option<RawLength>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    units: MeasurementSystem,
    house: RawHouse,
    material: RawMaterial,
    generation: RawGeneration,
}

impl TryFrom<RawConfig> for Config {
    type Error = SettingsError;

    fn try_from(raw: RawConfig) -> SettingsResult<Self> {
        let units = raw.units;
        let house = raw.house;
        let material = raw.material;
        Ok(Self {
            units,
            house: HouseSettings {
                length: house.length.resolve("house.length", units)?,
                width: house.width.resolve("house.width", units)?,
                height: house.height.resolve("house.height", units)?,
                gable_angle: house.gable_angle,
            },
            material: MaterialSettings {
                thickness: material.thickness.resolve("material.thickness", units)?,
                finger_length: material
                    .finger_length
                    .resolve("material.finger_length", units)?,
                kerf: material.kerf.resolve("material.kerf", units)?,
                sheet_width: material.sheet_width.resolve("material.sheet_width", units)?,
                sheet_height: material
                    .sheet_height
                    .resolve("material.sheet_height", units)?,
            },
            generation: GenerationSettings {
                style: raw.generation.style,
                single_joints: raw.generation.single_joints,
                panel_spacing: raw
                    .generation
                    .panel_spacing
                    .map(|spacing| spacing.resolve("generation.panel_spacing", units))
                    .transpose()?,
            },
        })
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/housekit/config.toml`, falling back to the home
    /// directory and then the working directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("housekit")
            .join("config.toml")
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!("Loaded design from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        debug!("Saved design to {}", path.display());
        Ok(())
    }

    /// Check every value the engine would reject outright.
    ///
    /// Cross-field geometry checks (finger length against the smallest edge,
    /// gable proportions) are left to the engine.
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("house.length", self.house.length),
            ("house.width", self.house.width),
            ("house.height", self.house.height),
            ("material.thickness", self.material.thickness),
            ("material.finger_length", self.material.finger_length),
            ("material.sheet_width", self.material.sheet_width),
            ("material.sheet_height", self.material.sheet_height),
        ];
        for (key, value) in positive {
            if !(value > 0.0) {
                return Err(SettingsError::invalid(
                    key,
                    format!("must be > 0 (got {})", value),
                ));
            }
        }

        let angle = self.house.gable_angle;
        if !(angle > 0.0 && angle < 90.0) {
            return Err(SettingsError::invalid(
                "house.gable_angle",
                format!("must be between 0 and 90 degrees (got {})", angle),
            ));
        }

        if !(self.material.kerf >= 0.0) {
            return Err(SettingsError::invalid(
                "material.kerf",
                format!("must not be negative (got {})", self.material.kerf),
            ));
        }

        if let Some(spacing) = self.generation.panel_spacing {
            if !(spacing >= 0.0) {
                return Err(SettingsError::invalid(
                    "generation.panel_spacing",
                    format!("must not be negative (got {})", spacing),
                ));
            }
        }

        Ok(())
    }

    /// Convert to maker parameters, in millimetres
    pub fn to_parameters(&self) -> SettingsResult<HouseParameters> {
        self.validate()?;
        let mm = |value: f64| self.units.to_mm(value);
        Ok(HouseParameters {
            length: mm(self.house.length),
            width: mm(self.house.width),
            height: mm(self.house.height),
            gable_angle: self.house.gable_angle,
            thickness: mm(self.material.thickness),
            finger_length: mm(self.material.finger_length),
            kerf: mm(self.material.kerf),
            single_joints: self.generation.single_joints,
            style: self.generation.style,
            sheet_width: mm(self.material.sheet_width),
            sheet_height: mm(self.material.sheet_height),
            panel_spacing: self.generation.panel_spacing.map(mm),
        })
    }
}
