//! Unit conversion utilities
//!
//! Handles conversion between Metric (mm) and Imperial (inch) systems.
//! Sheet stock is commonly sold in inches (18×12 in) while the engine works
//! in millimetres, so configuration values pass through here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl MeasurementSystem {
    /// Unit label for the system ("mm" or "in")
    pub fn label(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }

    /// Convert a value expressed in this system to millimetres
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Self::Metric => value,
            Self::Imperial => inches_to_mm(value),
        }
    }

    /// Convert millimetres to a value in this system
    pub fn from_mm(self, value_mm: f64) -> f64 {
        match self {
            Self::Metric => value_mm,
            Self::Imperial => mm_to_inches(value_mm),
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.3}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", mm_to_inches(value_mm)),
    }
}

/// Parse length string to millimeters
///
/// An explicit `mm`, `in` or `"` suffix overrides `system`. Imperial values
/// may be written as mixed fractions ("1 1/2").
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system when no suffix is present
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let (number, system) = if let Some(rest) = input.strip_suffix("mm") {
        (rest.trim(), MeasurementSystem::Metric)
    } else if let Some(rest) = input.strip_suffix("in") {
        (rest.trim(), MeasurementSystem::Imperial)
    } else if let Some(rest) = input.strip_suffix('"') {
        (rest.trim(), MeasurementSystem::Imperial)
    } else {
        (input, system)
    };

    match system {
        MeasurementSystem::Metric => number.parse::<f64>().map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if number.contains('/') {
                let mut total_inches = 0.0;
                let mut sign = 1.0;

                for part in number.split_whitespace() {
                    let part = match part.strip_prefix('-') {
                        Some(rest) => {
                            sign = -1.0;
                            rest
                        }
                        None => part,
                    };
                    if part.contains('/') {
                        let frac_parts: Vec<&str> = part.split('/').collect();
                        if frac_parts.len() != 2 {
                            return Err("Invalid fraction format".to_string());
                        }
                        let num = frac_parts[0]
                            .parse::<f64>()
                            .map_err(|_| "Invalid numerator".to_string())?;
                        let den = frac_parts[1]
                            .parse::<f64>()
                            .map_err(|_| "Invalid denominator".to_string())?;
                        if den == 0.0 {
                            return Err("Division by zero".to_string());
                        }
                        total_inches += num / den;
                    } else {
                        total_inches += part
                            .parse::<f64>()
                            .map_err(|_| "Invalid number part".to_string())?;
                    }
                }
                Ok(inches_to_mm(sign * total_inches))
            } else {
                let inches = number.parse::<f64>().map_err(|e| e.to_string())?;
                Ok(inches_to_mm(inches))
            }
        }
    }
}
