//! Scan configuration loading and validation.
//!
//! `ScanSettings` carries everything the controller is constructed with: the
//! identifiers of the two axis devices, the number of points to sample, and
//! the bounding rectangle they are sampled from. Settings are immutable once
//! a controller is built; there is no hot-reconfiguration mid-scan.
//!
//! Settings can be built directly, or loaded from a TOML file through the
//! `config` crate with every field defaulted, so an empty file yields a
//! 5-point scan of the unit square.

use crate::error::{AppResult, ScanError};
use serde::{Deserialize, Serialize};

fn default_num_points() -> u32 {
    5
}

fn default_max() -> f64 {
    1.0
}

/// Immutable configuration for one scan controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Device identifier of the X-axis motor.
    #[serde(default)]
    pub motor_x_id: String,

    /// Device identifier of the Y-axis motor.
    #[serde(default)]
    pub motor_y_id: String,

    /// Number of random scan points.
    #[serde(default = "default_num_points")]
    pub num_points: u32,

    /// Minimum X limit (inclusive).
    #[serde(default)]
    pub x_min: f64,

    /// Maximum X limit (inclusive).
    #[serde(default = "default_max")]
    pub x_max: f64,

    /// Minimum Y limit (inclusive).
    #[serde(default)]
    pub y_min: f64,

    /// Maximum Y limit (inclusive).
    #[serde(default = "default_max")]
    pub y_max: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            motor_x_id: String::new(),
            motor_y_id: String::new(),
            num_points: default_num_points(),
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl ScanSettings {
    /// Load settings from a TOML file, falling back to defaults for any
    /// missing field.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let settings: ScanSettings = config::Config::builder()
            .add_source(config::File::with_name(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check semantic validity of the bounding rectangle.
    ///
    /// Parsing accepts any pair of floats per axis; a rectangle with
    /// `min > max` only shows up here.
    pub fn validate(&self) -> AppResult<()> {
        if self.x_min > self.x_max {
            return Err(ScanError::Configuration(format!(
                "xMin ({}) exceeds xMax ({})",
                self.x_min, self.x_max
            )));
        }
        if self.y_min > self.y_max {
            return Err(ScanError::Configuration(format!(
                "yMin ({}) exceeds yMax ({})",
                self.y_min, self.y_max
            )));
        }
        Ok(())
    }
}
