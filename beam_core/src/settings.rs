//! # Analysis Settings
//!
//! Tunables shared by every calculation request. Settings are plain data, so a
//! caller can keep one instance and pass it to any number of independent
//! requests.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "resolution": 500,
//!   "equilibrium_tolerance": 1e-6
//! }
//! ```
//!
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::calculations::sampler::DEFAULT_RESOLUTION;
use crate::errors::{CalcError, CalcResult};

/// Default relative tolerance for the `R1 + R2 == P` check
pub const DEFAULT_EQUILIBRIUM_TOLERANCE: f64 = 1e-6;

/// Settings applied to a beam response calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of evenly spaced sample points along the beam (both ends included)
    pub resolution: usize,

    /// Relative tolerance used when checking static equilibrium of the reactions
    pub equilibrium_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            resolution: DEFAULT_RESOLUTION,
            equilibrium_tolerance: DEFAULT_EQUILIBRIUM_TOLERANCE,
        }
    }
}

impl AnalysisSettings {
    /// Parse settings from a JSON document and validate them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::settings::AnalysisSettings;
    ///
    /// let settings = AnalysisSettings::from_json(r#"{ "resolution": 101 }"#).unwrap();
    /// assert_eq!(settings.resolution, 101);
    /// assert_eq!(settings.equilibrium_tolerance, 1e-6);
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Override the sample resolution
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.resolution < 2 {
            return Err(CalcError::invalid_input(
                "resolution",
                self.resolution.to_string(),
                "At least two sample points are required",
            ));
        }
        if !(self.equilibrium_tolerance.is_finite() && self.equilibrium_tolerance > 0.0) {
            return Err(CalcError::invalid_input(
                "equilibrium_tolerance",
                self.equilibrium_tolerance.to_string(),
                "Tolerance must be a positive number",
            ));
        }
        Ok(())
    }
}
