//! # Beam and Load Definitions
//!
//! Input data for a single calculation request: the beam ([`BeamSpec`]) and
//! the load applied to it ([`LoadSpec`]). Both validate themselves before the
//! engine touches them.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "beam": { "length_m": 6.0, "load_type": "PointAtPosition" },
//!   "load": { "magnitude_kn": 12.0, "position_m": 2.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// The three supported load conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// Single point load at mid-span
    CenterPoint,
    /// Single point load at a caller-supplied distance from the left support
    PointAtPosition,
    /// Total load spread uniformly over the full span
    UniformDistributed,
}

impl LoadType {
    /// All load types, in menu order
    pub const ALL: [LoadType; 3] = [
        LoadType::CenterPoint,
        LoadType::PointAtPosition,
        LoadType::UniformDistributed,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadType::CenterPoint => "Center Point Load",
            LoadType::PointAtPosition => "Point Load at Position",
            LoadType::UniformDistributed => "Uniformly Distributed Load",
        }
    }

    /// Where the maximum moment occurs, phrased for a summary line
    pub fn max_moment_location_label(&self) -> &'static str {
        match self {
            LoadType::CenterPoint => "at center",
            LoadType::PointAtPosition => "at load point",
            LoadType::UniformDistributed => "at mid-span",
        }
    }

    /// Whether this load type needs a load position
    pub fn requires_position(&self) -> bool {
        matches!(self, LoadType::PointAtPosition)
    }
}

/// A simply supported (pin-roller) beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// Span between supports in metres
    pub length_m: f64,

    /// Load condition applied to the beam
    pub load_type: LoadType,
}

impl BeamSpec {
    /// Create a beam spec
    pub fn new(length_m: f64, load_type: LoadType) -> Self {
        BeamSpec {
            length_m,
            load_type,
        }
    }

    /// Validate the beam geometry.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_m", self.length_m, "Beam length must be positive")
    }
}

/// The load applied to a beam.
///
/// `magnitude_kn` is the point load for the point variants and the total
/// load for a uniformly distributed load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSpec {
    /// Load magnitude in kN (total load for a UDL)
    pub magnitude_kn: f64,

    /// Distance from the left support in metres (point at position only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_m: Option<f64>,
}

impl LoadSpec {
    /// A load with no position (center point or UDL)
    pub fn new(magnitude_kn: f64) -> Self {
        LoadSpec {
            magnitude_kn,
            position_m: None,
        }
    }

    /// A point load at `position_m` from the left support
    pub fn at(magnitude_kn: f64, position_m: f64) -> Self {
        LoadSpec {
            magnitude_kn,
            position_m: Some(position_m),
        }
    }

    /// Validate the load against the beam it is applied to.
    ///
    /// The position is only checked for [`LoadType::PointAtPosition`]; other
    /// load types ignore it.
    pub fn validate(&self, beam: &BeamSpec) -> CalcResult<()> {
        require_positive(
            "magnitude_kn",
            self.magnitude_kn,
            "Load magnitude must be positive",
        )?;

        if beam.load_type.requires_position() {
            let position = self.position_m.ok_or_else(|| {
                CalcError::invalid_input(
                    "position_m",
                    "none",
                    "A load position is required for a point load at an arbitrary position",
                )
            })?;
            if !(position.is_finite() && position > 0.0 && position < beam.length_m) {
                return Err(CalcError::invalid_input(
                    "position_m",
                    position.to_string(),
                    format!(
                        "Load position must lie strictly between the supports (0 < a < {})",
                        beam.length_m
                    ),
                ));
            }
        }
        Ok(())
    }
}

fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        let beam = BeamSpec::new(5.0, LoadType::PointAtPosition);
        assert!(beam.validate().is_ok());
        assert!(LoadSpec::at(10.0, 2.5).validate(&beam).is_ok());
    }

    #[test]
    fn test_invalid_length() {
        for length in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = BeamSpec::new(length, LoadType::CenterPoint).validate().unwrap_err();
            assert_eq!(err.field(), Some("length_m"));
        }
    }

    #[test]
    fn test_invalid_magnitude() {
        let beam = BeamSpec::new(5.0, LoadType::UniformDistributed);
        let err = LoadSpec::new(-5.0).validate(&beam).unwrap_err();
        assert_eq!(err.field(), Some("magnitude_kn"));
    }

    #[test]
    fn test_position_out_of_range() {
        let beam = BeamSpec::new(5.0, LoadType::PointAtPosition);
        for position in [0.0, 5.0, 6.0, -1.0] {
            let err = LoadSpec::at(10.0, position).validate(&beam).unwrap_err();
            assert_eq!(err.field(), Some("position_m"));
        }
    }

    #[test]
    fn test_missing_position() {
        let beam = BeamSpec::new(5.0, LoadType::PointAtPosition);
        let err = LoadSpec::new(10.0).validate(&beam).unwrap_err();
        assert_eq!(err.field(), Some("position_m"));
    }

    #[test]
    fn test_position_ignored_for_symmetric_loads() {
        let beam = BeamSpec::new(5.0, LoadType::CenterPoint);
        assert!(LoadSpec::at(10.0, 42.0).validate(&beam).is_ok());
    }

    #[test]
    fn test_serialization_skips_missing_position() {
        let json = serde_json::to_string(&LoadSpec::new(20.0)).unwrap();
        assert_eq!(json, r#"{"magnitude_kn":20.0}"#);

        let load: LoadSpec = serde_json::from_str(r#"{"magnitude_kn":12.0,"position_m":2.0}"#).unwrap();
        assert_eq!(load, LoadSpec::at(12.0, 2.0));
    }
}
