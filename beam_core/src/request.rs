//! # JSON Request / Reply
//!
//! The wire form of a calculation, for callers that talk JSON rather than
//! Rust types.
//!
//! ## Request
//!
//! ```json
//! { "loadType": "PointAtPosition", "length": 6.0, "magnitude": 12.0, "position": 2.0 }
//! ```
//!
//! ## Reply
//!
//! ```json
//! {
//!   "samples": [[0.0, 8.0, 0.0], [0.012, 8.0, 0.096], ...],
//!   "R1": 8.0,
//!   "R2": 4.0,
//!   "maxMoment": 16.0,
//!   "maxMomentLocation": 2.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::beam_response::{compute_response_with_settings, BeamResponse};
use crate::calculations::load_case::{BeamSpec, LoadSpec, LoadType};
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

/// A calculation request as received from a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeamRequest {
    pub load_type: LoadType,
    /// Span (m)
    pub length: f64,
    /// Load (kN); total load for a UDL
    pub magnitude: f64,
    /// Load position from the left support (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

impl BeamRequest {
    /// Parse a request from JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::calculations::LoadType;
    /// use beam_core::request::BeamRequest;
    ///
    /// let request = BeamRequest::from_json(
    ///     r#"{ "loadType": "UniformDistributed", "length": 10.0, "magnitude": 20.0 }"#,
    /// ).unwrap();
    /// assert_eq!(request.load_type, LoadType::UniformDistributed);
    /// assert_eq!(request.position, None);
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Split into the engine's beam and load inputs
    pub fn specs(&self) -> (BeamSpec, LoadSpec) {
        (
            BeamSpec::new(self.length, self.load_type),
            LoadSpec {
                magnitude_kn: self.magnitude,
                position_m: self.position,
            },
        )
    }

    /// Run the calculation and build the reply.
    pub fn evaluate(&self, settings: &AnalysisSettings) -> CalcResult<BeamReply> {
        let (beam, load) = self.specs();
        let response = compute_response_with_settings(&beam, &load, settings)?;
        Ok(BeamReply::from(&response))
    }
}

/// A calculation reply: sampled `(x, shear, moment)` triples plus the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamReply {
    pub samples: Vec<(f64, f64, f64)>,
    #[serde(rename = "R1")]
    pub r1: f64,
    #[serde(rename = "R2")]
    pub r2: f64,
    #[serde(rename = "maxMoment")]
    pub max_moment: f64,
    #[serde(rename = "maxMomentLocation")]
    pub max_moment_location: f64,
}

impl From<&BeamResponse> for BeamReply {
    fn from(response: &BeamResponse) -> Self {
        BeamReply {
            samples: response
                .curve
                .samples()
                .iter()
                .map(|s| (s.x_m, s.shear_kn, s.moment_knm))
                .collect(),
            r1: response.summary.reactions.r1_kn,
            r2: response.summary.reactions.r2_kn,
            max_moment: response.summary.max_moment_knm,
            max_moment_location: response.summary.max_moment_location_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_roundtrip_keys() {
        let request = BeamRequest {
            load_type: LoadType::PointAtPosition,
            length: 6.0,
            magnitude: 12.0,
            position: Some(2.0),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"loadType\":\"PointAtPosition\""));
        assert_eq!(BeamRequest::from_json(&json).unwrap(), request);
    }

    #[test]
    fn test_evaluate_point_load() {
        let request = BeamRequest::from_json(
            r#"{ "loadType": "PointAtPosition", "length": 6.0, "magnitude": 12.0, "position": 2.0 }"#,
        )
        .unwrap();
        let reply = request
            .evaluate(&AnalysisSettings::default().with_resolution(7))
            .unwrap();

        assert_eq!(reply.samples.len(), 7);
        assert_eq!(reply.samples[0], (0.0, 8.0, 0.0));
        assert!((reply.r1 - 8.0).abs() < 1e-9);
        assert!((reply.r2 - 4.0).abs() < 1e-9);
        assert!((reply.max_moment - 16.0).abs() < 1e-9);
        assert_eq!(reply.max_moment_location, 2.0);
    }

    #[test]
    fn test_reply_json_keys() {
        let request = BeamRequest {
            load_type: LoadType::CenterPoint,
            length: 5.0,
            magnitude: 10.0,
            position: None,
        };
        let reply = request.evaluate(&AnalysisSettings::default()).unwrap();
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["R1"], 5.0);
        assert_eq!(json["maxMoment"], 12.5);
        assert_eq!(json["samples"].as_array().map(Vec::len), Some(500));
    }

    #[test]
    fn test_invalid_request() {
        let request = BeamRequest::from_json(r#"{ "loadType": "CenterPoint", "length": 0.0, "magnitude": 10.0 }"#).unwrap();
        let err = request.evaluate(&AnalysisSettings::default()).unwrap_err();
        assert_eq!(err.field(), Some("length_m"));

        let err = BeamRequest::from_json(r#"{ "loadType": "Cantilever", "length": 1.0, "magnitude": 1.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
