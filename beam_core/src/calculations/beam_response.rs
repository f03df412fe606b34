//! # Simply-Supported Beam Response
//!
//! Closed-form reactions, shear and bending moment for a simply supported beam
//! carrying one of three load conditions, sampled along the span for plotting.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//! - Loads act downward, reactions upward
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam_response::compute_response;
//! use beam_core::calculations::load_case::{BeamSpec, LoadSpec, LoadType};
//!
//! // 6 m beam, 12 kN point load 2 m from the left support
//! let beam = BeamSpec::new(6.0, LoadType::PointAtPosition);
//! let response = compute_response(&beam, &LoadSpec::at(12.0, 2.0)).unwrap();
//!
//! assert!((response.summary.reactions.r1_kn - 8.0).abs() < 1e-9);
//! assert!((response.summary.max_moment_knm - 16.0).abs() < 1e-9);
//! assert_eq!(response.curve.len(), 500);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calculations::load_case::{BeamSpec, LoadSpec, LoadType};
use crate::calculations::sampler::{evaluate, sample};
use crate::errors::{CalcError, CalcResult};
use crate::settings::AnalysisSettings;
use crate::units::{KiloNewtonMeters, KiloNewtons, KnPerMeter, Meters};

/// A load resolved against a validated beam.
///
/// Only [`BeamLoad::resolve`] builds these from caller input, so every value
/// here already satisfies `length > 0`, `magnitude > 0` and, for a point at
/// position, `0 < position < length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BeamLoad {
    /// Point load (kN) at mid-span
    CenterPoint { magnitude_kn: f64, length_m: f64 },

    /// Point load (kN) at position (m from left support)
    PointAtPosition {
        magnitude_kn: f64,
        position_m: f64,
        length_m: f64,
    },

    /// Total load (kN) spread uniformly over the span
    UniformDistributed { magnitude_kn: f64, length_m: f64 },
}

impl BeamLoad {
    /// Validate the inputs and resolve them into a load case.
    pub fn resolve(spec: &BeamSpec, load: &LoadSpec) -> CalcResult<Self> {
        spec.validate()?;
        load.validate(spec)?;

        let magnitude_kn = load.magnitude_kn;
        let length_m = spec.length_m;
        let resolved = match spec.load_type {
            LoadType::CenterPoint => BeamLoad::CenterPoint {
                magnitude_kn,
                length_m,
            },
            LoadType::PointAtPosition => BeamLoad::PointAtPosition {
                magnitude_kn,
                position_m: load.position_m.ok_or_else(|| {
                    CalcError::invalid_input("position_m", "none", "A load position is required")
                })?,
                length_m,
            },
            LoadType::UniformDistributed => BeamLoad::UniformDistributed {
                magnitude_kn,
                length_m,
            },
        };
        Ok(resolved)
    }

    /// The load type this case was resolved from
    pub fn load_type(&self) -> LoadType {
        match self {
            BeamLoad::CenterPoint { .. } => LoadType::CenterPoint,
            BeamLoad::PointAtPosition { .. } => LoadType::PointAtPosition,
            BeamLoad::UniformDistributed { .. } => LoadType::UniformDistributed,
        }
    }

    /// Applied load in kN (total load for a UDL)
    pub fn magnitude_kn(&self) -> f64 {
        match self {
            BeamLoad::CenterPoint { magnitude_kn, .. }
            | BeamLoad::PointAtPosition { magnitude_kn, .. }
            | BeamLoad::UniformDistributed { magnitude_kn, .. } => *magnitude_kn,
        }
    }

    /// Span in metres
    pub fn length_m(&self) -> f64 {
        match self {
            BeamLoad::CenterPoint { length_m, .. }
            | BeamLoad::PointAtPosition { length_m, .. }
            | BeamLoad::UniformDistributed { length_m, .. } => *length_m,
        }
    }

    /// Point where a concentrated load acts, or mid-span for a UDL
    pub fn load_point_m(&self) -> f64 {
        match self {
            BeamLoad::PointAtPosition { position_m, .. } => *position_m,
            BeamLoad::CenterPoint { length_m, .. } | BeamLoad::UniformDistributed { length_m, .. } => {
                length_m / 2.0
            }
        }
    }

    /// Load intensity w = P/L, for a uniformly distributed load only
    pub fn intensity(&self) -> Option<KnPerMeter> {
        match self {
            BeamLoad::UniformDistributed {
                magnitude_kn,
                length_m,
            } => Some(KiloNewtons(*magnitude_kn) / Meters(*length_m)),
            _ => None,
        }
    }

    /// Support reactions from static equilibrium
    pub fn reactions(&self) -> ReactionPair {
        match self {
            BeamLoad::CenterPoint { magnitude_kn, .. }
            | BeamLoad::UniformDistributed { magnitude_kn, .. } => {
                // R1 = R2 = P/2
                let half = magnitude_kn / 2.0;
                ReactionPair::new(half, half)
            }
            BeamLoad::PointAtPosition {
                magnitude_kn,
                position_m,
                length_m,
            } => {
                // R1 = Pb/L, R2 = Pa/L
                let b = length_m - position_m;
                ReactionPair::new(
                    magnitude_kn * b / length_m,
                    magnitude_kn * position_m / length_m,
                )
            }
        }
    }

    /// Shear (kN) at position x (m from left support)
    pub fn shear_at(&self, x_m: f64) -> f64 {
        let reactions = self.reactions();

        match self {
            BeamLoad::CenterPoint { length_m, .. } => {
                if x_m < length_m / 2.0 {
                    reactions.r1_kn
                } else {
                    -reactions.r2_kn
                }
            }
            BeamLoad::PointAtPosition {
                magnitude_kn,
                position_m,
                ..
            } => {
                if x_m < *position_m {
                    reactions.r1_kn
                } else {
                    reactions.r1_kn - magnitude_kn
                }
            }
            BeamLoad::UniformDistributed { length_m, .. } => {
                // V(x) = w(L/2 - x)
                let w = self.intensity().map_or(0.0, KnPerMeter::value);
                w * (length_m / 2.0 - x_m)
            }
        }
    }

    /// Moment (kNm) at position x (m from left support)
    pub fn moment_at(&self, x_m: f64) -> f64 {
        let r1 = self.reactions().r1_kn;

        match self {
            BeamLoad::CenterPoint { magnitude_kn, .. }
            | BeamLoad::PointAtPosition { magnitude_kn, .. } => {
                let a = self.load_point_m();
                if x_m < a {
                    // M(x) = R1 * x
                    r1 * x_m
                } else {
                    // M(x) = R1 * x - P(x - a)
                    r1 * x_m - magnitude_kn * (x_m - a)
                }
            }
            BeamLoad::UniformDistributed { length_m, .. } => {
                // M(x) = (wx/2)(L - x)
                let w = self.intensity().map_or(0.0, KnPerMeter::value);
                (w * x_m / 2.0) * (length_m - x_m)
            }
        }
    }

    /// Governing moment (kNm) and where it occurs (m from left support)
    pub fn max_moment(&self) -> (f64, f64) {
        match self {
            BeamLoad::CenterPoint {
                magnitude_kn,
                length_m,
            } => (magnitude_kn * length_m / 4.0, length_m / 2.0),
            BeamLoad::PointAtPosition {
                position_m,
                length_m,
                ..
            } => {
                // R1*a and R2*b are the same value approached from either support
                let reactions = self.reactions();
                let b = length_m - position_m;
                let from_left = reactions.r1_kn * position_m;
                let from_right = reactions.r2_kn * b;
                (from_left.max(from_right), *position_m)
            }
            BeamLoad::UniformDistributed { length_m, .. } => {
                let w = self.intensity().map_or(0.0, KnPerMeter::value);
                (w * length_m * length_m / 8.0, length_m / 2.0)
            }
        }
    }

    /// Largest absolute shear (kN) and the support where it occurs
    pub fn max_shear(&self) -> (f64, f64) {
        let reactions = self.reactions();
        if reactions.r1_kn >= reactions.r2_kn {
            (reactions.r1_kn, 0.0)
        } else {
            (reactions.r2_kn, self.length_m())
        }
    }
}

/// Left and right support reactions, positive upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionPair {
    /// Left support reaction (kN)
    pub r1_kn: f64,
    /// Right support reaction (kN)
    pub r2_kn: f64,
}

impl ReactionPair {
    /// Create a reaction pair
    pub fn new(r1_kn: f64, r2_kn: f64) -> Self {
        ReactionPair { r1_kn, r2_kn }
    }

    /// Sum of both reactions
    pub fn total(&self) -> KiloNewtons {
        KiloNewtons(self.r1_kn) + KiloNewtons(self.r2_kn)
    }

    /// Whether `R1 + R2` matches the applied load within a relative tolerance
    pub fn is_balanced(&self, magnitude_kn: f64, tolerance: f64) -> bool {
        (self.total().value() - magnitude_kn).abs() <= tolerance * magnitude_kn.abs()
    }
}

/// Shear and moment at one position along the beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseSample {
    /// Distance from left support (m)
    pub x_m: f64,
    /// Shear force (kN)
    pub shear_kn: f64,
    /// Bending moment (kNm)
    pub moment_knm: f64,
}

/// Shear and moment sampled over `[0, length]` in increasing x.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseCurve {
    samples: Vec<ResponseSample>,
}

impl FromIterator<ResponseSample> for ResponseCurve {
    fn from_iter<I: IntoIterator<Item = ResponseSample>>(iter: I) -> Self {
        ResponseCurve {
            samples: iter.into_iter().collect(),
        }
    }
}

impl ResponseCurve {
    /// All samples in order of increasing x
    pub fn samples(&self) -> &[ResponseSample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the curve holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample positions (m)
    pub fn positions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x_m).collect()
    }

    /// `(x, shear)` pairs for plotting
    pub fn shear_diagram(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x_m, s.shear_kn)).collect()
    }

    /// `(x, moment)` pairs for plotting
    pub fn moment_diagram(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x_m, s.moment_knm)).collect()
    }

    /// Sample with the largest moment
    pub fn peak_moment(&self) -> Option<&ResponseSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.moment_knm.total_cmp(&b.moment_knm))
    }
}

/// Reactions and governing values for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Support reactions
    pub reactions: ReactionPair,

    /// Maximum bending moment (kNm)
    pub max_moment_knm: f64,
    /// Position of maximum moment (m from left)
    pub max_moment_location_m: f64,

    /// Maximum shear magnitude (kN)
    pub max_shear_kn: f64,
    /// Position of maximum shear (m from left)
    pub max_shear_location_m: f64,
}

impl SummaryResult {
    fn from_load(load: &BeamLoad) -> Self {
        let (max_moment_knm, max_moment_location_m) = load.max_moment();
        let (max_shear_kn, max_shear_location_m) = load.max_shear();
        SummaryResult {
            reactions: load.reactions(),
            max_moment_knm,
            max_moment_location_m,
            max_shear_kn,
            max_shear_location_m,
        }
    }

    /// Maximum moment as a typed value
    pub fn max_moment(&self) -> KiloNewtonMeters {
        KiloNewtonMeters(self.max_moment_knm)
    }

    /// Maximum shear as a typed value
    pub fn max_shear(&self) -> KiloNewtons {
        KiloNewtons(self.max_shear_kn)
    }
}

/// Everything a presentation layer needs for one beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResponse {
    /// Load condition
    pub load_type: LoadType,
    /// Span (m)
    pub length_m: f64,
    /// Applied load (kN)
    pub magnitude_kn: f64,
    /// Load position (m), point at position only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_m: Option<f64>,

    /// Sampled shear and moment
    pub curve: ResponseCurve,
    /// Reactions and governing values
    pub summary: SummaryResult,
}

/// Compute the response at the default resolution.
pub fn compute_response(spec: &BeamSpec, load: &LoadSpec) -> CalcResult<BeamResponse> {
    compute_response_with_settings(spec, load, &AnalysisSettings::default())
}

/// Compute the response with `resolution` sample points.
pub fn compute_response_with_resolution(
    spec: &BeamSpec,
    load: &LoadSpec,
    resolution: usize,
) -> CalcResult<BeamResponse> {
    let settings = AnalysisSettings::default().with_resolution(resolution);
    compute_response_with_settings(spec, load, &settings)
}

/// Compute the response using explicit analysis settings.
///
/// All inputs are validated before the grid is built; an invalid request
/// never produces a partial curve.
pub fn compute_response_with_settings(
    spec: &BeamSpec,
    load: &LoadSpec,
    settings: &AnalysisSettings,
) -> CalcResult<BeamResponse> {
    settings.validate()?;
    let beam_load = BeamLoad::resolve(spec, load)?;

    debug!(
        "computing {:?} response: L = {} m, P = {} kN, {} samples",
        spec.load_type, spec.length_m, load.magnitude_kn, settings.resolution
    );

    let positions = sample(spec.length_m, settings.resolution)?;
    let curve = evaluate(&beam_load, &positions);
    let summary = SummaryResult::from_load(&beam_load);

    if !summary
        .reactions
        .is_balanced(beam_load.magnitude_kn(), settings.equilibrium_tolerance)
    {
        warn!(
            "reactions {} + {} do not balance applied load {}",
            KiloNewtons(summary.reactions.r1_kn),
            KiloNewtons(summary.reactions.r2_kn),
            KiloNewtons(beam_load.magnitude_kn())
        );
    }

    Ok(BeamResponse {
        load_type: spec.load_type,
        length_m: spec.length_m,
        magnitude_kn: load.magnitude_kn,
        position_m: match beam_load {
            BeamLoad::PointAtPosition { position_m, .. } => Some(position_m),
            _ => None,
        },
        curve,
        summary,
    })
}
