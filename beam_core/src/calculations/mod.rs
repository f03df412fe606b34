//! # Beam Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Spec` - Input parameters (JSON-serializable)
//! - `*Response` / `*Result` - Calculation results (JSON-serializable)
//! - `compute_*(input) -> Result<_, CalcError>` - Pure calculation function
//!
//! ## Modules
//!
//! - [`load_case`] - Beam and load definitions with validation
//! - [`sampler`] - Position grid and per-point evaluation
//! - [`beam_response`] - Reactions, shear and moment for the three load types

pub mod beam_response;
pub mod load_case;
pub mod sampler;

// Re-export commonly used types
pub use beam_response::{
    compute_response, compute_response_with_resolution, compute_response_with_settings, BeamLoad,
    BeamResponse, ReactionPair, ResponseCurve, ResponseSample, SummaryResult,
};
pub use load_case::{BeamSpec, LoadSpec, LoadType};
pub use sampler::{sample, DEFAULT_RESOLUTION};
