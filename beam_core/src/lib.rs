//! # beam_core - Simply Supported Beam Engine
//!
//! `beam_core` computes reactions, shear-force and bending-moment diagrams for a
//! simply supported beam under a single static load: a center point load, a
//! point load at any position, or a uniformly distributed load. All inputs and
//! outputs are JSON-serializable so any front end can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Fail fast**: Every input is validated before any sampling happens
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{compute_response, BeamSpec, LoadSpec, LoadType};
//!
//! let beam = BeamSpec::new(10.0, LoadType::UniformDistributed);
//! let response = compute_response(&beam, &LoadSpec::new(20.0)).unwrap();
//!
//! assert!((response.summary.max_moment_knm - 25.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Load cases, sampler and the response engine
//! - [`request`] - JSON request/reply boundary
//! - [`settings`] - Analysis settings (resolution, tolerances)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod request;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_response, BeamResponse, BeamSpec, LoadSpec, LoadType};
pub use errors::{CalcError, CalcResult};
pub use request::{BeamReply, BeamRequest};
pub use settings::AnalysisSettings;
