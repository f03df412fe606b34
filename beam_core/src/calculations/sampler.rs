//! # Sampler / Evaluator
//!
//! Builds the evenly spaced position grid along the beam and evaluates a
//! resolved load at every grid point. Each evaluation is an independent pure
//! call, so the order of evaluation does not matter.

use crate::calculations::beam_response::{BeamLoad, ResponseCurve, ResponseSample};
use crate::errors::{CalcError, CalcResult};

/// Number of sample points used when the caller does not choose one
pub const DEFAULT_RESOLUTION: usize = 500;

/// Evenly spaced positions from `0` to `length_m` inclusive.
///
/// Returns exactly `resolution` strictly increasing values. The last value
/// is `length_m` exactly, not an accumulated approximation of it.
///
/// # Example
///
/// ```rust
/// use beam_core::calculations::sampler::sample;
///
/// let x = sample(5.0, 6).unwrap();
/// assert_eq!(x, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sample(length_m: f64, resolution: usize) -> CalcResult<Vec<f64>> {
    if resolution < 2 {
        return Err(CalcError::invalid_input(
            "resolution",
            resolution.to_string(),
            "At least two sample points are required",
        ));
    }
    if !(length_m.is_finite() && length_m > 0.0) {
        return Err(CalcError::invalid_input(
            "length_m",
            length_m.to_string(),
            "Beam length must be positive",
        ));
    }

    let last = resolution - 1;
    let positions = (0..resolution)
        .map(|i| {
            if i == last {
                length_m
            } else {
                length_m * i as f64 / last as f64
            }
        })
        .collect();
    Ok(positions)
}

/// Evaluate shear and moment of `load` at every position.
pub fn evaluate(load: &BeamLoad, positions: &[f64]) -> ResponseCurve {
    positions
        .iter()
        .map(|&x_m| ResponseSample {
            x_m,
            shear_kn: load.shear_at(x_m),
            moment_knm: load.moment_at(x_m),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::load_case::{BeamSpec, LoadSpec, LoadType};

    #[test]
    fn test_default_grid() {
        let x = sample(5.0, DEFAULT_RESOLUTION).unwrap();
        assert_eq!(x.len(), 500);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[499], 5.0);
        assert!(x.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_even_spacing() {
        let x = sample(10.0, 11).unwrap();
        for (i, value) in x.iter().enumerate() {
            assert!((value - i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_minimum_resolution() {
        assert_eq!(sample(3.0, 2).unwrap(), vec![0.0, 3.0]);
        for resolution in [0, 1] {
            let err = sample(3.0, resolution).unwrap_err();
            assert_eq!(err.field(), Some("resolution"));
        }
    }

    #[test]
    fn test_rejects_bad_length() {
        let err = sample(0.0, 500).unwrap_err();
        assert_eq!(err.field(), Some("length_m"));
    }

    #[test]
    fn test_evaluate_is_order_independent() {
        let beam = BeamSpec::new(6.0, LoadType::PointAtPosition);
        let load = BeamLoad::resolve(&beam, &LoadSpec::at(12.0, 2.0)).unwrap();

        let forward = sample(6.0, 25).unwrap();
        let mut backward = forward.clone();
        backward.reverse();

        let a = evaluate(&load, &forward);
        let b = evaluate(&load, &backward);
        for (fwd, bwd) in a.samples().iter().zip(b.samples().iter().rev()) {
            assert_eq!(fwd, bwd);
        }
    }
}
