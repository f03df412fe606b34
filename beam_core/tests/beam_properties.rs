//! Equilibrium, boundary and consistency checks across all load types.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use beam_core::calculations::{
    compute_response, compute_response_with_resolution, sample, BeamSpec, LoadSpec, LoadType,
};

/// A representative spread of valid inputs per load type
fn cases() -> Vec<(BeamSpec, LoadSpec)> {
    let mut cases = Vec::new();
    for &(length, magnitude) in &[(5.0, 10.0), (0.75, 3.2), (12.0, 150.0), (30.0, 0.5)] {
        cases.push((BeamSpec::new(length, LoadType::CenterPoint), LoadSpec::new(magnitude)));
        cases.push((
            BeamSpec::new(length, LoadType::UniformDistributed),
            LoadSpec::new(magnitude),
        ));
        for fraction in [0.1, 0.37, 0.5, 0.9] {
            cases.push((
                BeamSpec::new(length, LoadType::PointAtPosition),
                LoadSpec::at(magnitude, length * fraction),
            ));
        }
    }
    cases
}

#[test]
fn reactions_balance_applied_load() {
    for (beam, load) in cases() {
        let response = compute_response(&beam, &load).unwrap();
        let reactions = response.summary.reactions;
        assert_relative_eq!(
            reactions.r1_kn + reactions.r2_kn,
            load.magnitude_kn,
            max_relative = 1e-6
        );
    }
}

#[test]
fn moment_vanishes_at_supports() {
    for (beam, load) in cases() {
        let response = compute_response(&beam, &load).unwrap();
        let samples = response.curve.samples();
        let first = samples.first().unwrap();
        let last = samples.last().unwrap();

        assert_eq!(first.x_m, 0.0);
        assert_eq!(last.x_m, beam.length_m);
        assert_abs_diff_eq!(first.moment_knm, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(last.moment_knm, 0.0, epsilon = 1e-6 * load.magnitude_kn.max(1.0));
    }
}

#[test]
fn center_point_matches_point_at_mid_span() {
    let center = compute_response(
        &BeamSpec::new(5.0, LoadType::CenterPoint),
        &LoadSpec::new(10.0),
    )
    .unwrap();
    let point = compute_response(
        &BeamSpec::new(5.0, LoadType::PointAtPosition),
        &LoadSpec::at(10.0, 2.5),
    )
    .unwrap();

    assert_relative_eq!(center.summary.reactions.r1_kn, 5.0);
    assert_relative_eq!(center.summary.reactions.r2_kn, 5.0);
    assert_relative_eq!(center.summary.max_moment_knm, 12.5);

    assert_relative_eq!(point.summary.reactions.r1_kn, center.summary.reactions.r1_kn);
    assert_relative_eq!(point.summary.reactions.r2_kn, center.summary.reactions.r2_kn);
    assert_relative_eq!(point.summary.max_moment_knm, center.summary.max_moment_knm);
    assert_relative_eq!(
        point.summary.max_moment_location_m,
        center.summary.max_moment_location_m
    );

    for (a, b) in center.curve.samples().iter().zip(point.curve.samples()) {
        assert_relative_eq!(a.shear_kn, b.shear_kn, epsilon = 1e-12);
        assert_relative_eq!(a.moment_knm, b.moment_knm, epsilon = 1e-12);
    }
}

#[test]
fn uniform_load_reference_values() {
    let response = compute_response_with_resolution(
        &BeamSpec::new(10.0, LoadType::UniformDistributed),
        &LoadSpec::new(20.0),
        11,
    )
    .unwrap();
    let samples = response.curve.samples();

    assert_relative_eq!(response.summary.reactions.r1_kn, 10.0);
    assert_relative_eq!(response.summary.reactions.r2_kn, 10.0);
    assert_relative_eq!(samples[0].shear_kn, 10.0);
    assert_abs_diff_eq!(samples[5].shear_kn, 0.0, epsilon = 1e-12);
    assert_relative_eq!(samples[10].shear_kn, -10.0);
    assert_relative_eq!(response.summary.max_moment_knm, 25.0);
    assert_relative_eq!(response.summary.max_moment_location_m, 5.0);
}

#[test]
fn point_load_reference_values() {
    let response = compute_response(
        &BeamSpec::new(6.0, LoadType::PointAtPosition),
        &LoadSpec::at(12.0, 2.0),
    )
    .unwrap();

    assert_relative_eq!(response.summary.reactions.r1_kn, 8.0);
    assert_relative_eq!(response.summary.reactions.r2_kn, 4.0);
    assert_relative_eq!(response.summary.max_moment_knm, 16.0);
    assert_relative_eq!(response.summary.max_moment_location_m, 2.0);
}

#[test]
fn analytic_max_moment_matches_sampled_peak() {
    // 601 points on a 6 m span puts a sample exactly on the 2 m load point
    for position in [1.0, 2.0, 3.0, 4.5] {
        let response = compute_response_with_resolution(
            &BeamSpec::new(6.0, LoadType::PointAtPosition),
            &LoadSpec::at(12.0, position),
            601,
        )
        .unwrap();
        let peak = response.curve.peak_moment().unwrap();

        assert_relative_eq!(peak.moment_knm, response.summary.max_moment_knm, max_relative = 1e-9);
        assert_abs_diff_eq!(peak.x_m, position, epsilon = 1e-9);
    }
}

#[test]
fn sampled_moment_never_exceeds_analytic_max() {
    for (beam, load) in cases() {
        let response = compute_response(&beam, &load).unwrap();
        let max = response.summary.max_moment_knm;
        for s in response.curve.samples() {
            assert!(s.moment_knm <= max * (1.0 + 1e-9));
        }
    }
}

#[test]
fn sampler_reference_grid() {
    let x = sample(5.0, 500).unwrap();
    assert_eq!(x.len(), 500);
    assert_eq!(x[0], 0.0);
    assert_eq!(x[499], 5.0);
    assert!(x.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn invalid_inputs_are_rejected() {
    let zero_length = compute_response(&BeamSpec::new(0.0, LoadType::CenterPoint), &LoadSpec::new(10.0));
    assert_eq!(zero_length.unwrap_err().error_code(), "INVALID_INPUT");

    let negative_load = compute_response(
        &BeamSpec::new(5.0, LoadType::UniformDistributed),
        &LoadSpec::new(-5.0),
    );
    assert_eq!(negative_load.unwrap_err().field(), Some("magnitude_kn"));

    let off_beam = compute_response(
        &BeamSpec::new(5.0, LoadType::PointAtPosition),
        &LoadSpec::at(10.0, 6.0),
    );
    assert_eq!(off_beam.unwrap_err().field(), Some("position_m"));
}
