//! Plain-text calculation summary.

use beam_core::calculations::{BeamResponse, LoadType};
use beam_core::units::{KiloNewtonMeters, KiloNewtons, Meters};

/// Reactions closer than this (kN) are reported as equal
const SYMMETRY_TOLERANCE_KN: f64 = 1e-9;

/// Render the summary printed after a calculation.
///
/// Every value is shown to two decimal places.
pub fn render_summary(response: &BeamResponse) -> String {
    let summary = &response.summary;
    let reactions = summary.reactions;
    let length = Meters(response.length_m);
    let load = KiloNewtons(response.magnitude_kn);

    let mut lines = vec![
        "Results:".to_string(),
        format!("Load Type: {}", response.load_type.display_name()),
        format!("Beam Length: {length}"),
    ];

    match response.load_type {
        LoadType::UniformDistributed => {
            lines.push(format!("Load: {load} total (w = {})", load / length));
        }
        LoadType::PointAtPosition => {
            lines.push(format!("Load: {load}"));
            if let Some(position) = response.position_m {
                lines.push(format!("Load Position: {} from left support", Meters(position)));
            }
        }
        LoadType::CenterPoint => lines.push(format!("Load: {load}")),
    }

    if (reactions.r1_kn - reactions.r2_kn).abs() < SYMMETRY_TOLERANCE_KN {
        lines.push(format!("Reactions: R1 = R2 = {}", KiloNewtons(reactions.r1_kn)));
    } else {
        lines.push(format!(
            "Reactions: R1 = {}, R2 = {}",
            KiloNewtons(reactions.r1_kn),
            KiloNewtons(reactions.r2_kn)
        ));
    }

    lines.push(format!(
        "Maximum Bending Moment: {} {} (x = {})",
        KiloNewtonMeters(summary.max_moment_knm),
        response.load_type.max_moment_location_label(),
        Meters(summary.max_moment_location_m)
    ));
    lines.push(format!(
        "Maximum Shear: {} at x = {}",
        summary.max_shear(),
        Meters(summary.max_shear_location_m)
    ));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
