//! Radar cross section model and stealth enhancement ratio
use crate::constants::RCS_PHASE_BIAS_RAD;

/// Effective RCS of a leading edge swept to `angle_rad`.
///
/// `base_rcs * sin(angle_rad + 0.1)` — the fixed 0.1 rad phase bias keeps
/// the signature nonzero at a 0-degree sweep.
pub fn leading_edge_rcs(base_rcs: f64, angle_rad: f64) -> f64 {
    base_rcs * (angle_rad + RCS_PHASE_BIAS_RAD).sin()
}

/// Approximate the stealth enhancement potential of an upgrade.
///
/// Closed-form ratio `base_rcs / (shape_factor * material_factor *
/// frequency_band)`. A zero denominator yields ±infinity (or NaN for a
/// zero numerator) per IEEE-754; callers that need a hard failure validate
/// before calling, as the upgrade pipeline does.
pub fn stealth_enhancement(
    base_rcs: f64,
    shape_factor: f64,
    material_factor: f64,
    frequency_band: f64,
) -> f64 {
    base_rcs / (shape_factor * material_factor * frequency_band)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhancement_reference_value() {
        // 0.1 / (5 * 8 * 10) = 0.00025
        let e = stealth_enhancement(0.1, 5.0, 8.0, 10.0);
        assert!((e - 0.00025).abs() < 1e-15);
    }

    #[test]
    fn test_enhancement_zero_denominator_is_infinite() {
        let e = stealth_enhancement(0.1, 0.0, 8.0, 10.0);
        assert!(e.is_infinite());
    }

    #[test]
    fn test_rcs_zero_angle_keeps_phase_bias() {
        let rcs = leading_edge_rcs(0.1, 0.0);
        assert!((rcs - 0.1 * 0.1_f64.sin()).abs() < 1e-15);
        assert!(rcs > 0.0);
    }

    #[test]
    fn test_rcs_monotonic_over_sweep_range() {
        // sin is increasing on [0.1, 60° + 0.1 rad], so a larger sweep
        // angle always shows a larger signature for a positive base
        let low = leading_edge_rcs(0.1, 0.0_f64.to_radians());
        let mid = leading_edge_rcs(0.1, 30.0_f64.to_radians());
        let high = leading_edge_rcs(0.1, 60.0_f64.to_radians());
        assert!(low < mid && mid < high);
    }

    #[test]
    fn test_rcs_scales_with_base() {
        let a = leading_edge_rcs(0.1, 0.5);
        let b = leading_edge_rcs(0.2, 0.5);
        assert!((b - 2.0 * a).abs() < 1e-15);
    }
}
