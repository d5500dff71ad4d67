//! Upgrade pipeline combining the angle sweep with the stealth ratio
use crate::api::{AdversaryParams, PlaneParams, StealthError, UpgradeResult};
use crate::optimizer::optimize_leading_edge;
use crate::stealth::stealth_enhancement;
use tracing::{debug, info};

/// Evaluate a leading-edge upgrade for the given plane/adversary pair.
///
/// Runs the angle sweep, computes the stealth enhancement ratio from the
/// plane's signature factors, and packages both. The only validated input
/// is the stealth denominator: a zero `shape_factor * material_factor *
/// frequency_band` product is rejected with an error rather than silently
/// producing an infinite improvement. Everything else is as permissive as
/// the underlying math.
pub fn upgrade_leading_edge(
    plane: &PlaneParams,
    adversary: &AdversaryParams,
) -> Result<UpgradeResult, StealthError> {
    debug!(?plane, ?adversary, "starting upgrade evaluation");

    let denominator = plane.shape_factor * plane.material_factor * plane.frequency_band;
    if denominator == 0.0 {
        return Err(StealthError::from(format!(
            "stealth denominator is zero: shape_factor={} material_factor={} frequency_band={}",
            plane.shape_factor, plane.material_factor, plane.frequency_band
        )));
    }

    let sweep = optimize_leading_edge(plane, None, adversary);
    let stealth_improvement = stealth_enhancement(
        plane.base_rcs,
        plane.shape_factor,
        plane.material_factor,
        plane.frequency_band,
    );

    let result = UpgradeResult {
        optimal_angle: sweep.best_angle_deg,
        combined_score: sweep.best_score,
        stealth_improvement,
    };
    info!(
        optimal_angle = ?result.optimal_angle,
        combined_score = result.combined_score,
        stealth_improvement = result.stealth_improvement,
        "upgrade evaluation complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_upgrade() {
        let plane = PlaneParams::reference_example();
        let adversary = AdversaryParams::reference_example();
        let result = upgrade_leading_edge(&plane, &adversary).unwrap();

        assert!((result.stealth_improvement - 0.00025).abs() < 1e-15);
        let angle = result.optimal_angle.unwrap();
        assert!(angle <= 60 && angle % 5 == 0);
        assert!(result.combined_score.is_finite());
    }

    #[test]
    fn test_zero_denominator_is_rejected() {
        let mut plane = PlaneParams::reference_example();
        plane.material_factor = 0.0;
        let adversary = AdversaryParams::reference_example();

        let err = upgrade_leading_edge(&plane, &adversary).unwrap_err();
        assert!(err.to_string().contains("stealth denominator is zero"));
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let plane = PlaneParams::reference_example();
        let adversary = AdversaryParams::reference_example();
        let a = upgrade_leading_edge(&plane, &adversary).unwrap();
        let b = upgrade_leading_edge(&plane, &adversary).unwrap();
        assert_eq!(a.optimal_angle, b.optimal_angle);
        assert_eq!(a.combined_score.to_bits(), b.combined_score.to_bits());
        assert_eq!(
            a.stealth_improvement.to_bits(),
            b.stealth_improvement.to_bits()
        );
    }
}
