//! Brute-force sweep of the leading-edge angle
use crate::api::{AdversaryParams, PlaneParams, SweepOutcome};
use crate::constants::{PERFORMANCE_WEIGHT, SWEEP_END_DEG, SWEEP_START_DEG, SWEEP_STEP_DEG};
use crate::performance::composite_performance;
use crate::stealth::leading_edge_rcs;
use tracing::debug;

/// Score of a single sweep candidate, kept for per-candidate reporting.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CandidateScore {
    pub angle_deg: u32,
    pub rcs: f64,
    pub performance: f64,
    pub score: f64,
}

/// Evaluate one candidate angle against the plane/adversary pair.
pub fn evaluate_candidate(
    angle_deg: u32,
    plane: &PlaneParams,
    adversary: &AdversaryParams,
) -> CandidateScore {
    let angle_rad = f64::from(angle_deg).to_radians();
    let rcs = leading_edge_rcs(plane.base_rcs, angle_rad);
    // The comparison metric always takes the two-parameter shape:
    // plane vs adversary mass against the plane's isp and gravity.
    let performance = composite_performance(
        &[plane.mass, adversary.mass],
        &[plane.isp, plane.gravity],
    );
    let score = rcs + performance * PERFORMANCE_WEIGHT;
    CandidateScore { angle_deg, rcs, performance, score }
}

/// Sweep leading-edge angles and keep the minimum combined score.
///
/// Candidates run from 0 to 60 degrees inclusive in 5-degree steps, 13 in
/// total. Comparison is strict `<`, so ties keep the earliest (lowest)
/// angle. The `wingmate` parameter is accepted for signature compatibility
/// with the planned multi-ship comparison and is currently ignored.
pub fn optimize_leading_edge(
    plane: &PlaneParams,
    _wingmate: Option<&PlaneParams>,
    adversary: &AdversaryParams,
) -> SweepOutcome {
    let mut best_angle: Option<u32> = None;
    let mut best_score = f64::INFINITY;
    let mut evaluated = 0usize;

    let mut angle_deg = SWEEP_START_DEG;
    while angle_deg <= SWEEP_END_DEG {
        let candidate = evaluate_candidate(angle_deg, plane, adversary);
        debug!(
            angle_deg,
            rcs = candidate.rcs,
            performance = candidate.performance,
            score = candidate.score,
            "sweep candidate"
        );
        if candidate.score < best_score {
            best_score = candidate.score;
            best_angle = Some(angle_deg);
        }
        evaluated += 1;
        angle_deg += SWEEP_STEP_DEG;
    }

    debug!(?best_angle, best_score, evaluated, "sweep complete");
    SweepOutcome {
        best_angle_deg: best_angle,
        best_score,
        candidates_evaluated: evaluated,
    }
}

/// List every candidate in sweep order, for diagnostic output.
pub fn sweep_candidates(
    plane: &PlaneParams,
    adversary: &AdversaryParams,
) -> Vec<CandidateScore> {
    (SWEEP_START_DEG..=SWEEP_END_DEG)
        .step_by(SWEEP_STEP_DEG as usize)
        .map(|angle_deg| evaluate_candidate(angle_deg, plane, adversary))
        .collect()
}
