//! Monte Carlo dispersion analysis over perturbed plane parameters
//!
//! Each upgrade evaluation is independent, so the runs parallelize across
//! a rayon iterator. Samples are drawn serially from a seeded generator
//! before the parallel stage so a fixed seed reproduces the exact run set.
use crate::api::{AdversaryParams, PlaneParams, StealthError};
use crate::upgrade::upgrade_leading_edge;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Parameters controlling the dispersion run
#[derive(Debug, Clone)]
pub struct MonteCarloParams {
    pub num_sims: usize,
    /// Standard deviation applied to plane mass (kg)
    pub mass_std: f64,
    /// Standard deviation applied to specific impulse (s)
    pub isp_std: f64,
    /// Standard deviation applied to the base RCS (m²)
    pub base_rcs_std: f64,
    /// Seed for reproducible sampling; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for MonteCarloParams {
    fn default() -> Self {
        MonteCarloParams {
            num_sims: 1000,
            mass_std: 200.0,
            isp_std: 5.0,
            base_rcs_std: 0.005,
            seed: None,
        }
    }
}

/// Mean/std/min/max summary of one output field
#[derive(Debug, Clone, Serialize)]
pub struct FieldStatistics {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Aggregate results of a dispersion run
#[derive(Debug, Serialize)]
pub struct MonteCarloResults {
    pub combined_score: FieldStatistics,
    pub stealth_improvement: FieldStatistics,
    /// Count of runs per winning angle, keyed by degrees
    pub angle_histogram: BTreeMap<u32, usize>,
    pub valid_runs: usize,
    pub failed_runs: usize,
}

/// Run `params.num_sims` perturbed upgrade evaluations in parallel.
///
/// A run fails if the pipeline rejects the perturbed inputs or produces a
/// non-finite combined score; failed runs are counted but excluded from
/// the statistics. Errors are returned only when every run fails.
pub fn run_monte_carlo(
    plane: &PlaneParams,
    adversary: &AdversaryParams,
    params: &MonteCarloParams,
) -> Result<MonteCarloResults, StealthError> {
    if params.num_sims == 0 {
        return Err(StealthError::from("num_sims must be greater than 0"));
    }

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mass_dist = Normal::new(0.0, params.mass_std)
        .map_err(|e| StealthError::from(format!("invalid mass_std: {e}")))?;
    let isp_dist = Normal::new(0.0, params.isp_std)
        .map_err(|e| StealthError::from(format!("invalid isp_std: {e}")))?;
    let rcs_dist = Normal::new(0.0, params.base_rcs_std)
        .map_err(|e| StealthError::from(format!("invalid base_rcs_std: {e}")))?;

    // Draw all perturbations up front so the parallel stage stays
    // deterministic for a fixed seed
    let samples: Vec<(f64, f64, f64)> = (0..params.num_sims)
        .map(|_| {
            (
                mass_dist.sample(&mut rng),
                isp_dist.sample(&mut rng),
                rcs_dist.sample(&mut rng),
            )
        })
        .collect();

    let outcomes: Vec<Option<(Option<u32>, f64, f64)>> = samples
        .par_iter()
        .map(|&(d_mass, d_isp, d_rcs)| {
            let mut run_plane = plane.clone();
            run_plane.mass += d_mass;
            run_plane.isp += d_isp;
            run_plane.base_rcs += d_rcs;

            match upgrade_leading_edge(&run_plane, adversary) {
                Ok(r) if r.combined_score.is_finite() => {
                    Some((r.optimal_angle, r.combined_score, r.stealth_improvement))
                }
                Ok(_) => None,
                Err(_) => None,
            }
        })
        .collect();

    let valid: Vec<&(Option<u32>, f64, f64)> =
        outcomes.iter().filter_map(|o| o.as_ref()).collect();
    let failed_runs = outcomes.len() - valid.len();
    if failed_runs > 0 {
        warn!(failed_runs, total = outcomes.len(), "some dispersion runs failed");
    }
    if valid.is_empty() {
        return Err(StealthError::from("all Monte Carlo runs failed"));
    }

    let scores: Vec<f64> = valid.iter().map(|(_, s, _)| *s).collect();
    let stealths: Vec<f64> = valid.iter().map(|(_, _, e)| *e).collect();

    let mut angle_histogram = BTreeMap::new();
    for (angle, _, _) in valid.iter() {
        if let Some(deg) = angle {
            *angle_histogram.entry(*deg).or_insert(0) += 1;
        }
    }

    debug!(valid_runs = valid.len(), failed_runs, "dispersion run complete");
    Ok(MonteCarloResults {
        combined_score: field_statistics(&scores),
        stealth_improvement: field_statistics(&stealths),
        angle_histogram,
        valid_runs: valid.len(),
        failed_runs,
    })
}

/// Sample statistics with the n-1 variance denominator
fn field_statistics(values: &[f64]) -> FieldStatistics {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = if values.len() > 1 {
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };
    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    FieldStatistics { mean, std: variance.sqrt(), min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params(seed: u64) -> MonteCarloParams {
        MonteCarloParams {
            num_sims: 64,
            mass_std: 100.0,
            isp_std: 2.0,
            base_rcs_std: 0.001,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let plane = PlaneParams::reference_example();
        let adversary = AdversaryParams::reference_example();
        let params = small_params(42);

        let a = run_monte_carlo(&plane, &adversary, &params).unwrap();
        let b = run_monte_carlo(&plane, &adversary, &params).unwrap();
        assert_eq!(a.combined_score.mean.to_bits(), b.combined_score.mean.to_bits());
        assert_eq!(a.angle_histogram, b.angle_histogram);
    }

    #[test]
    fn test_run_counts_add_up() {
        let plane = PlaneParams::reference_example();
        let adversary = AdversaryParams::reference_example();
        let params = small_params(7);

        let results = run_monte_carlo(&plane, &adversary, &params).unwrap();
        assert_eq!(results.valid_runs + results.failed_runs, params.num_sims);
        let histogram_total: usize = results.angle_histogram.values().sum();
        assert_eq!(histogram_total, results.valid_runs);
    }

    #[test]
    fn test_zero_sims_rejected() {
        let plane = PlaneParams::reference_example();
        let adversary = AdversaryParams::reference_example();
        let params = MonteCarloParams { num_sims: 0, ..small_params(1) };
        assert!(run_monte_carlo(&plane, &adversary, &params).is_err());
    }

    #[test]
    fn test_zero_std_collapses_to_point_estimate() {
        let plane = PlaneParams::reference_example();
        let adversary = AdversaryParams::reference_example();
        let params = MonteCarloParams {
            num_sims: 16,
            mass_std: 0.0,
            isp_std: 0.0,
            base_rcs_std: 0.0,
            seed: Some(3),
        };

        let results = run_monte_carlo(&plane, &adversary, &params).unwrap();
        assert!(results.combined_score.std.abs() < 1e-12);
        assert!((results.combined_score.mean - 38.12633494792716).abs() < 1e-9);
        assert_eq!(results.angle_histogram.len(), 1);
    }

    #[test]
    fn test_field_statistics_basic() {
        let stats = field_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        // Sample std of 1..5 is sqrt(2.5)
        assert!((stats.std - 2.5_f64.sqrt()).abs() < 1e-12);
    }
}
