//! # Stealth Engine
//!
//! Leading-edge angle optimization and stealth upgrade trade-off engine.
//!
//! The crate combines a Tsiolkovsky-derived performance metric with a
//! sine-based radar cross section model, sweeps candidate leading-edge
//! angles for the minimum weighted score, and reports the stealth
//! enhancement ratio of an upgrade. A Monte Carlo layer runs perturbed
//! evaluations in parallel for dispersion analysis.

// Re-export the main types and functions
pub use api::{AdversaryParams, PlaneParams, StealthError, SweepOutcome, UpgradeResult};
pub use monte_carlo::{run_monte_carlo, MonteCarloParams, MonteCarloResults};
pub use optimizer::{optimize_leading_edge, sweep_candidates, CandidateScore};
pub use performance::{composite_performance, delta_v};
pub use stealth::{leading_edge_rcs, stealth_enhancement};
pub use upgrade::upgrade_leading_edge;

// Module declarations
pub mod api;
pub mod constants;
mod monte_carlo;
mod optimizer;
mod performance;
mod stealth;
mod upgrade;
