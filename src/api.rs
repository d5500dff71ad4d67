// Public API types shared by the library surface and the command-line tool
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Error type for upgrade pipeline operations
#[derive(Debug)]
pub struct StealthError {
    message: String,
}

impl fmt::Display for StealthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StealthError {}

impl From<String> for StealthError {
    fn from(msg: String) -> Self {
        StealthError { message: msg }
    }
}

impl From<&str> for StealthError {
    fn from(msg: &str) -> Self {
        StealthError { message: msg.to_string() }
    }
}

/// Airframe parameters for the plane under upgrade evaluation
///
/// All fields are expected positive. The core math does not validate them:
/// non-positive masses or zero factors propagate NaN/infinity per IEEE-754,
/// which is the caller's responsibility to avoid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneParams {
    pub mass: f64,              // kg
    pub isp: f64,               // seconds
    pub gravity: f64,           // m/s²
    pub base_rcs: f64,          // m², unswept reference signature
    pub shape_factor: f64,      // dimensionless
    pub material_factor: f64,   // dimensionless
    pub frequency_band: f64,    // GHz
}

/// Parameters for the adversary airframe used as the comparison mass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdversaryParams {
    pub mass: f64, // kg
}

/// Outcome of a leading-edge angle sweep
///
/// `best_angle_deg` is `None` only if no candidate was ever accepted; the
/// fixed sweep range always evaluates at least one candidate against an
/// infinite initial score, so callers normally see `Some`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub best_angle_deg: Option<u32>,
    pub best_score: f64,
    pub candidates_evaluated: usize,
}

/// Packaged result of a full upgrade evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeResult {
    pub optimal_angle: Option<u32>,
    pub combined_score: f64,
    pub stealth_improvement: f64,
}

impl PlaneParams {
    /// Reference airframe used by the CLI defaults and the documentation
    /// examples: a 20 t airframe with a 0.1 m² unswept signature.
    pub fn reference_example() -> Self {
        PlaneParams {
            mass: 20000.0,
            isp: 300.0,
            gravity: 9.81,
            base_rcs: 0.1,
            shape_factor: 5.0,
            material_factor: 8.0,
            frequency_band: 10.0,
        }
    }
}

impl AdversaryParams {
    /// Adversary mass paired with [`PlaneParams::reference_example`].
    pub fn reference_example() -> Self {
        AdversaryParams { mass: 15000.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_string() {
        let err = StealthError::from("zero denominator".to_string());
        assert_eq!(err.to_string(), "zero denominator");

        let err = StealthError::from("bad input");
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn test_reference_example_values() {
        let plane = PlaneParams::reference_example();
        assert_eq!(plane.mass, 20000.0);
        assert_eq!(plane.isp, 300.0);
        assert_eq!(plane.base_rcs, 0.1);

        let adversary = AdversaryParams::reference_example();
        assert_eq!(adversary.mass, 15000.0);
    }

    #[test]
    fn test_params_json_round_trip() {
        let plane = PlaneParams::reference_example();
        let json = serde_json::to_string(&plane).unwrap();
        let back: PlaneParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frequency_band, plane.frequency_band);
    }
}
