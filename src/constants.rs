/// Model constants for the leading-edge sweep and performance metric

/// Lower bound of the leading-edge sweep, inclusive (degrees)
pub const SWEEP_START_DEG: u32 = 0;

/// Upper bound of the leading-edge sweep, inclusive (degrees)
pub const SWEEP_END_DEG: u32 = 60;

/// Step between sweep candidates (degrees)
pub const SWEEP_STEP_DEG: u32 = 5;

/// Fixed phase bias applied to the sweep angle before the RCS sine term (radians)
///
/// The bias is baked into the signature model and is not configurable:
/// `rcs = base_rcs * sin(angle_rad + RCS_PHASE_BIAS_RAD)`. It keeps the
/// RCS term nonzero at a 0-degree leading edge.
pub const RCS_PHASE_BIAS_RAD: f64 = 0.1;

/// Weight applied to the performance metric when combined with RCS
///
/// `score = rcs + PERFORMANCE_WEIGHT * performance`. The sweep minimizes
/// the combined score, so a small weight lets the RCS term drive the
/// choice of angle while performance acts as a tie-breaking offset.
pub const PERFORMANCE_WEIGHT: f64 = 0.01;

/// Coefficient of the delta-V bonus term in the two-parameter metric
pub const DV_BONUS_COEFF: f64 = 0.1;

/// Exponent of the delta-V bonus term in the two-parameter metric
pub const DV_BONUS_EXP: f64 = 0.8;

/// Coefficient of the average-acceleration term in the three-parameter metric
pub const AVG_ACCEL_COEFF: f64 = 0.2;

/// Exponent of the average-acceleration term in the three-parameter metric
pub const AVG_ACCEL_EXP: f64 = 0.7;

/// Exponent of the burn-time term in the three-parameter metric
pub const BURN_TIME_EXP: f64 = 0.3;
