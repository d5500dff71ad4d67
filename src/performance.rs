//! Composite performance metric built on the Tsiolkovsky rocket equation
use crate::constants::{
    AVG_ACCEL_COEFF, AVG_ACCEL_EXP, BURN_TIME_EXP, DV_BONUS_COEFF, DV_BONUS_EXP,
};
use tracing::{debug, trace};

/// Compute the composite performance metric for a residues/moduli pair.
///
/// Two input shapes are recognized:
///
/// - two elements each: `residues = [mi, mf]`, `moduli = [isp, g]`, giving
///   `dv + 0.1 * dv^0.8 + M` with `dv = isp * g * ln(mi / mf)`;
/// - three elements each: `residues = [mi, thrust, isp]`,
///   `moduli = [mf, burn_time, g]`, giving
///   `dv + 0.2 * avg_acc^0.7 + burn_time^0.3 + M` with
///   `avg_acc = thrust / ((mi + mf) / 2)`.
///
/// `M` is the product of all moduli in both shapes. A non-physical mass
/// ordering (`mi <= mf`) and any other length combination, mismatched
/// lengths included, return 0. Domain violations are not guarded: a
/// non-positive mass ratio or a negative base under a fractional exponent
/// propagates NaN per `f64::ln`/`f64::powf`.
pub fn composite_performance(residues: &[f64], moduli: &[f64]) -> f64 {
    let m: f64 = moduli.iter().product();
    trace!(?residues, ?moduli, moduli_product = m, "evaluating composite performance");

    match (residues, moduli) {
        ([mi, mf], [isp, g]) => {
            if mi <= mf {
                debug!(mi, mf, "mass ratio not positive, returning 0");
                return 0.0;
            }
            let dv = isp * g * (mi / mf).ln();
            let result = dv + DV_BONUS_COEFF * dv.powf(DV_BONUS_EXP) + m;
            trace!(dv, result, "two-parameter model");
            result
        }
        ([mi, thrust, isp], [mf, burn_time, g]) => {
            if mi <= mf {
                debug!(mi, mf, "mass ratio not positive, returning 0");
                return 0.0;
            }
            // isp and g sit in opposite halves of the input in this shape
            let dv = isp * g * (mi / mf).ln();
            let avg_acc = thrust / ((mi + mf) / 2.0);
            let result = dv
                + AVG_ACCEL_COEFF * avg_acc.powf(AVG_ACCEL_EXP)
                + burn_time.powf(BURN_TIME_EXP)
                + m;
            trace!(dv, avg_acc, result, "three-parameter model");
            result
        }
        _ => {
            debug!(
                residues_len = residues.len(),
                moduli_len = moduli.len(),
                "unrecognized input shape, returning 0"
            );
            0.0
        }
    }
}

/// Characteristic velocity change from the Tsiolkovsky rocket equation.
pub fn delta_v(isp: f64, gravity: f64, initial_mass: f64, final_mass: f64) -> f64 {
    isp * gravity * (initial_mass / final_mass).ln()
}
