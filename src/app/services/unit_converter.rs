//! Acuity and distance unit conversions
//!
//! Pure functions over the fixed unit-factor tables. Out-of-domain inputs
//! propagate as `f64::NAN` sentinels rather than errors, matching the
//! convention that conversion never fails, it only goes undefined.

use crate::app::models::{Distance, DistanceUnit};

/// Convert decimal visual acuity to logMAR.
///
/// Undefined (NaN) for non-positive acuity.
pub fn decimal_to_logmar(decimal_va: f64) -> f64 {
    if decimal_va <= 0.0 {
        return f64::NAN;
    }
    -decimal_va.log10()
}

/// Convert logMAR to decimal visual acuity. Defined for every finite input.
pub fn logmar_to_decimal(logmar: f64) -> f64 {
    10f64.powf(-logmar)
}

/// Convert a distance magnitude between units via the meters basis
pub fn convert_distance(magnitude: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    magnitude * from.to_meters() / to.to_meters()
}

/// Recompute a logMAR score for a changed testing distance.
///
/// The angular subtense of a fixed-size optotype scales inversely with
/// viewing distance, so the score shifts by `log10(initial_m / new_m)`.
/// Only meaningful for notations that model a physical optotype at a
/// distance; callers gate on
/// [`ParsedMeasurement::supports_distance_adjustment`](crate::ParsedMeasurement::supports_distance_adjustment)
/// before calling this.
pub fn adjust_logmar_for_distance(
    initial_logmar: f64,
    initial_distance: &Distance,
    new_distance: &Distance,
) -> f64 {
    let initial_meters = initial_distance.meters();
    let new_meters = new_distance.meters();
    initial_logmar + (initial_meters / new_meters).log10()
}

/// Snellen fraction to decimal visual acuity
pub fn snellen_to_decimal(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator
}

/// Snellen fraction to logMAR
pub fn snellen_to_logmar(numerator: f64, denominator: f64) -> f64 {
    decimal_to_logmar(snellen_to_decimal(numerator, denominator))
}
