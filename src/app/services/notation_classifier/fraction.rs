//! Snellen fraction rule
//!
//! A single "/" splits the entry into numerator and denominator. The
//! numerator doubles as the testing distance, so unit resolution decides
//! both the variant (meter vs feet Snellen) and the distance provenance.

use tracing::debug;

use crate::app::models::{Distance, DistanceUnit, ParsedMeasurement};
use crate::app::services::unit_converter::decimal_to_logmar;
use crate::{Error, Result};

/// Try the fraction rule. `None` when the text contains no "/" at all;
/// every slash-containing form resolves here, one way or another.
pub(super) fn parse_fraction(
    input: &str,
    forced_unit: Option<DistanceUnit>,
) -> Option<Result<ParsedMeasurement>> {
    match input.matches('/').count() {
        0 => None,
        1 => Some(parse_parts(input, forced_unit)),
        _ => Some(Err(Error::invalid_format("Too many slashes"))),
    }
}

fn parse_parts(input: &str, forced_unit: Option<DistanceUnit>) -> Result<ParsedMeasurement> {
    let Some((num_str, den_str)) = input.split_once('/') else {
        return Err(Error::invalid_format("Incomplete fraction"));
    };
    let num_str = num_str.trim();
    let den_str = den_str.trim();

    if num_str.is_empty() || den_str.is_empty() {
        return Err(Error::invalid_format("Incomplete fraction"));
    }

    let numerator: f64 = num_str
        .replace(',', ".")
        .parse()
        .map_err(|_| Error::invalid_format("Fraction not numeric"))?;
    let denominator: f64 = den_str
        .replace(',', ".")
        .parse()
        .map_err(|_| Error::invalid_format("Fraction not numeric"))?;

    let (unit, distance) = resolve_unit(numerator, forced_unit)?;

    let decimal_va = numerator / denominator;
    // Undefined acuity stays NaN; the fraction itself is still well-formed
    let logmar = decimal_to_logmar(decimal_va);

    debug!(numerator, denominator, unit = %unit, "matched Snellen fraction");
    Ok(match unit {
        DistanceUnit::Ft => ParsedMeasurement::FeetSnellen {
            numerator,
            denominator,
            decimal_va,
            logmar,
            distance,
        },
        _ => ParsedMeasurement::MeterSnellen {
            numerator,
            denominator,
            decimal_va,
            logmar,
            distance,
        },
    })
}

/// Resolve the fraction's unit and testing distance from the numerator.
///
/// A forced suffix wins outright. Otherwise 20 and 6 are the conventional
/// chart anchors (implicit distance); any other numerator is taken as an
/// explicit distance, feet iff it exceeds 6.
fn resolve_unit(
    numerator: f64,
    forced_unit: Option<DistanceUnit>,
) -> Result<(DistanceUnit, Distance)> {
    if let Some(unit) = forced_unit {
        return Ok((unit, Distance::new(numerator, unit, true)?));
    }

    if numerator == 20.0 {
        return Ok((
            DistanceUnit::Ft,
            Distance::implicit(20.0, DistanceUnit::Ft),
        ));
    }
    if numerator == 6.0 {
        return Ok((DistanceUnit::M, Distance::implicit(6.0, DistanceUnit::M)));
    }

    let unit = if numerator > 6.0 {
        DistanceUnit::Ft
    } else {
        DistanceUnit::M
    };
    Ok((unit, Distance::new(numerator, unit, true)?))
}
