//! Explicit testing distance parsing
//!
//! Parses user-entered distance strings such as "6m", "35cm", or "2,5 m"
//! into validated [`Distance`] values. A parsed distance is always marked
//! `explicit = true`: the caller typed it deliberately.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::app::models::{Distance, DistanceUnit};
use crate::constants::VALID_DISTANCE_UNITS;
use crate::{Error, Result};

static UNIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+)$").expect("unit suffix pattern is valid"));

/// Parse a "<number><unit>" distance string.
///
/// The unit token must be one of m, cm, mm, ft, in (case-insensitive); the
/// magnitude accepts "," as a decimal separator and must be strictly
/// positive.
pub fn parse_distance(text: &str) -> Result<Distance> {
    let input = text.trim();
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let token = UNIT_SUFFIX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            Error::invalid_format(format!(
                "Missing unit (e.g., {})",
                VALID_DISTANCE_UNITS.join(", ")
            ))
        })?
        .as_str();

    let unit = DistanceUnit::parse(token).ok_or_else(|| {
        Error::invalid_format(format!(
            "Invalid unit: {}, use: {}",
            token,
            VALID_DISTANCE_UNITS.join(", ")
        ))
    })?;

    let magnitude_str = input[..input.len() - token.len()].trim();
    let magnitude: f64 = magnitude_str
        .replace(',', ".")
        .parse()
        .map_err(|_| Error::invalid_format(format!("Invalid magnitude: '{}'", magnitude_str)))?;

    debug!(magnitude, unit = %unit, "parsed explicit distance");
    Distance::new(magnitude, unit, true)
}
