//! Rule orchestration for VA text classification
//!
//! Applies the notation rules in their fixed precedence order and handles
//! the forced distance suffix that feeds the fraction and numeric rules.

use tracing::debug;

use super::{fraction, near_vision, numeric};
use crate::app::models::{DistanceUnit, ParsedMeasurement};
use crate::constants::{self, default_distances};
use crate::{Error, Result};

/// Classify a raw VA entry into a typed measurement.
///
/// Input is trimmed here; matching is case-insensitive throughout. Rules
/// run in order, first match wins:
///
/// 1. Exact coded term ("HM - Hand movement", ...)
/// 2. N-font ("N8")
/// 3. Jaeger ("3J")
/// 4. Forced distance suffix extraction ("...m" / "...ft")
/// 5. Snellen fraction ("6/6", "20/40")
/// 6. Numeric fallback ("5", "0.3dec", "0.18")
pub fn classify(text: &str) -> Result<ParsedMeasurement> {
    let input = text.trim();
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    if let Some(term) = constants::find_coded_term(input) {
        debug!(label = term.label, "matched coded term");
        return Ok(ParsedMeasurement::Coded {
            label: term.label.to_string(),
            code_system: term.code_system,
            code_string: term.code_string.to_string(),
            approximate_logmar: term.approximate_logmar,
            distance: default_distances::coded(),
        });
    }

    if let Some(result) = near_vision::parse_n_font(input) {
        return result;
    }

    if let Some(result) = near_vision::parse_jaeger(input) {
        return result;
    }

    let (stripped, forced_unit) = strip_forced_unit(input);
    if forced_unit.is_some() {
        debug!(stripped, ?forced_unit, "stripped forced distance suffix");
    }

    if let Some(result) = fraction::parse_fraction(stripped, forced_unit) {
        return result;
    }

    // A trailing unit only influences fraction parsing; the numeric fallback
    // keeps its own notation default distance.
    numeric::parse_numeric(stripped)
}

/// Strip a trailing "m" or "ft" distance suffix, if present.
///
/// Only runs after the N-font and Jaeger rules, so their trailing letters
/// are never consumed here.
fn strip_forced_unit(input: &str) -> (&str, Option<DistanceUnit>) {
    let bytes = input.as_bytes();

    if let [.., last] = bytes {
        if last.eq_ignore_ascii_case(&b'm') {
            return (input[..input.len() - 1].trim_end(), Some(DistanceUnit::M));
        }
    }

    if let [.., a, b] = bytes {
        if a.eq_ignore_ascii_case(&b'f') && b.eq_ignore_ascii_case(&b't') {
            return (input[..input.len() - 2].trim_end(), Some(DistanceUnit::Ft));
        }
    }

    (input, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_forced_unit_meters() {
        assert_eq!(strip_forced_unit("6/6m"), ("6/6", Some(DistanceUnit::M)));
        assert_eq!(strip_forced_unit("6/6 M"), ("6/6", Some(DistanceUnit::M)));
    }

    #[test]
    fn test_strip_forced_unit_feet() {
        assert_eq!(
            strip_forced_unit("20/40ft"),
            ("20/40", Some(DistanceUnit::Ft))
        );
        assert_eq!(
            strip_forced_unit("20/40FT"),
            ("20/40", Some(DistanceUnit::Ft))
        );
    }

    #[test]
    fn test_strip_forced_unit_absent() {
        assert_eq!(strip_forced_unit("6/6"), ("6/6", None));
        assert_eq!(strip_forced_unit("0.3"), ("0.3", None));
    }
}
