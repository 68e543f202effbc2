//! Numeric fallback rule
//!
//! The last rule in the chain: a bare number is letters-read, decimal, or
//! direct logMAR depending on the "dec" suffix and the whole-number
//! threshold.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::app::models::ParsedMeasurement;
use crate::app::services::unit_converter::{decimal_to_logmar, logmar_to_decimal};
use crate::constants::default_distances;
use crate::{Error, Result};

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9.,]+$").expect("numeric pattern is valid"));

/// Whole numbers above this count as optotypes read on a line; at or below
/// it they are acuity scores. The boundary is a fixed heuristic from
/// clinical usage, not a derived rule; keep it as-is.
const LETTERS_READ_THRESHOLD: f64 = 3.0;

/// Parse the numeric fallback: "5" (letters read), "0.3dec" (decimal),
/// or "0.18" (direct logMAR).
pub(super) fn parse_numeric(input: &str) -> Result<ParsedMeasurement> {
    let (body, is_decimal) = strip_dec_suffix(input);

    if !NUMERIC.is_match(body) {
        return Err(Error::invalid_format("Invalid characters for numeric input"));
    }

    let value: f64 = body
        .replace(',', ".")
        .parse()
        .map_err(|_| Error::invalid_format("Cannot parse numeric"))?;

    if value.fract() == 0.0 && value > LETTERS_READ_THRESHOLD {
        debug!(letters = value, "numeric fallback: letters read");
        return Ok(ParsedMeasurement::LettersRead {
            letters: value as u32,
            distance: default_distances::letters_read(),
        });
    }

    if is_decimal {
        debug!(decimal_value = value, "numeric fallback: decimal notation");
        return Ok(ParsedMeasurement::Decimal {
            decimal_value: value,
            logmar: decimal_to_logmar(value),
            distance: default_distances::chart(),
        });
    }

    debug!(logmar = value, "numeric fallback: direct logMAR");
    Ok(ParsedMeasurement::LogmarDirect {
        logmar: value,
        decimal_va: logmar_to_decimal(value),
        distance: default_distances::chart(),
    })
}

/// Strip a trailing "dec" marker, case-insensitively
fn strip_dec_suffix(input: &str) -> (&str, bool) {
    if input.len() >= 3 {
        let split = input.len() - 3;
        if input.is_char_boundary(split) && input[split..].eq_ignore_ascii_case("dec") {
            return (input[..split].trim_end(), true);
        }
    }
    (input, false)
}
