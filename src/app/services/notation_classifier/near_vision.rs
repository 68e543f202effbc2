//! N-font and Jaeger near-vision print size rules
//!
//! Both notations name a conventional print size with a fixed logMAR
//! equivalence table. A size absent from its table is an error, not a
//! silent pass-through.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::app::models::ParsedMeasurement;
use crate::app::services::unit_converter::logmar_to_decimal;
use crate::constants::{self, default_distances};
use crate::{Error, Result};

static N_FONT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Nn]\d+$").expect("N-font pattern is valid"));

static JAEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[Jj]$").expect("Jaeger pattern is valid"));

/// Try the N-font rule ("N8"). Returns `None` when the shape does not
/// match, so the next rule runs; a matching shape with an unknown size is
/// a final error.
pub(super) fn parse_n_font(input: &str) -> Option<Result<ParsedMeasurement>> {
    if !N_FONT.is_match(input) {
        return None;
    }

    let digits = &input[1..];
    Some(build_n_font(digits))
}

fn build_n_font(digits: &str) -> Result<ParsedMeasurement> {
    let n_value: u32 = digits
        .parse()
        .map_err(|_| Error::unrecognized_code("N-font", digits))?;

    let logmar = constants::n_font_logmar(n_value)
        .ok_or_else(|| Error::unrecognized_code("N-font", digits))?;

    debug!(n_value, logmar, "matched N-font size");
    Ok(ParsedMeasurement::NFont {
        n_value,
        logmar,
        decimal_va: logmar_to_decimal(logmar),
        distance: default_distances::near_print(),
    })
}

/// Try the Jaeger rule ("3J"). Same contract as [`parse_n_font`].
pub(super) fn parse_jaeger(input: &str) -> Option<Result<ParsedMeasurement>> {
    if !JAEGER.is_match(input) {
        return None;
    }

    let digits = &input[..input.len() - 1];
    Some(build_jaeger(digits))
}

fn build_jaeger(digits: &str) -> Result<ParsedMeasurement> {
    let j_value: u32 = digits
        .parse()
        .map_err(|_| Error::unrecognized_code("Jaeger", digits))?;

    let logmar = constants::jaeger_logmar(j_value)
        .ok_or_else(|| Error::unrecognized_code("Jaeger", digits))?;

    debug!(j_value, logmar, "matched Jaeger size");
    Ok(ParsedMeasurement::Jaeger {
        j_value,
        logmar,
        decimal_va: logmar_to_decimal(logmar),
        distance: default_distances::near_print(),
    })
}
