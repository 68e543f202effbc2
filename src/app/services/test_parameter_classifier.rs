//! Test parameter classification
//!
//! Classifies ancillary free text accompanying a VA entry: an explicit
//! distance override, an optical correction, a chart type, an optotype, or
//! a testing method. The label vocabulary is closed and caller-supplied;
//! bucketing within it uses fixed substring markers. The markers are a
//! known heuristic policy carried over from the source vocabulary, not an
//! inferred rule; do not "fix" them.

use tracing::debug;

use crate::app::models::TestParameter;
use crate::app::services::distance_parser::parse_distance;
use crate::{Error, Result};

/// Labels containing any of these name an optical correction
const CORRECTION_MARKERS: &[&str] = &["Lenses", "Glasses", "Contact", "Pinhole", "Occluder"];

/// Labels containing any of these name an optotype variety
const OPTOTYPE_MARKERS: &[&str] = &["E", "Symbol", "Letter", "Number", "Picture", "Landolt C"];

/// Classify free text against a known parameter vocabulary.
///
/// A distance parse is attempted first, so "3m" never falls through to the
/// label match. Label matching is exact and case-insensitive; the substring
/// buckets then run against the canonical label, case-sensitively.
pub fn classify_parameter(text: &str, known_labels: &[&str]) -> Result<TestParameter> {
    let input = text.trim();
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    if let Ok(distance) = parse_distance(input) {
        debug!(%distance, "parameter classified as distance override");
        return Ok(TestParameter::Distance(distance));
    }

    let matched = known_labels
        .iter()
        .find(|label| label.eq_ignore_ascii_case(input))
        .copied()
        .ok_or_else(|| Error::unrecognized_parameter(input))?;

    Ok(classify_label(matched))
}

/// Bucket a matched vocabulary label by fixed substring markers, in
/// precedence order: chart, correction, optotype, then method as the
/// default bucket.
fn classify_label(label: &str) -> TestParameter {
    if label.contains("chart") {
        return TestParameter::ChartType(label.to_string());
    }

    if CORRECTION_MARKERS.iter().any(|marker| label.contains(marker))
        || label == "None - Uncorrected"
    {
        return TestParameter::Correction(label.to_string());
    }

    if OPTOTYPE_MARKERS.iter().any(|marker| label.contains(marker))
        || label == "Pictogramm"
        || label == "Orientation-Type Optotypes"
    {
        return TestParameter::Optotype(label.to_string());
    }

    TestParameter::Method(label.to_string())
}
