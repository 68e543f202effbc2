//! Test utilities for the notation classifier
//!
//! Shared helpers used across the classifier test modules.

use crate::app::models::ParsedMeasurement;
use crate::app::services::notation_classifier::classify;

mod error_tests;
mod roundtrip_tests;

/// Classify and unwrap, panicking with the input on failure
pub fn classify_ok(input: &str) -> ParsedMeasurement {
    match classify(input) {
        Ok(measurement) => measurement,
        Err(err) => panic!("expected '{}' to classify, got {:?}", input, err),
    }
}

/// Classify, expecting failure
pub fn classify_err(input: &str) -> crate::Error {
    match classify(input) {
        Ok(measurement) => panic!(
            "expected '{}' to fail, got {:?}",
            input,
            measurement.notation_name()
        ),
        Err(err) => err,
    }
}

/// Assert two floats agree to within 1e-9
pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}
