//! Acuity Parser Library
//!
//! A Rust library for classifying free-text clinical visual acuity (VA)
//! entries into typed measurement notations and converting between them.
//!
//! This library provides tools for:
//! - Classifying VA text into Snellen fractions, direct logMAR, decimal
//!   notation, letters-read counts, N-font and Jaeger near-vision sizes, or
//!   a fixed vocabulary of coded qualitative terms
//! - Deriving a common logMAR equivalent with default or explicit testing
//!   distances attached
//! - Adjusting logMAR scores for a changed testing distance
//! - Parsing lens-power ("diopter") shorthand such as `1q` or `-3t`
//! - Classifying ancillary test-parameter text into distance, correction,
//!   chart type, optotype, or testing method
//!
//! All operations are pure functions over immutable static tables: no I/O,
//! no shared state, safe to call concurrently from any number of threads.

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod diopter_parser;
        pub mod distance_parser;
        pub mod notation_classifier;
        pub mod test_parameter_classifier;
        pub mod unit_converter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types and entry points
pub use app::models::{
    CodeSystem, DiopterShorthand, DiopterValue, Distance, DistanceUnit, ParsedMeasurement,
    TestParameter,
};
pub use app::services::diopter_parser::parse_diopter;
pub use app::services::distance_parser::parse_distance;
pub use app::services::notation_classifier::classify;
pub use app::services::test_parameter_classifier::classify_parameter;

/// Result type alias for the acuity parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for acuity classification operations
///
/// Every failure is an expected, recoverable user-input problem. Classifiers
/// are leaf operations: errors surface directly to the caller and are never
/// retried, since parsing is deterministic.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty or whitespace-only
    #[error("Empty input")]
    EmptyInput,

    /// Input text does not conform to any accepted notation shape
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// N-font or Jaeger size absent from the conversion tables
    #[error("Unrecognized {notation} size: {value}")]
    UnrecognizedCode { notation: String, value: String },

    /// Testing distance magnitude was zero or negative
    #[error("Distance must be positive, got {magnitude}")]
    NonPositiveMagnitude { magnitude: f64 },

    /// Test-parameter text matched neither a distance nor a known label
    #[error("Input not recognized as a valid parameter: '{input}'")]
    UnrecognizedParameter { input: String },
}

impl Error {
    /// Create an invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an unrecognized notation size error
    pub fn unrecognized_code(notation: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnrecognizedCode {
            notation: notation.into(),
            value: value.into(),
        }
    }

    /// Create a non-positive distance magnitude error
    pub fn non_positive_magnitude(magnitude: f64) -> Self {
        Self::NonPositiveMagnitude { magnitude }
    }

    /// Create an unrecognized parameter error
    pub fn unrecognized_parameter(input: impl Into<String>) -> Self {
        Self::UnrecognizedParameter {
            input: input.into(),
        }
    }
}
