//! Visual acuity notation classifier
//!
//! The central engine: given raw VA text, tries notation rules in a fixed
//! precedence order and returns a typed, validated measurement.
//!
//! ## Architecture
//!
//! The classifier is organized into rule components:
//! - [`classifier`] - Rule orchestration and forced-suffix handling
//! - [`near_vision`] - N-font and Jaeger print size rules
//! - [`fraction`] - Snellen fraction rule with numerator unit resolution
//! - [`numeric`] - Numeric fallback (letters read, decimal, direct logMAR)
//!
//! ## Precedence
//!
//! Coded term, N-font, Jaeger, then fraction and numeric fallback after
//! forced-suffix extraction. First match wins; the order is part of the
//! contract because the textual forms are ambiguous.
//!
//! ## Usage
//!
//! ```rust
//! use acuity_parser::{classify, ParsedMeasurement};
//!
//! let measurement = classify("6/6")?;
//! assert!(matches!(measurement, ParsedMeasurement::MeterSnellen { .. }));
//! assert_eq!(measurement.logmar(), Some(0.0));
//! # Ok::<(), acuity_parser::Error>(())
//! ```

pub mod classifier;
pub mod fraction;
pub mod near_vision;
pub mod numeric;

#[cfg(test)]
pub mod tests;

// Re-export the main entry point
pub use classifier::classify;
