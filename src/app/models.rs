//! Core data structures for acuity classification.
//!
//! Defines distances, measurement notations, terminology code bindings,
//! diopter values, and test parameters. Every value is created fresh per
//! classification call and is immutable once returned.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::unit_factors;
use crate::{Error, Result};

/// Distance units accepted for testing distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    M,
    Cm,
    Mm,
    Ft,
    In,
}

impl DistanceUnit {
    /// Parse a unit token, case-insensitively
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "m" => Some(DistanceUnit::M),
            "cm" => Some(DistanceUnit::Cm),
            "mm" => Some(DistanceUnit::Mm),
            "ft" => Some(DistanceUnit::Ft),
            "in" => Some(DistanceUnit::In),
            _ => None,
        }
    }

    /// Canonical lowercase token for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::M => "m",
            DistanceUnit::Cm => "cm",
            DistanceUnit::Mm => "mm",
            DistanceUnit::Ft => "ft",
            DistanceUnit::In => "in",
        }
    }

    /// Fixed conversion factor from this unit to meters
    pub fn to_meters(&self) -> f64 {
        match self {
            DistanceUnit::M => unit_factors::METER,
            DistanceUnit::Cm => unit_factors::CENTIMETER,
            DistanceUnit::Mm => unit_factors::MILLIMETER,
            DistanceUnit::Ft => unit_factors::FOOT,
            DistanceUnit::In => unit_factors::INCH,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A testing distance with provenance.
///
/// `explicit = false` marks a system-supplied default; `true` marks a value
/// the user entered deliberately. Invariant: `magnitude > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub magnitude: f64,
    pub unit: DistanceUnit,
    pub explicit: bool,
}

impl Distance {
    /// Create a distance, validating the positive-magnitude invariant
    pub fn new(magnitude: f64, unit: DistanceUnit, explicit: bool) -> Result<Self> {
        if !(magnitude > 0.0) {
            return Err(Error::non_positive_magnitude(magnitude));
        }
        Ok(Self {
            magnitude,
            unit,
            explicit,
        })
    }

    /// A system-supplied default distance (magnitudes come from fixed tables)
    pub fn implicit(magnitude: f64, unit: DistanceUnit) -> Self {
        Self {
            magnitude,
            unit,
            explicit: false,
        }
    }

    /// This distance expressed in meters
    pub fn meters(&self) -> f64 {
        self.magnitude * self.unit.to_meters()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

/// External terminology systems referenced by coded terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeSystem {
    #[serde(rename = "SNOMED-CT")]
    SnomedCt,
    #[serde(rename = "LOINC")]
    Loinc,
    #[serde(rename = "local")]
    Local,
}

impl CodeSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeSystem::SnomedCt => "SNOMED-CT",
            CodeSystem::Loinc => "LOINC",
            CodeSystem::Local => "local",
        }
    }
}

impl fmt::Display for CodeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static row binding a qualitative term to its terminology code
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodedTerm {
    pub label: &'static str,
    pub code_system: CodeSystem,
    pub code_string: &'static str,
    pub approximate_logmar: Option<f64>,
}

/// A classified visual acuity measurement.
///
/// Exactly one variant per successful classification; malformed input is an
/// `Err`, never a partially-filled variant. Adding a notation here is a
/// compile-time-checked change at every consumption site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "notation", rename_all = "snake_case")]
pub enum ParsedMeasurement {
    /// Coded qualitative term (HM, CF, NPL, ...)
    Coded {
        label: String,
        code_system: CodeSystem,
        code_string: String,
        approximate_logmar: Option<f64>,
        distance: Distance,
    },
    /// Snellen fraction in meters, e.g. "6/6"
    MeterSnellen {
        numerator: f64,
        denominator: f64,
        decimal_va: f64,
        logmar: f64,
        distance: Distance,
    },
    /// Snellen fraction in feet, e.g. "20/40"
    FeetSnellen {
        numerator: f64,
        denominator: f64,
        decimal_va: f64,
        logmar: f64,
        distance: Distance,
    },
    /// Decimal acuity, e.g. "0.5dec"
    Decimal {
        decimal_value: f64,
        logmar: f64,
        distance: Distance,
    },
    /// Count of optotypes read on a line, e.g. "5"
    LettersRead { letters: u32, distance: Distance },
    /// Direct logMAR score, e.g. "0.18"
    LogmarDirect {
        logmar: f64,
        decimal_va: f64,
        distance: Distance,
    },
    /// N-font near-vision print size, e.g. "N8"
    NFont {
        n_value: u32,
        logmar: f64,
        decimal_va: f64,
        distance: Distance,
    },
    /// Jaeger near-vision print size, e.g. "3J"
    Jaeger {
        j_value: u32,
        logmar: f64,
        decimal_va: f64,
        distance: Distance,
    },
}

impl ParsedMeasurement {
    /// Short notation name for display and logging
    pub fn notation_name(&self) -> &'static str {
        match self {
            ParsedMeasurement::Coded { .. } => "coded",
            ParsedMeasurement::MeterSnellen { .. } => "meter-snellen",
            ParsedMeasurement::FeetSnellen { .. } => "feet-snellen",
            ParsedMeasurement::Decimal { .. } => "decimal",
            ParsedMeasurement::LettersRead { .. } => "letters-read",
            ParsedMeasurement::LogmarDirect { .. } => "logmar",
            ParsedMeasurement::NFont { .. } => "n-font",
            ParsedMeasurement::Jaeger { .. } => "jaeger",
        }
    }

    /// The testing distance attached to this measurement
    pub fn distance(&self) -> &Distance {
        match self {
            ParsedMeasurement::Coded { distance, .. }
            | ParsedMeasurement::MeterSnellen { distance, .. }
            | ParsedMeasurement::FeetSnellen { distance, .. }
            | ParsedMeasurement::Decimal { distance, .. }
            | ParsedMeasurement::LettersRead { distance, .. }
            | ParsedMeasurement::LogmarDirect { distance, .. }
            | ParsedMeasurement::NFont { distance, .. }
            | ParsedMeasurement::Jaeger { distance, .. } => distance,
        }
    }

    /// The logMAR equivalent, where one is defined.
    ///
    /// Coded terms only carry an approximate value (often none); letters-read
    /// counts have no logMAR equivalence at all.
    pub fn logmar(&self) -> Option<f64> {
        match self {
            ParsedMeasurement::Coded {
                approximate_logmar, ..
            } => *approximate_logmar,
            ParsedMeasurement::LettersRead { .. } => None,
            ParsedMeasurement::MeterSnellen { logmar, .. }
            | ParsedMeasurement::FeetSnellen { logmar, .. }
            | ParsedMeasurement::Decimal { logmar, .. }
            | ParsedMeasurement::LogmarDirect { logmar, .. }
            | ParsedMeasurement::NFont { logmar, .. }
            | ParsedMeasurement::Jaeger { logmar, .. } => Some(*logmar),
        }
    }

    /// The decimal VA equivalent, where one is defined
    pub fn decimal_va(&self) -> Option<f64> {
        match self {
            ParsedMeasurement::Coded { .. } | ParsedMeasurement::LettersRead { .. } => None,
            ParsedMeasurement::Decimal { decimal_value, .. } => Some(*decimal_value),
            ParsedMeasurement::MeterSnellen { decimal_va, .. }
            | ParsedMeasurement::FeetSnellen { decimal_va, .. }
            | ParsedMeasurement::LogmarDirect { decimal_va, .. }
            | ParsedMeasurement::NFont { decimal_va, .. }
            | ParsedMeasurement::Jaeger { decimal_va, .. } => Some(*decimal_va),
        }
    }

    /// Whether the logMAR-vs-distance adjustment applies to this notation.
    ///
    /// The adjustment models the angular subtense of a physical optotype and
    /// is undefined for coded terms and letters-read counts, which have no
    /// size/distance relationship. Callers must gate on this before invoking
    /// `unit_converter::adjust_logmar_for_distance`.
    pub fn supports_distance_adjustment(&self) -> bool {
        !matches!(
            self,
            ParsedMeasurement::Coded { .. } | ParsedMeasurement::LettersRead { .. }
        )
    }

    /// The canonical text form of this measurement.
    ///
    /// Re-classifying the canonical text yields an equivalent measurement.
    /// Snellen fractions carry their unit suffix only when the distance was
    /// explicit, so the implicit/explicit provenance survives the round trip.
    pub fn canonical_text(&self) -> String {
        match self {
            ParsedMeasurement::Coded { label, .. } => label.clone(),
            ParsedMeasurement::MeterSnellen {
                numerator,
                denominator,
                distance,
                ..
            } => {
                if distance.explicit {
                    format!("{}/{}m", numerator, denominator)
                } else {
                    format!("{}/{}", numerator, denominator)
                }
            }
            ParsedMeasurement::FeetSnellen {
                numerator,
                denominator,
                distance,
                ..
            } => {
                if distance.explicit {
                    format!("{}/{}ft", numerator, denominator)
                } else {
                    format!("{}/{}", numerator, denominator)
                }
            }
            ParsedMeasurement::Decimal { decimal_value, .. } => format!("{}dec", decimal_value),
            ParsedMeasurement::LettersRead { letters, .. } => letters.to_string(),
            ParsedMeasurement::LogmarDirect { logmar, .. } => logmar.to_string(),
            ParsedMeasurement::NFont { n_value, .. } => format!("N{}", n_value),
            ParsedMeasurement::Jaeger { j_value, .. } => format!("{}J", j_value),
        }
    }
}

/// A classified test-parameter entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TestParameter {
    /// Explicit testing distance override, e.g. "3m"
    Distance(Distance),
    /// Optical correction in place during the test
    Correction(String),
    /// Acuity chart used
    ChartType(String),
    /// Optotype variety shown
    Optotype(String),
    /// Testing method (default bucket for anything else in the vocabulary)
    Method(String),
}

/// Shorthand letters for fractional diopter steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiopterShorthand {
    /// `q`: quarter step, 0.25
    Quarter,
    /// `h`: half step, 0.5
    Half,
    /// `t`: three-quarter step, 0.75
    ThreeQuarter,
}

impl DiopterShorthand {
    /// Parse the shorthand letter, case-insensitively
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'q' => Some(DiopterShorthand::Quarter),
            'h' => Some(DiopterShorthand::Half),
            't' => Some(DiopterShorthand::ThreeQuarter),
            _ => None,
        }
    }

    /// The unsigned fractional step this letter adds to the base integer
    pub fn step(&self) -> f64 {
        match self {
            DiopterShorthand::Quarter => 0.25,
            DiopterShorthand::Half => 0.5,
            DiopterShorthand::ThreeQuarter => 0.75,
        }
    }

    /// The shorthand letter itself
    pub fn symbol(&self) -> char {
        match self {
            DiopterShorthand::Quarter => 'q',
            DiopterShorthand::Half => 'h',
            DiopterShorthand::ThreeQuarter => 't',
        }
    }
}

/// A parsed lens power value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiopterValue {
    pub value: f64,
    pub shorthand: Option<DiopterShorthand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_new_rejects_non_positive() {
        assert!(Distance::new(6.0, DistanceUnit::M, true).is_ok());
        assert_eq!(
            Distance::new(0.0, DistanceUnit::M, true),
            Err(Error::non_positive_magnitude(0.0))
        );
        assert!(Distance::new(-3.0, DistanceUnit::Ft, false).is_err());
    }

    #[test]
    fn test_distance_meters() {
        let d = Distance::implicit(35.0, DistanceUnit::Cm);
        assert!((d.meters() - 0.35).abs() < 1e-12);

        let d = Distance::implicit(20.0, DistanceUnit::Ft);
        assert!((d.meters() - 6.096).abs() < 1e-12);
    }

    #[test]
    fn test_unit_parse_case_insensitive() {
        assert_eq!(DistanceUnit::parse("CM"), Some(DistanceUnit::Cm));
        assert_eq!(DistanceUnit::parse("Ft"), Some(DistanceUnit::Ft));
        assert_eq!(DistanceUnit::parse("km"), None);
    }

    #[test]
    fn test_distance_display() {
        let d = Distance::implicit(6.0, DistanceUnit::M);
        assert_eq!(d.to_string(), "6m");
        let d = Distance::implicit(0.5, DistanceUnit::Ft);
        assert_eq!(d.to_string(), "0.5ft");
    }

    #[test]
    fn test_supports_distance_adjustment_gating() {
        let coded = ParsedMeasurement::Coded {
            label: "HM - Hand movement".to_string(),
            code_system: CodeSystem::SnomedCt,
            code_string: "260295004".to_string(),
            approximate_logmar: Some(2.3),
            distance: Distance::implicit(1.0, DistanceUnit::M),
        };
        assert!(!coded.supports_distance_adjustment());

        let letters = ParsedMeasurement::LettersRead {
            letters: 5,
            distance: Distance::implicit(4.0, DistanceUnit::M),
        };
        assert!(!letters.supports_distance_adjustment());

        let logmar = ParsedMeasurement::LogmarDirect {
            logmar: 0.3,
            decimal_va: 0.5,
            distance: Distance::implicit(6.0, DistanceUnit::M),
        };
        assert!(logmar.supports_distance_adjustment());
    }

    #[test]
    fn test_logmar_accessor() {
        let letters = ParsedMeasurement::LettersRead {
            letters: 5,
            distance: Distance::implicit(4.0, DistanceUnit::M),
        };
        assert_eq!(letters.logmar(), None);

        let n_font = ParsedMeasurement::NFont {
            n_value: 8,
            logmar: 0.14,
            decimal_va: 0.724,
            distance: Distance::implicit(35.0, DistanceUnit::Cm),
        };
        assert_eq!(n_font.logmar(), Some(0.14));
    }
}
