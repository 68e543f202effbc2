//! Static clinical tables for acuity classification
//!
//! This module contains the fixed conversion tables, default testing
//! distances, coded-term bindings, and parameter vocabularies used
//! throughout the classifier. Data only; no mutation path exists.

use crate::app::models::{CodeSystem, CodedTerm, Distance, DistanceUnit};

// =============================================================================
// Distance Unit Factors (to meters)
// =============================================================================

/// Conversion factors from each accepted distance unit to meters
pub mod unit_factors {
    pub const METER: f64 = 1.0;
    pub const CENTIMETER: f64 = 0.01;
    pub const MILLIMETER: f64 = 0.001;
    pub const FOOT: f64 = 0.3048;
    pub const INCH: f64 = 0.0254;
}

/// Accepted distance unit tokens, as shown in error messages
pub const VALID_DISTANCE_UNITS: &[&str] = &["m", "cm", "mm", "ft", "in"];

// =============================================================================
// Near-Vision Print Size Tables
// =============================================================================

/// N-font print size to logMAR equivalence (fixed clinical convention)
pub const N_FONT_TABLE: &[(u32, f64)] = &[
    (4, 0.07),
    (5, 0.10),
    (6, 0.11),
    (8, 0.14),
    (10, 0.18),
    (12, 0.22),
    (16, 0.30),
    (20, 0.35),
    (24, 0.44),
    (30, 0.52),
];

/// Jaeger print size to logMAR equivalence (fixed clinical convention)
pub const JAEGER_TABLE: &[(u32, f64)] = &[
    (1, 0.0),
    (2, 0.1),
    (3, 0.18),
    (4, 0.2),
    (5, 0.3),
    (6, 0.4),
    (7, 0.48),
    (8, 0.5),
    (9, 0.6),
    (10, 0.7),
    (11, 0.76),
    (12, 0.8),
    (13, 0.9),
    (14, 1.0),
];

/// Look up the logMAR equivalent for an N-font size
pub fn n_font_logmar(n_value: u32) -> Option<f64> {
    N_FONT_TABLE
        .iter()
        .find(|(n, _)| *n == n_value)
        .map(|(_, logmar)| *logmar)
}

/// Look up the logMAR equivalent for a Jaeger size
pub fn jaeger_logmar(j_value: u32) -> Option<f64> {
    JAEGER_TABLE
        .iter()
        .find(|(j, _)| *j == j_value)
        .map(|(_, logmar)| *logmar)
}

// =============================================================================
// Default Testing Distances per Notation
// =============================================================================

/// System-supplied testing distances, attached when the user gives none.
///
/// Each carries `explicit = false` so downstream consumers can tell a
/// default apart from a user-entered distance.
pub mod default_distances {
    use super::{Distance, DistanceUnit};

    /// Coded qualitative terms (HM, CF, ...) are assessed at 1 m
    pub fn coded() -> Distance {
        Distance::implicit(1.0, DistanceUnit::M)
    }

    /// N-font and Jaeger near-vision print is read at 35 cm
    pub fn near_print() -> Distance {
        Distance::implicit(35.0, DistanceUnit::Cm)
    }

    /// Letters-read counts assume the 4 m ETDRS convention
    pub fn letters_read() -> Distance {
        Distance::implicit(4.0, DistanceUnit::M)
    }

    /// Decimal, direct logMAR, and meter Snellen charts hang at 6 m
    pub fn chart() -> Distance {
        Distance::implicit(6.0, DistanceUnit::M)
    }

    /// Feet Snellen charts hang at 20 ft
    pub fn feet_chart() -> Distance {
        Distance::implicit(20.0, DistanceUnit::Ft)
    }
}

// =============================================================================
// Coded Qualitative Terms
// =============================================================================

/// Fixed vocabulary of coded qualitative VA terms with their terminology
/// bindings. Approximate logMAR values exist only where a conventional
/// equivalence is published.
pub const CODED_TERMS: &[CodedTerm] = &[
    CodedTerm {
        label: "HM - Hand movement",
        code_system: CodeSystem::SnomedCt,
        code_string: "260295004",
        approximate_logmar: Some(2.3),
    },
    CodedTerm {
        label: "CF - Count fingers",
        code_system: CodeSystem::Loinc,
        code_string: "LA24679-5",
        approximate_logmar: Some(1.9),
    },
    CodedTerm {
        label: "PL - Perceives Light",
        code_system: CodeSystem::SnomedCt,
        code_string: "260296003",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "PLAP - Perceives Light, accurate Projection",
        code_system: CodeSystem::SnomedCt,
        code_string: "260297007",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "PLIP - Perceives Light, inaccurate Projection",
        code_system: CodeSystem::SnomedCt,
        code_string: "260298002",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "NPL - No Light Perception",
        code_system: CodeSystem::SnomedCt,
        code_string: "63063006",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "CSM - Central Steady Maintained Fixation",
        code_system: CodeSystem::Loinc,
        code_string: "LA25490-6",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "CUM - Central Unsteady Maintained Fixation",
        code_system: CodeSystem::Loinc,
        code_string: "LA25491-4",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "FF - Fix and Follow",
        code_system: CodeSystem::Loinc,
        code_string: "LA25492-2",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "BFL - Blinks for Light",
        code_system: CodeSystem::Loinc,
        code_string: "LA25493-0",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "OtO - Objection to Occlusion",
        code_system: CodeSystem::Local,
        code_string: "at0260",
        approximate_logmar: None,
    },
    CodedTerm {
        label: "NI - No Improvement",
        code_system: CodeSystem::Local,
        code_string: "at0280",
        approximate_logmar: None,
    },
];

/// Find a coded term by case-insensitive whole-string match
pub fn find_coded_term(text: &str) -> Option<&'static CodedTerm> {
    CODED_TERMS
        .iter()
        .find(|term| term.label.eq_ignore_ascii_case(text))
}

// =============================================================================
// Test Parameter Vocabularies
// =============================================================================

/// Closed vocabularies for the test-parameter classifier. Callers may supply
/// their own label list; these are the built-in defaults used by the CLI.
pub mod vocab {
    /// Optical correction types
    pub const CORRECTION_TYPES: &[&str] = &[
        "Autorefraction-based trial Lenses",
        "Subjective Refraction-based trial Lenses",
        "Own Glasses",
        "Hard Contact Lens",
        "Soft Contact Lens",
        "Subjective Refraction without Cycloplegia-based Trial Lenses",
        "Subjective Refraction with Cycloplegia-based Trial Lenses",
        "Retinoscopy-Based Trial Lenses",
        "Trial Lenses",
        "Fogging lens",
        "Pinhole Occluder",
        "Subjective Overrefraction-based Trial Lenses",
        "None - Uncorrected",
    ];

    /// Acuity chart types
    pub const CHART_TYPES: &[&str] = &[
        "logMar chart",
        "Snellen chart",
        "ETDRS chart",
        "ETDRS Original Series Chart 1",
        "ETDRS Original Series Chart 2",
        "ETDRS Original Series Chart R",
        "ETDRS Revised Series Chart 1",
        "ETDRS Revised Series Chart 2",
        "ETDRS Revised Series Chart 3",
        "Golovin-Sitsev table",
        "Monoyer Visual Acuity chart",
        "Cardiff Acuity Cards",
        "Keeler Acuity Cards",
        "Teller Acuity Cards",
    ];

    /// General testing methods
    pub const TESTING_METHODS: &[&str] = &[
        "Laser Interferometer",
        "Near Card",
        "Guyton and Minkowski Potential Acuity Meter",
        "Handheld Retinometer",
        "Visual Acuity Chart",
        "Preferential Looking Test",
        "Fixation Testing",
        "Optokinetic Nystagmus Test",
        "Boeck's Candy Test",
        "Visual Evoked Potential",
        "Cardiff Acuity Test",
        "Electronic Visual Acuity Testing",
        "Near Reading Card",
        "Near Card with Optotypes",
    ];

    /// Optotype varieties
    pub const OPTOTYPE_TYPES: &[&str] = &[
        "Pictogramm",
        "Orientation-Type Optotypes",
        "Letters",
        "Lea Symbol",
        "Kay Picture",
        "Allen Picture",
        "Auckland",
        "Amsterdam Picture",
        "Landolt C",
        "Tumbling E",
        "Numbers",
        "Precision Vision Numbers",
        "Lea Numbers",
        "Sloan Letters",
        "Cyrillic Letters",
        "Snellen Letters",
        "HOTV Letters",
        "LRVC Letters",
        "British Letters (2003)",
        "European-Wide Letters",
    ];

    /// All built-in parameter labels combined
    pub fn all_parameter_labels() -> Vec<&'static str> {
        CORRECTION_TYPES
            .iter()
            .chain(CHART_TYPES)
            .chain(TESTING_METHODS)
            .chain(OPTOTYPE_TYPES)
            .copied()
            .collect()
    }
}

// =============================================================================
// Notation Examples
// =============================================================================

/// Example inputs per supported notation, for help output
pub const NOTATION_EXAMPLES: &[(&str, &str)] = &[
    ("logMAR (default)", "0.18"),
    ("Snellen fraction (meter)", "6/6"),
    ("Snellen fraction (feet)", "20/40ft"),
    ("Decimal notation", "0.5dec"),
    ("Letters read (whole numbers above 3)", "5"),
    ("Jaeger", "3J"),
    ("N-font", "N8"),
    ("Coded entries", "HM - Hand movement, CF - Count fingers, ..."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_font_lookup() {
        assert_eq!(n_font_logmar(8), Some(0.14));
        assert_eq!(n_font_logmar(30), Some(0.52));
        assert_eq!(n_font_logmar(7), None);
    }

    #[test]
    fn test_jaeger_lookup() {
        assert_eq!(jaeger_logmar(1), Some(0.0));
        assert_eq!(jaeger_logmar(14), Some(1.0));
        assert_eq!(jaeger_logmar(15), None);
    }

    #[test]
    fn test_coded_term_lookup_is_case_insensitive() {
        let term = find_coded_term("hm - hand movement").unwrap();
        assert_eq!(term.code_string, "260295004");
        assert_eq!(term.code_system, CodeSystem::SnomedCt);
        assert_eq!(term.approximate_logmar, Some(2.3));

        assert!(find_coded_term("HM").is_none()); // whole-string match only
    }

    #[test]
    fn test_default_distances_are_implicit() {
        assert!(!default_distances::coded().explicit);
        assert!(!default_distances::near_print().explicit);
        assert_eq!(default_distances::near_print().unit, DistanceUnit::Cm);
        assert_eq!(default_distances::feet_chart().magnitude, 20.0);
    }

    #[test]
    fn test_all_parameter_labels_combined() {
        let labels = vocab::all_parameter_labels();
        assert_eq!(
            labels.len(),
            vocab::CORRECTION_TYPES.len()
                + vocab::CHART_TYPES.len()
                + vocab::TESTING_METHODS.len()
                + vocab::OPTOTYPE_TYPES.len()
        );
        assert!(labels.contains(&"Snellen chart"));
        assert!(labels.contains(&"None - Uncorrected"));
    }
}
