//! The classify command: VA text to typed measurement

use colored::*;
use tracing::debug;

use super::shared::{fmt_float, print_row};
use crate::app::models::Distance;
use crate::app::services::distance_parser::parse_distance;
use crate::app::services::notation_classifier::classify;
use crate::app::services::unit_converter::adjust_logmar_for_distance;
use crate::cli::args::ClassifyArgs;
use crate::{ParsedMeasurement, Result};

/// Run the classify command
pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let measurement = classify(&args.value)?;
    debug!(notation = measurement.notation_name(), "classified input");

    let override_distance = args
        .distance
        .as_deref()
        .map(parse_distance)
        .transpose()?;

    let adjusted_logmar = override_distance
        .as_ref()
        .and_then(|new_distance| adjusted_for(&measurement, new_distance));

    if args.json {
        print_json(&measurement, override_distance.as_ref(), adjusted_logmar)?;
    } else {
        print_human(&measurement, override_distance.as_ref(), adjusted_logmar);
    }

    Ok(())
}

/// Distance-adjusted logMAR, gated on the notation supporting it
fn adjusted_for(measurement: &ParsedMeasurement, new_distance: &Distance) -> Option<f64> {
    if !measurement.supports_distance_adjustment() {
        return None;
    }
    measurement
        .logmar()
        .map(|logmar| adjust_logmar_for_distance(logmar, measurement.distance(), new_distance))
}

fn print_json(
    measurement: &ParsedMeasurement,
    override_distance: Option<&Distance>,
    adjusted_logmar: Option<f64>,
) -> Result<()> {
    let payload = serde_json::json!({
        "measurement": measurement,
        "override_distance": override_distance,
        "adjusted_logmar": adjusted_logmar,
    });
    // Serialization of these plain data types cannot fail
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).unwrap_or_default()
    );
    Ok(())
}

fn print_human(
    measurement: &ParsedMeasurement,
    override_distance: Option<&Distance>,
    adjusted_logmar: Option<f64>,
) {
    println!("{}", "Classification".green().bold());
    print_row("Notation", measurement.notation_name());
    print_row("Canonical form", measurement.canonical_text());

    match measurement {
        ParsedMeasurement::Coded {
            label,
            code_system,
            code_string,
            ..
        } => {
            print_row("Term", label);
            print_row("Code", format!("{} ({})", code_string, code_system));
        }
        ParsedMeasurement::MeterSnellen {
            numerator,
            denominator,
            ..
        }
        | ParsedMeasurement::FeetSnellen {
            numerator,
            denominator,
            ..
        } => {
            print_row("Fraction", format!("{}/{}", numerator, denominator));
        }
        ParsedMeasurement::LettersRead { letters, .. } => {
            print_row("Letters read", letters);
        }
        ParsedMeasurement::NFont { n_value, .. } => {
            print_row("Print size", format!("N{}", n_value));
        }
        ParsedMeasurement::Jaeger { j_value, .. } => {
            print_row("Print size", format!("J{}", j_value));
        }
        ParsedMeasurement::Decimal { .. } | ParsedMeasurement::LogmarDirect { .. } => {}
    }

    if let Some(logmar) = measurement.logmar() {
        print_row("logMAR", fmt_float(logmar));
    }
    if let Some(decimal_va) = measurement.decimal_va() {
        print_row("Decimal VA", fmt_float(decimal_va));
    }

    let distance = measurement.distance();
    let provenance = if distance.explicit { "explicit" } else { "default" };
    print_row("Distance", format!("{} ({})", distance, provenance));

    if let Some(new_distance) = override_distance {
        print_row("Override distance", new_distance);
        match adjusted_logmar {
            Some(adjusted) => print_row("Adjusted logMAR", fmt_float(adjusted)),
            None => println!(
                "  {}",
                "distance adjustment not applicable to this notation".yellow()
            ),
        }
    }
}
