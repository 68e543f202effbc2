//! The parameter command: ancillary test-parameter classification

use colored::*;

use super::shared::print_row;
use crate::app::models::TestParameter;
use crate::app::services::test_parameter_classifier::classify_parameter;
use crate::cli::args::ParameterArgs;
use crate::{Result, constants};

/// Run the parameter command against the built-in vocabularies
pub fn run_parameter(args: &ParameterArgs) -> Result<()> {
    let labels = constants::vocab::all_parameter_labels();
    let parameter = classify_parameter(&args.value, &labels)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&parameter).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", "Test parameter".green().bold());
    match &parameter {
        TestParameter::Distance(distance) => {
            print_row("Kind", "distance override");
            print_row("Distance", distance);
        }
        TestParameter::Correction(label) => {
            print_row("Kind", "optical correction");
            print_row("Label", label);
        }
        TestParameter::ChartType(label) => {
            print_row("Kind", "chart type");
            print_row("Label", label);
        }
        TestParameter::Optotype(label) => {
            print_row("Kind", "optotype");
            print_row("Label", label);
        }
        TestParameter::Method(label) => {
            print_row("Kind", "testing method");
            print_row("Label", label);
        }
    }

    Ok(())
}
