//! The diopter command: lens power shorthand parsing

use colored::*;

use super::shared::print_row;
use crate::Result;
use crate::app::services::diopter_parser::parse_diopter;
use crate::cli::args::DiopterArgs;

/// Run the diopter command
pub fn run_diopter(args: &DiopterArgs) -> Result<()> {
    let diopter = parse_diopter(&args.value)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&diopter).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", "Diopter".green().bold());
    print_row("Value", format!("{:+.2} D", diopter.value));
    match diopter.shorthand {
        Some(shorthand) => print_row(
            "Shorthand",
            format!("'{}' (+{})", shorthand.symbol(), shorthand.step()),
        ),
        None => print_row("Shorthand", "none"),
    }

    Ok(())
}
