//! The notations command: list supported notations and coded terms

use colored::*;

use crate::{Result, constants};

/// Print the supported notations with example inputs, then the full
/// coded-term vocabulary with its terminology bindings.
pub fn run_notations() -> Result<()> {
    println!("{}", "Supported notations".green().bold());
    println!();
    for (name, example) in constants::NOTATION_EXAMPLES {
        println!("  {:<40} {}", name.cyan(), example);
    }

    println!();
    println!("{}", "Coded terms".green().bold());
    println!();
    for term in constants::CODED_TERMS {
        println!(
            "  {:<28} {:<12} {} ({})",
            term.label.cyan(),
            term.code_string,
            term.code_system.as_str(),
            match term.approximate_logmar {
                Some(logmar) => format!("logMAR {:.1}", logmar),
                None => "no logMAR equivalent".to_string(),
            }
        );
    }

    Ok(())
}
