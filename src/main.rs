use acuity_parser::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Acuity Parser - Clinical Visual Acuity Notation Engine");
    println!("======================================================");
    println!();
    println!("Classify free-text visual acuity entries into typed measurement");
    println!("notations with logMAR equivalents and testing distances.");
    println!();
    println!("USAGE:");
    println!("    acuity-parser <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    classify     Classify a visual acuity entry (main command)");
    println!("    diopter      Parse a diopter value with q/h/t shorthand");
    println!("    parameter    Classify test-parameter text");
    println!("    notations    List the supported notations with example inputs");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Classify a Snellen fraction:");
    println!("    acuity-parser classify 6/6");
    println!();
    println!("    # Classify with an explicit testing distance override:");
    println!("    acuity-parser classify 6/6 --distance 3m");
    println!();
    println!("    # Parse diopter shorthand as JSON:");
    println!("    acuity-parser diopter -- -3t --json");
    println!();
    println!("    # Classify a test parameter:");
    println!("    acuity-parser parameter \"ETDRS chart\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    acuity-parser <COMMAND> --help");
}
