//! Shared components for CLI commands
//!
//! Logging setup and small output helpers used across command modules.

use colored::*;

use crate::cli::args::Args;

/// Set up structured logging from the verbosity flags.
///
/// `RUST_LOG` takes precedence over the flags when set.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("acuity_parser={}", args.log_level())));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an aligned "label: value" row
pub fn print_row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<18} {}", format!("{}:", label).bold(), value);
}

/// Format a float for display, trimming noise digits
pub fn fmt_float(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        format!("{:.3}", value)
    }
}
