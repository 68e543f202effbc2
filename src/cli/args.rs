//! Command-line argument definitions for the acuity parser
//!
//! Defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};

/// CLI arguments for the acuity parser
///
/// Classifies free-text clinical visual acuity entries into typed
/// measurement notations with logMAR equivalents and testing distances.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "acuity-parser",
    version,
    about = "Classify clinical visual acuity text into typed measurement notations",
    long_about = "Classifies free-text visual acuity entries (Snellen fractions, logMAR, \
                  decimal notation, letters read, N-font and Jaeger print sizes, and coded \
                  qualitative terms) into typed measurements with logMAR equivalents and \
                  testing distances. Also parses diopter shorthand and test-parameter text."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Map the verbosity flags to a tracing level directive
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Available subcommands for the acuity parser
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Classify a visual acuity entry (e.g. "6/6", "N8", "0.3dec")
    Classify(ClassifyArgs),
    /// Parse a diopter value with q/h/t shorthand (e.g. "1q", "-3t")
    Diopter(DiopterArgs),
    /// Classify test-parameter text (distance, correction, chart, optotype, method)
    Parameter(ParameterArgs),
    /// List the supported notations with example inputs
    Notations,
}

/// Arguments for the classify command
#[derive(Debug, Clone, Parser)]
pub struct ClassifyArgs {
    /// The visual acuity entry to classify
    #[arg(value_name = "TEXT")]
    pub value: String,

    /// Explicit testing distance override (e.g. "3m", "50cm")
    ///
    /// When the notation models a physical optotype size, the reported
    /// logMAR is additionally adjusted for the changed distance. Coded
    /// terms and letters-read counts have no size/distance relationship
    /// and are never adjusted.
    #[arg(short = 'd', long = "distance", value_name = "DISTANCE")]
    pub distance: Option<String>,

    /// Emit the result as JSON instead of human-readable text
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for the diopter command
#[derive(Debug, Clone, Parser)]
pub struct DiopterArgs {
    /// The diopter value to parse
    #[arg(value_name = "TEXT")]
    pub value: String,

    /// Emit the result as JSON instead of human-readable text
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for the parameter command
#[derive(Debug, Clone, Parser)]
pub struct ParameterArgs {
    /// The test-parameter text to classify
    #[arg(value_name = "TEXT")]
    pub value: String,

    /// Emit the result as JSON instead of human-readable text
    #[arg(long = "json")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_args_parse() {
        let args = Args::try_parse_from(["acuity-parser", "classify", "6/6"]).unwrap();
        match args.command {
            Some(Commands::Classify(c)) => {
                assert_eq!(c.value, "6/6");
                assert!(c.distance.is_none());
                assert!(!c.json);
            }
            other => panic!("expected Classify, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_with_distance_override() {
        let args =
            Args::try_parse_from(["acuity-parser", "classify", "6/6", "--distance", "3m", "--json"])
                .unwrap();
        match args.command {
            Some(Commands::Classify(c)) => {
                assert_eq!(c.distance.as_deref(), Some("3m"));
                assert!(c.json);
            }
            other => panic!("expected Classify, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let args = Args::try_parse_from(["acuity-parser"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_log_level_flags() {
        let args = Args::try_parse_from(["acuity-parser", "-v", "notations"]).unwrap();
        assert_eq!(args.log_level(), "debug");

        let args = Args::try_parse_from(["acuity-parser", "-q", "notations"]).unwrap();
        assert_eq!(args.log_level(), "error");

        let args = Args::try_parse_from(["acuity-parser", "notations"]).unwrap();
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn test_verbose_quiet_conflict() {
        assert!(Args::try_parse_from(["acuity-parser", "-v", "-q", "notations"]).is_err());
    }
}
