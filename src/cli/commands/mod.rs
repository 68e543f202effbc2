//! Command implementations for the acuity parser CLI
//!
//! Dispatches parsed arguments to the per-command modules. Each command
//! prints its own output and returns any classification error to the
//! caller for a single exit-code decision in `main`.

pub mod classify;
pub mod diopter;
pub mod notations;
pub mod parameter;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the acuity parser
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args);

    match args.command {
        Some(Commands::Classify(ref classify_args)) => classify::run_classify(classify_args),
        Some(Commands::Diopter(ref diopter_args)) => diopter::run_diopter(diopter_args),
        Some(Commands::Parameter(ref parameter_args)) => parameter::run_parameter(parameter_args),
        Some(Commands::Notations) => notations::run_notations(),
        None => Ok(()), // main prints help before dispatch
    }
}
