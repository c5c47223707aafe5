//! Boxbound: sound quality bounds for branch-and-bound subwindow search.
//!
//! Branch-and-bound search over axis-aligned image rectangles explores a
//! tree of interval regions ([`geom::SearchState`]), pruning any region
//! whose upper bound falls below the current best solution. Boxbound
//! computes that bound for the loss-augmented case used in discriminative
//! training: an upper estimate of `quality(box) + loss(box, ground_truth)`
//! over every box in a region, in O(1) per region.
//!
//! # Modules
//!
//! - [`geom`]: Box and search-region geometry (inclusive coordinates)
//! - [`gt`]: Ground-truth sets, setup-buffer decoding, and file I/O
//! - [`bound`]: The [`QualityBound`](bound::QualityBound) trait, the
//!   overlap lower bound, and the [`LossAugmented`](bound::LossAugmented)
//!   composition
//! - [`validation`]: Ground-truth validation and issue reporting
//! - [`error`]: Error types for boxbound operations

pub mod bound;
pub mod error;
pub mod geom;
pub mod gt;
pub mod validation;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use bound::{LossAugmented, QualityBound, ZeroQuality};
use geom::SearchState;
use gt::GroundTruthSet;

pub use error::BoxboundError;

/// The boxbound CLI application.
#[derive(Parser)]
#[command(name = "boxbound")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Evaluate the loss-augmented bound for a search state.
    Bound(BoundArgs),
    /// Validate a ground-truth file for errors and warnings.
    Validate(ValidateArgs),
}

/// Arguments for the bound subcommand.
#[derive(clap::Args)]
struct BoundArgs {
    /// Ground-truth file (CSV columns left,top,right,bottom,score, or a
    /// JSON array of box records).
    input: PathBuf,

    /// Input format ('csv' or 'json').
    #[arg(long, default_value = "csv")]
    format: String,

    /// Search state as eight integers: the [low,high] interval pairs for
    /// left, top, right and bottom, e.g. '0,5,0,5,10,20,10,20'.
    #[arg(long)]
    state: String,

    /// Output format for the result ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Ground-truth file to validate.
    input: PathBuf,

    /// Input format ('csv' or 'json').
    #[arg(long, default_value = "csv")]
    format: String,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the boxbound CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), BoxboundError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Bound(args)) => run_bound(args),
        Some(Commands::Validate(args)) => run_validate(args),
        None => {
            println!("boxbound {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Sound quality bounds for branch-and-bound subwindow search.");
            println!();
            println!("Run 'boxbound --help' for usage information.");
            Ok(())
        }
    }
}

/// Loads a ground-truth file in the named format.
fn load_ground_truth(path: &Path, format: &str) -> Result<GroundTruthSet, BoxboundError> {
    match format {
        "csv" => gt::io_csv::read_gt_csv(path),
        "json" => gt::io_json::read_gt_json(path),
        other => Err(BoxboundError::UnsupportedFormat(format!(
            "'{}' (supported: csv, json)",
            other
        ))),
    }
}

/// Parses a search state from eight comma-separated integers.
fn parse_state(raw: &str) -> Result<SearchState, BoxboundError> {
    let values: Vec<i32> = raw
        .split(',')
        .map(|part| part.trim().parse())
        .collect::<Result<_, _>>()
        .map_err(|e| BoxboundError::InvalidState(format!("'{}': {}", raw, e)))?;

    if values.len() != 8 {
        return Err(BoxboundError::InvalidState(format!(
            "expected 8 values (4 low/high interval pairs), got {}",
            values.len()
        )));
    }

    let low = [values[0], values[2], values[4], values[6]];
    let high = [values[1], values[3], values[5], values[7]];

    for i in 0..4 {
        if low[i] > high[i] {
            return Err(BoxboundError::InvalidState(format!(
                "interval {} is empty: low {} > high {}",
                i, low[i], high[i]
            )));
        }
    }

    Ok(SearchState::from_intervals(low, high))
}

/// Execute the bound subcommand.
fn run_bound(args: BoundArgs) -> Result<(), BoxboundError> {
    let ground_truth = load_ground_truth(&args.input, &args.format)?;
    let state = parse_state(&args.state)?;

    // Base quality is external to the CLI; evaluate the loss term on top
    // of the neutral base.
    let augmented = LossAugmented::new(ZeroQuality, ground_truth);
    let loss = augmented.loss_bound(&state);
    let upper = augmented.upper_bound(&state);

    match args.output.as_str() {
        "json" => {
            let result = serde_json::json!({
                "num_ground_truth_boxes": augmented.ground_truth().len(),
                "negative_image": augmented.ground_truth().is_negative_image(),
                "loss_bound": loss,
                "upper_bound": upper,
            });
            println!("{:#}", result);
        }
        _ => {
            println!("ground-truth boxes: {}", augmented.ground_truth().len());
            if augmented.ground_truth().is_negative_image() {
                println!("negative example image (fixed loss)");
            }
            println!("loss bound:  {:.6}", loss);
            println!("upper bound: {:.6}", upper);
        }
    }

    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), BoxboundError> {
    let ground_truth = load_ground_truth(&args.input, &args.format)?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_ground_truth(&ground_truth, &opts);

    match args.output.as_str() {
        "json" => {
            let result = serde_json::json!({
                "error_count": report.error_count(),
                "warning_count": report.warning_count(),
                "issues": report.issues,
            });
            println!("{:#}", result);
        }
        _ => {
            print!("{}", report);
        }
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(BoxboundError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_intervals() {
        let state = parse_state("0,5,1,6,10,20,11,21").unwrap();
        assert_eq!(state.low, [0, 1, 10, 11]);
        assert_eq!(state.high, [5, 6, 20, 21]);
    }

    #[test]
    fn test_parse_state_wrong_arity() {
        assert!(matches!(
            parse_state("1,2,3"),
            Err(BoxboundError::InvalidState(_))
        ));
    }

    #[test]
    fn test_parse_state_empty_interval() {
        assert!(matches!(
            parse_state("5,0,0,0,0,0,0,0"),
            Err(BoxboundError::InvalidState(_))
        ));
    }
}
