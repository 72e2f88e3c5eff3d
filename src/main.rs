//! CLI entry point for the Hanoi solver.
//!
//! Usage:
//!   hanoi-solver solve <disks> [options]
//!   hanoi-solver solve --stdin [options]
//!
//! Options:
//!   --max-disks <n>   Largest accepted disk count (default: 8)
//!   --verbose         Enable debug logging

mod error;
mod logging;
mod solver;
mod tower;
mod validator;

use std::io::{self, Read};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use error::SolverError;
use solver::{generate_solution, SolverConfig};
use tower::Solution;

#[derive(Parser)]
#[command(name = "hanoi-solver")]
#[command(about = "Optimal move-sequence solver for the Tower of Hanoi puzzle")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the puzzle for a given number of disks
    Solve {
        /// Number of disks (use --stdin to read a JSON request instead)
        #[arg(value_name = "DISKS")]
        disks: Option<u32>,

        /// Read a JSON request {"numberOfDisks": n} from stdin
        #[arg(long)]
        stdin: bool,

        /// Largest accepted disk count
        #[arg(long, default_value = "8")]
        max_disks: u32,
    },
}

/// Response envelope returned to the caller
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Solution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SolveOutput {
    fn failure(reason: String) -> Self {
        Self {
            success: false,
            solution: None,
            error: Some(reason),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Solve {
            disks,
            stdin,
            max_disks,
        } => {
            // Resolve the requested disk count
            let disks = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                match parse_request(&buffer) {
                    Ok(n) => n,
                    Err(reason) => {
                        print_output(&SolveOutput::failure(reason));
                        std::process::exit(1);
                    }
                }
            } else if let Some(n) = disks {
                n
            } else {
                eprintln!("Error: Must provide either a disk count or --stdin");
                std::process::exit(1);
            };

            let config = SolverConfig { max_disks };
            let output = match generate_solution(disks, &config) {
                Ok(solution) => SolveOutput {
                    success: true,
                    solution: Some(solution),
                    error: None,
                },
                // Caller misuse: the reason is safe to pass through
                Err(err @ SolverError::InvalidDiskCount { .. }) => {
                    SolveOutput::failure(err.to_string())
                }
                // A defect, not caller misuse: log the detail, keep the
                // response generic
                Err(err) => {
                    tracing::error!("solve failed: {}", err);
                    SolveOutput::failure("internal solver error".to_string())
                }
            };

            let success = output.success;
            print_output(&output);
            std::process::exit(if success { 0 } else { 1 });
        }
    }
}

/// Extract the disk count from a request body.
///
/// Distinguishes a missing or non-numeric field from an out-of-range
/// value, which is the solver's call to make.
fn parse_request(body: &str) -> Result<u32, String> {
    let request: serde_json::Value =
        serde_json::from_str(body).map_err(|e| format!("invalid request JSON: {}", e))?;
    let field = request
        .get("numberOfDisks")
        .ok_or_else(|| "numberOfDisks is required".to_string())?;
    field
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| "numberOfDisks must be a non-negative integer".to_string())
}

fn print_output(output: &SolveOutput) {
    println!("{}", serde_json::to_string_pretty(output).unwrap());
}
