//! qstrip-footprint: parametric Q-Strip connector footprint generator
//!
//! Reads a JSON parameter file (or falls back to the built-in
//! defaults), builds the footprint geometry, and writes it as JSON to
//! stdout or a file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use qstrip_footprint::config;
use qstrip_footprint::qstrip;

/// Parametric Q-Strip connector footprint generator.
///
/// Computes pad, hole, and outline geometry for multi-bank high-speed
/// ground plane connectors and emits it as JSON for a drawing backend.
#[derive(Parser, Debug)]
#[command(name = "qstrip-footprint")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON parameter file (defaults to the built-in part)
    #[arg(value_name = "PARAMS_FILE")]
    params: Option<PathBuf>,

    /// Write the footprint JSON here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let params = config::load_params(args.params.as_deref())?;
    let footprint = qstrip::build(&params)?;

    info!(
        name = %footprint.name,
        pads = footprint.pads.len(),
        holes = footprint.holes.len(),
        "footprint generated"
    );

    let json = if args.compact {
        serde_json::to_string(&footprint)?
    } else {
        serde_json::to_string_pretty(&footprint)?
    };

    match &args.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

/// Entry point for the qstrip-footprint generator.
fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(get_log_level(args.verbose, args.quiet));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "generation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
