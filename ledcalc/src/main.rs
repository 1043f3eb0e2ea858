//! # ledcalc Binary
//!
//! Prints the branch diagram and battery run time report of an LED circuit.
//!
//! # Usage
//!
//! ```bash
//! # Built-in demo circuit
//! ledcalc
//!
//! # Circuit from a configuration file
//! ledcalc --config config/ledcalc.toml
//!
//! # Machine-readable report, verbose JSON logs
//! ledcalc -c config/ledcalc.toml --report-json -v --json
//! ```

#![deny(warnings)]

use clap::Parser;
use ledcalc::LedcalcConfig;
use ledcalc::circuit::calculate;
use ledcalc::error::LedcalcResult;
use ledcalc_common::config::LogLevel;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// ledcalc - LED driver circuit calculator
#[derive(Parser, Debug)]
#[command(name = "ledcalc")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Branch layout, limiting resistors and battery run time for LED circuits")]
#[command(long_about = None)]
struct Args {
    /// Path to circuit configuration file (ledcalc.toml).
    /// Without it the built-in demo circuit is calculated.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    report_json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("ledcalc failed: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> LedcalcResult<()> {
    let config = match &args.config {
        Some(path) => LedcalcConfig::load_validated(path)?,
        None => LedcalcConfig::default(),
    };

    setup_tracing(args, config.shared.log_level);

    match &args.config {
        Some(path) => info!("Loaded circuit from {}", path.display()),
        None => info!("No --config given, using the demo circuit"),
    }
    info!(service = %config.shared.service_name, "ledcalc v{} starting", env!("CARGO_PKG_VERSION"));

    let report = calculate(&config.circuit, &config.scenarios)?;

    if args.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and the configured level.
///
/// Logs go to stderr so the report on stdout stays clean.
fn setup_tracing(args: &Args, level: LogLevel) {
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        level.into()
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
