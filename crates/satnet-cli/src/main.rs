//! SatNet Command-Line Interface
//!
//! Simulates a satellite fleet on top of the SatNet index: generates a
//! seeded fleet, deorbits part of it, sweeps the deorbited satellites out
//! and prints what remains.
//!
//! # Usage
//!
//! ```bash
//! # Simulate the default fleet
//! satnet
//!
//! # A larger fleet, deorbiting every third satellite
//! satnet --count 5000 --deorbit-every 3
//!
//! # Output as JSON and check the tree afterwards
//! satnet --format json --verify
//!
//! # Use a configuration file
//! satnet --config satnet.toml --print-config
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod formatter;
mod simulation;

use config::CliConfig;
use formatter::{format_counts, format_satellites, OutputFormat};

/// SatNet fleet simulator
#[derive(Parser, Debug)]
#[command(
    name = "satnet",
    version,
    about = "Fleet simulator for the SatNet satellite index",
    long_about = "Generates a seeded satellite fleet, indexes it in a height-balanced tree,\n\
                  deorbits part of it and prints the remaining fleet."
)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", env = "SATNET_CONFIG")]
    config: Option<PathBuf>,

    /// Number of satellites to generate
    #[arg(short = 'n', long, env = "SATNET_COUNT")]
    count: Option<usize>,

    /// Seed for the fleet generator
    #[arg(short = 's', long, env = "SATNET_SEED")]
    seed: Option<u64>,

    /// Deorbit every K-th generated satellite (0 disables)
    #[arg(short = 'k', long, value_name = "K", env = "SATNET_DEORBIT_EVERY")]
    deorbit_every: Option<usize>,

    /// Output format
    #[arg(short = 'o', long, value_enum)]
    format: Option<OutputFormatArg>,

    /// Print the tree structure
    #[arg(long)]
    dump: bool,

    /// Check the tree invariants after the run
    #[arg(long)]
    verify: bool,

    /// Print configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", env = "SATNET_LOG_LEVEL")]
    log_level: String,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Output format argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    /// Display results in a formatted table
    Table,
    /// Display results as JSON
    Json,
    /// Display one line per satellite
    Raw,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Raw => OutputFormat::Raw,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);

    let config = load_config(&args)?;

    if args.print_config {
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let report = simulation::run(&config)?;
    let format = config.simulation.output_format;

    println!("{}", format_satellites(&report.satellites(), format));
    println!("{}", format_counts(&report.counts(), format));

    if args.dump {
        println!("{}", report.net.dump());
    }

    println!("{}", report.summary());
    println!("{}", report.net.stats());

    if args.verify {
        let verified = report
            .net
            .verify()
            .context("tree failed verification")?;
        println!(
            "verified {} nodes, height {}",
            verified.nodes, verified.height
        );
    }

    info!("simulation complete");
    Ok(())
}

fn init_logging(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else {
        &args.log_level
    };

    let filter = EnvFilter::try_new(format!(
        "satnet={level},satnet_index={level},satnet_cli={level}"
    ))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_config(args: &Args) -> Result<CliConfig> {
    let mut config = if let Some(path) = &args.config {
        CliConfig::from_file(path).context("Failed to load config file")?
    } else {
        CliConfig::default()
    };

    if let Some(count) = args.count {
        config.simulation.count = count;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(every) = args.deorbit_every {
        config.simulation.deorbit_every = every;
    }
    if let Some(format) = args.format {
        config.simulation.output_format = format.into();
    }

    config.validate()?;
    Ok(config)
}
