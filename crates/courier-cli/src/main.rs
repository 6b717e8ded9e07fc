//! `courier` — turn-by-turn delivery planning from the command line.
//!
//! ```text
//! courier mapdata.txt deliveries.txt
//! courier mapdata.txt deliveries.txt --seed 42 -v
//! ```
//!
//! Exit codes: 0 on success, 1 when no route covers every delivery, 2 when
//! a depot or delivery coordinate is not on the map.  Malformed input files
//! are reported by the loaders and exit 1.

mod deliveries;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};

use courier_core::{CourierError, CourierRng};
use courier_map::StreetMap;
use courier_plan::DeliveryPlanner;

#[derive(Parser)]
#[command(name = "courier")]
#[command(author, version, about = "Plan a courier's delivery route over a street map")]
struct Cli {
    /// Street map data file
    map: PathBuf,

    /// Deliveries file: depot on the first line, then one `lat lon:item`
    /// per delivery
    deliveries: PathBuf,

    /// Seed for the tour optimizer, for reproducible plans
    #[arg(long)]
    seed: Option<u64>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let map = StreetMap::load_path(&cli.map)
        .with_context(|| format!("failed to load map data from {}", cli.map.display()))?;
    let (depot, requests) = deliveries::load_path(&cli.deliveries)
        .with_context(|| format!("failed to load deliveries from {}", cli.deliveries.display()))?;

    let mut rng = match cli.seed {
        Some(seed) => CourierRng::new(seed),
        None => CourierRng::from_entropy(),
    };

    println!("Generating route...\n");
    let planner = DeliveryPlanner::new();
    match planner.plan(&map, &depot, &requests, &mut rng) {
        Ok(plan) => {
            for command in &plan.commands {
                println!("{command}");
            }
            println!("You are back at the depot and your deliveries are done!");
            println!("{:.2} miles travelled for all deliveries.", plan.total_miles);
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ CourierError::NoRoute { .. }) => {
            eprintln!("{err}");
            Ok(ExitCode::from(1))
        }
        Err(err @ CourierError::BadCoord(_)) => {
            eprintln!("{err}");
            Ok(ExitCode::from(2))
        }
        Err(err) => Err(err.into()),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
