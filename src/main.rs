//! Dishwasher simulator — runs one program against simulated hardware.
//!
//! ```text
//! dishwasher-sim [CONFIG.json] [--door-open] [--filter <capacity>]
//!                [--pump-fault] [--engine-fault]
//! ```
//!
//! Without a config file the run uses ECO, full fill, no tablet.  The
//! `RunResult` is printed to stdout as JSON; progress goes to stderr at
//! the level named by `DISHWASHER_LOG` (default `info`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use dishwasher::adapters::log_sink::LogEventSink;
use dishwasher::adapters::sim::{PumpStep, SimDoor, SimEngine, SimFilter, SimPump};
use dishwasher::app::service::{DishWasher, MAXIMAL_FILTER_CAPACITY};
use dishwasher::config::{FillLevel, ProgramConfiguration, WashingProgram};
use dishwasher::error::{EngineError, PumpError};

/// Run one dishwasher program against simulated hardware
#[derive(Debug, Parser)]
#[command(name = "dishwasher-sim", version)]
struct Args {
    /// JSON program configuration (defaults to ECO, full fill, no tablet)
    config: Option<PathBuf>,

    /// Report the door as open
    #[arg(long)]
    door_open: bool,

    /// Dirt filter capacity reported by the sensor
    #[arg(long, value_name = "CAPACITY", default_value_t = MAXIMAL_FILTER_CAPACITY * 2.0)]
    filter: f64,

    /// Block the drain on the first cycle
    #[arg(long)]
    pump_fault: bool,

    /// Stall the engine on the configured program
    #[arg(long)]
    engine_fault: bool,
}

fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_env("DISHWASHER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("logger init: {e}"))
}

fn load_config(path: Option<&Path>) -> Result<ProgramConfiguration> {
    let Some(path) = path else {
        return Ok(ProgramConfiguration::new(
            WashingProgram::Eco,
            false,
            FillLevel::Full,
        ));
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    ProgramConfiguration::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;
    let config = load_config(args.config.as_deref())?;

    let pump = if args.pump_fault {
        SimPump::failing_at(PumpStep::Drain, 1, PumpError::DrainBlocked)
    } else {
        SimPump::new()
    };
    let engine = if args.engine_fault {
        SimEngine::failing_on(config.program(), EngineError::Stalled)
    } else {
        SimEngine::new()
    };

    let mut washer = DishWasher::new(
        pump,
        engine,
        SimFilter::new(args.filter),
        SimDoor::new(!args.door_open),
    );
    let result = washer.start_with(config, &mut LogEventSink::new());
    info!("Run finished with {}", result.status());

    let json = serde_json::to_string(&result).context("serializing run result")?;
    println!("{json}");

    if !result.is_success() {
        std::process::exit(2);
    }
    Ok(())
}
