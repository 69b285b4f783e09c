use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::info;

use processor::{Processor, Replay};
use scheduler::{round_robin, Ticks};

mod config;
mod report;

use config::Workload;

/// Simulates round robin CPU scheduling over logical time.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON workload: {"quantum": N, "processes": [{"id", "arrival", "burst"}]}
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Time quanta, overrides the one in the workload file
    #[arg(short, long)]
    quantum: Option<usize>,

    /// A process as ARRIVAL:BURST, ids are assigned in order
    #[arg(short, long = "process", value_name = "ARRIVAL:BURST", value_parser = config::parse_process)]
    processes: Vec<(Ticks, Ticks)>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print every scheduling iteration
    #[arg(long)]
    logs: bool,

    /// Replay the timeline afterwards, waiting this many milliseconds per tick
    #[arg(long, value_name = "MS")]
    pace_ms: Option<u64>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let workload = Workload::resolve(args.input.as_deref(), args.quantum, &args.processes)?;
    info!(
        "simulating {} processes with quanta {}",
        workload.processes.len(),
        workload.quantum
    );

    let processor = Processor::run(round_robin(&workload.processes, workload.quantum)?);
    let (scheduler, logs) = processor.into_parts();
    let simulation = scheduler.finish();

    let logs = args.logs.then_some(logs.as_slice());
    match args.format {
        Format::Text => print!("{}", report::text(&simulation, logs)),
        Format::Json => println!("{}", report::json(&simulation, logs)?),
    }

    if let Some(pace) = args.pace_ms {
        for segment in Replay::new(&simulation.timeline, Duration::from_millis(pace)) {
            println!("{}", segment);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
