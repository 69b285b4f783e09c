use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use scheduler::{ProcessSpec, Ticks};

/// The workload file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkloadFile {
    quantum: Option<usize>,
    #[serde(default)]
    processes: Vec<ProcessSpec>,
}

/// A complete simulation request.
#[derive(Debug, PartialEq)]
pub struct Workload {
    pub quantum: usize,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Merges the workload file with the command line.
    ///
    /// * `quantum` - replaces the quanta of the file.
    /// * `extra` - `(arrival, burst)` pairs appended after the file's
    ///             processes, numbered after the largest id in use.
    pub fn resolve(
        input: Option<&Path>,
        quantum: Option<usize>,
        extra: &[(Ticks, Ticks)],
    ) -> Result<Workload> {
        let file = match input {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("cannot read workload {}", path.display()))?;
                parse(&json).with_context(|| format!("invalid workload {}", path.display()))?
            }
            None => WorkloadFile::default(),
        };
        merge(file, quantum, extra)
    }
}

fn parse(json: &str) -> Result<WorkloadFile> {
    Ok(serde_json::from_str(json)?)
}

fn merge(file: WorkloadFile, quantum: Option<usize>, extra: &[(Ticks, Ticks)]) -> Result<Workload> {
    let Some(quantum) = quantum.or(file.quantum) else {
        bail!("no time quantum given, use --quantum or set \"quantum\" in the workload");
    };

    let mut processes = file.processes;
    let mut last_id = processes.iter().map(|spec| spec.id).max().unwrap_or(0);
    for &(arrival, burst) in extra {
        let Some(id) = last_id.checked_add(1) else {
            bail!("no process id left after {last_id} for --process {arrival}:{burst}");
        };
        processes.push(ProcessSpec::new(id, arrival, burst));
        last_id = id;
    }

    if processes.is_empty() {
        bail!("no processes given, use --process or --input");
    }

    Ok(Workload { quantum, processes })
}

/// Parses `ARRIVAL:BURST`.
pub fn parse_process(value: &str) -> Result<(Ticks, Ticks), String> {
    let (arrival, burst) = value
        .split_once(':')
        .ok_or_else(|| format!("expected ARRIVAL:BURST, got `{value}`"))?;
    let arrival = arrival
        .trim()
        .parse::<Ticks>()
        .map_err(|error| format!("arrival `{arrival}`: {error}"))?;
    let burst = burst
        .trim()
        .parse::<Ticks>()
        .map_err(|error| format!("burst `{burst}`: {error}"))?;
    Ok((arrival, burst))
}
