use scheduler::{round_robin, ProcessSpec, RoundRobin};

use std::env;
use std::fs;

use processor::Processor;

use crate::report;

mod idle;
mod invalid;
mod simple;

static SCHEDULER: &str = "round-robin";

fn write_logs(folder: &str, name: &str, logs: &str) {
    let quantum = arguments();
    fs::create_dir_all(format!("../outputs/{SCHEDULER}/{folder}")).unwrap();
    fs::write(
        format!("../outputs/{SCHEDULER}/{folder}/{name}___{quantum}.log"),
        logs,
    )
    .unwrap();
}

fn read_logs(folder: &str, name: &str) -> String {
    let quantum = arguments();
    fs::read_to_string(format!(
        "../outputs/{SCHEDULER}/{folder}/{name}___{quantum}.log"
    ))
    .unwrap()
}

/// Runs the processes to completion and compares the full text report,
/// iteration logs included, with the reference output.
fn run(folder: &str, name: &str, specs: &[ProcessSpec]) {
    let (scheduler, logs) = Processor::run(scheduler(specs)).into_parts();
    let output = report::text(&scheduler.finish(), Some(logs.as_slice()));

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, &output);
    } else {
        let reference = read_logs(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn arguments() -> usize {
    env::var("QUANTUM")
        .unwrap_or("2".to_string())
        .parse::<usize>()
        .unwrap()
}

fn scheduler(specs: &[ProcessSpec]) -> RoundRobin {
    let quantum = arguments();

    println!("Quantum {quantum}");
    round_robin(specs, quantum).unwrap()
}
