use anyhow::Result;
use serde::Serialize;

use processor::{format_logs, format_results, format_summary, format_timeline, Log};
use scheduler::{ProcessResult, Simulation, Summary, TimelineSegment};

#[derive(Serialize)]
struct Report<'a> {
    quantum: usize,
    results: &'a [ProcessResult],
    timeline: &'a [TimelineSegment],
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    decisions: Option<Vec<String>>,
}

/// Renders the simulation for a terminal, preceded by the iteration logs
/// when given.
pub fn text(simulation: &Simulation, logs: Option<&[Log]>) -> String {
    let mut s = String::new();
    if let Some(logs) = logs {
        s.push_str(&format_logs(logs));
    }
    s.push_str("===== Results =====\n");
    s.push_str(&format_results(&simulation.results));
    s.push_str("\n===== Timeline =====\n");
    s.push_str(&format_timeline(&simulation.timeline));
    s.push_str("\n\n===== Summary =====\n");
    s.push_str(&format_summary(&simulation.summary()));
    s
}

/// Renders the simulation as pretty printed JSON. Logs are reduced to the
/// list of decisions.
pub fn json(simulation: &Simulation, logs: Option<&[Log]>) -> Result<String> {
    let report = Report {
        quantum: simulation.quantum,
        results: &simulation.results,
        timeline: &simulation.timeline,
        summary: simulation.summary(),
        decisions: logs.map(|logs| logs.iter().map(|log| log.decision.to_string()).collect()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scheduler::{simulate, ProcessSpec};
    use serde_json::{json, Value};

    #[test]
    fn json_report() {
        let simulation = simulate(&[ProcessSpec::new(1, 3, 2)], 4).unwrap();
        let report: Value = serde_json::from_str(&json(&simulation, None).unwrap()).unwrap();

        assert_eq!(
            report,
            json!({
                "quantum": 4,
                "results": [{
                    "pid": 1, "arrival": 3, "burst": 2,
                    "completion": 5, "turnaround": 2, "waiting": 0
                }],
                "timeline": [{ "pid": 1, "start": 3, "duration": 2 }],
                "summary": {
                    "processes": 1, "makespan": 5, "busy": 2, "idle": 3,
                    "average_turnaround": 2.0, "average_waiting": 0.0,
                    "utilization": 0.4
                }
            })
        );
    }

    #[test]
    fn json_report_with_decisions() {
        let simulation = simulate(&[ProcessSpec::new(1, 0, 1)], 1).unwrap();
        let processor = processor::Processor::run(
            scheduler::round_robin(&[ProcessSpec::new(1, 0, 1)], 1).unwrap(),
        );
        let report: Value =
            serde_json::from_str(&json(&simulation, Some(processor.logs())).unwrap()).unwrap();

        assert_eq!(
            report["decisions"],
            json!(["Run 1 at 0 for 1 slices, Exited", "Done, no more processes"])
        );
    }
}
