//! A processor simulation library
//!
//! This is used for driving the schedulers from the [`scheduler`] crate and
//! for presenting what they did.

use std::collections::HashMap;
use std::fmt::Display;

use log::trace;
use scheduler::{
    Pid, Process, ProcessResult, ProcessState, Scheduler, SchedulingDecision, Summary, Ticks,
    TimelineSegment,
};

mod replay;

pub use replay::Replay;

/// Running iteration log
#[derive(Debug, PartialEq)]
pub struct Log {
    /// The action taken by the scheduler.
    pub decision: SchedulingDecision,

    /// The list of processes and their corresponding states
    /// after the decision.
    pub processes: HashMap<Pid, ProcessInfo>,
}

impl Log {
    fn new(decision: SchedulingDecision, processes: HashMap<Pid, ProcessInfo>) -> Log {
        Log {
            decision,
            processes,
        }
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.decision)?;
        writeln!(f, "PID\tSTATE\tARRIVAL\tBURST\tREMAIN\tDONE")?;
        let mut pids = self.processes.keys().collect::<Vec<&Pid>>();
        pids.sort();
        for info in pids.into_iter().filter_map(|pid| self.processes.get(pid)) {
            writeln!(f, "{}", info)?;
        }
        Ok(())
    }
}

/// Information about a process state.
#[derive(Debug, PartialEq)]
pub struct ProcessInfo {
    /// The PID of the process.
    pub pid: Pid,

    /// The process state.
    pub state: ProcessState,

    pub arrival: Ticks,

    pub burst: Ticks,

    /// The execution time the process still needs.
    pub remaining: Ticks,

    pub completion: Option<Ticks>,
}

impl ProcessInfo {
    fn new(process: &dyn Process) -> ProcessInfo {
        ProcessInfo {
            pid: process.pid(),
            state: process.state(),
            arrival: process.arrival(),
            burst: process.burst(),
            remaining: process.remaining(),
            completion: process.completion(),
        }
    }
}

impl Display for ProcessInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t",
            self.pid, self.state, self.arrival, self.burst, self.remaining
        )?;
        match self.completion {
            Some(completion) => write!(f, "{}", completion),
            None => write!(f, "-"),
        }
    }
}

/// The processor simulator.
///
/// Asks the scheduler for decisions until it is done and records a [`Log`]
/// for every one of them, the final [`SchedulingDecision::Done`] included.
pub struct Processor<S: Scheduler> {
    scheduler: S,
    logs: Vec<Log>,
    running: bool,
}

impl<S: Scheduler> Processor<S> {
    pub fn new(scheduler: S) -> Processor<S> {
        Processor {
            scheduler,
            logs: vec![],
            running: true,
        }
    }

    /// Start a new processor simulation and run it to the end.
    ///
    /// * `scheduler` - the scheduler to use for the simulation.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::ProcessSpec;
    ///
    /// let specs = [ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 1, 3)];
    /// let processor = Processor::run(scheduler::round_robin(&specs, 2).unwrap());
    ///
    /// // 5 runs and the final decision
    /// assert_eq!(processor.logs().len(), 6);
    /// ```
    pub fn run(scheduler: S) -> Processor<S> {
        let mut processor = Processor::new(scheduler);
        while processor.step().is_some() {}
        processor
    }

    /// Performs a single iteration and returns its log.
    ///
    /// Returns [`None`] once the scheduler is done.
    pub fn step(&mut self) -> Option<&Log> {
        if !self.running {
            return None;
        }

        let decision = self.scheduler.next();
        trace!("{}", decision);
        if decision == SchedulingDecision::Done {
            self.running = false;
        }

        let processes = self
            .scheduler
            .list()
            .into_iter()
            .map(|process| (process.pid(), ProcessInfo::new(process)))
            .collect();
        self.logs.push(Log::new(decision, processes));
        self.logs.last()
    }

    pub fn logs(&self) -> &[Log] {
        &self.logs
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the scheduler and the logs recorded so far.
    pub fn into_parts(self) -> (S, Vec<Log>) {
        (self.scheduler, self.logs)
    }
}

/// Format the [`Processor`]'s logs to a [`String`].
///
/// * `logs` - the logs returned by the [`Processor`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_logs, Processor};
/// use scheduler::ProcessSpec;
///
/// let specs = [ProcessSpec::new(1, 0, 1)];
/// let processor = Processor::run(scheduler::round_robin(&specs, 2).unwrap());
///
/// println!("{}", format_logs(processor.logs()));
/// ```
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for (iteration, log) in logs.iter().enumerate() {
        s.push_str(&format!("===== Iteration: {} =====\n{}\n", iteration + 1, log));
    }
    s
}

/// Format the results table, one row per process in the given order.
pub fn format_results(results: &[ProcessResult]) -> String {
    let mut s = String::from("PID\tARRIVAL\tBURST\tEND\tTURN\tWAIT\n");
    for result in results {
        s.push_str(&format!(
            "P{}\t{}\t{}\t{}\t{}\t{}\n",
            result.pid,
            result.arrival,
            result.burst,
            result.completion,
            result.turnaround,
            result.waiting
        ));
    }
    s
}

/// Format the timeline as a single line, idle gaps included.
///
/// ```rust
/// use processor::format_timeline;
/// use scheduler::{simulate, ProcessSpec};
///
/// let simulation = simulate(&[ProcessSpec::new(1, 2, 3)], 2).unwrap();
/// assert_eq!(
///     format_timeline(&simulation.timeline),
///     "| idle 0..2 | P1 2..4 | P1 4..5 |"
/// );
/// ```
pub fn format_timeline(timeline: &[TimelineSegment]) -> String {
    let mut s = String::from("|");
    let mut clock = 0;
    for segment in timeline {
        if segment.start > clock {
            s.push_str(&format!(" idle {}..{} |", clock, segment.start));
        }
        s.push_str(&format!(" P{} {}..{} |", segment.pid, segment.start, segment.end()));
        clock = segment.end();
    }
    s
}

/// Format the summary of a simulation.
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "processes: {}\nmakespan: {}\nbusy: {}\nidle: {}\n\
         average turnaround: {:.2}\naverage waiting: {:.2}\nutilization: {:.1}%\n",
        summary.processes,
        summary.makespan,
        summary.busy,
        summary.idle,
        summary.average_turnaround,
        summary.average_waiting,
        summary.utilization * 100.0
    )
}
