use std::collections::{HashSet, VecDeque};
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::ProcessState::{Exited, Pending, Ready, Running};
use crate::SchedulingDecision::{Done, Idle, Run};
use crate::{
    InvalidInput, Pid, Process, ProcessResult, ProcessSpec, ProcessState, Scheduler,
    SchedulingDecision, Simulation, StopReason, Ticks, TimelineSegment,
};

#[derive(Copy, Clone, Debug, PartialEq)]
struct PCB {
    pid: Pid,
    state: ProcessState,
    arrival: Ticks,
    burst: Ticks,
    remaining: Ticks,
    completion: Option<Ticks>,
    queued: bool,
}

impl PCB {
    fn new(pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        PCB {
            pid,
            state: Pending,
            arrival,
            burst,
            remaining: burst,
            completion: None,
            queued: false,
        }
    }

    fn result(&self, completion: Ticks) -> ProcessResult {
        let turnaround = completion - self.arrival;
        ProcessResult {
            pid: self.pid,
            arrival: self.arrival,
            burst: self.burst,
            completion,
            turnaround,
            waiting: turnaround - self.burst,
        }
    }
}

impl Process for PCB {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn state(&self) -> ProcessState {
        self.state
    }

    fn arrival(&self) -> Ticks {
        self.arrival
    }

    fn burst(&self) -> Ticks {
        self.burst
    }

    fn remaining(&self) -> Ticks {
        self.remaining
    }

    fn completion(&self) -> Option<Ticks> {
        self.completion
    }
}

/// Round robin over logical time.
///
/// Every call to [`Scheduler::next`] first runs an admission pass: the
/// processes are scanned in arrival order (ties keep submission order) and
/// each one that has arrived, still has work left and is not queued yet is
/// appended to the ready queue. The front of the queue then runs for at most
/// one quanta. A preempted process is not put back directly, the next
/// admission pass picks it up again in its arrival order position, so
/// processes that come before it in that order and are not queued yet get
/// ahead of it.
pub struct RoundRobin {
    processes: Vec<PCB>,
    // Indices into `processes`, sorted by arrival once.
    order: Vec<usize>,
    ready_queue: VecDeque<usize>,
    timeslice: NonZeroUsize,
    now: Ticks,
    completed: usize,
    results: Vec<ProcessResult>,
    timeline: Vec<TimelineSegment>,
}

impl RoundRobin {
    /// Validates the specs and prepares a simulation starting at time 0.
    pub fn new(specs: &[ProcessSpec], quantum: usize) -> Result<Self, InvalidInput> {
        let timeslice = NonZeroUsize::new(quantum).ok_or(InvalidInput::Quantum)?;
        let processes = validate(specs)?;

        let mut order: Vec<usize> = (0..processes.len()).collect();
        // `sort_by_key` is stable, equal arrivals keep submission order.
        order.sort_by_key(|&index| processes[index].arrival);

        debug!(
            "round robin: {} processes, quanta {}",
            processes.len(),
            timeslice
        );

        Ok(RoundRobin {
            ready_queue: VecDeque::with_capacity(processes.len()),
            results: Vec::with_capacity(processes.len()),
            processes,
            order,
            timeslice,
            now: 0,
            completed: 0,
            timeline: Vec::new(),
        })
    }

    pub fn is_done(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// The finished processes, in completion order.
    pub fn results(&self) -> &[ProcessResult] {
        &self.results
    }

    /// The segments executed so far, in chronological order.
    pub fn timeline(&self) -> &[TimelineSegment] {
        &self.timeline
    }

    /// Runs the remaining iterations and returns the outcome.
    pub fn finish(mut self) -> Simulation {
        while self.next() != Done {}
        Simulation {
            quantum: self.timeslice.get(),
            results: self.results,
            timeline: self.timeline,
        }
    }

    fn admit(&mut self) {
        for &index in &self.order {
            let process = &mut self.processes[index];
            if process.arrival <= self.now && process.remaining > 0 && !process.queued {
                trace!("t={} admit {}", self.now, process.pid);
                process.queued = true;
                process.state = Ready;
                self.ready_queue.push_back(index);
            }
        }
    }

    // Nothing is ready, so everything left arrives after `now`.
    fn idle(&mut self) -> SchedulingDecision {
        let from = self.now;
        let next_arrival = self
            .processes
            .iter()
            .filter(|process| process.remaining > 0)
            .map(|process| process.arrival)
            .min()
            .unwrap_or(from + 1);
        let ticks = NonZeroUsize::new(next_arrival - from).unwrap_or(NonZeroUsize::MIN);

        trace!("t={} idle for {}", from, ticks);
        self.now += ticks.get();
        Idle { from, ticks }
    }
}

impl Scheduler for RoundRobin {
    fn next(&mut self) -> SchedulingDecision {
        if self.is_done() {
            return Done;
        }

        self.admit();

        let Some(index) = self.ready_queue.pop_front() else {
            return self.idle();
        };

        let process = &mut self.processes[index];
        process.queued = false;
        process.state = Running;

        let start = self.now;
        let run = process.remaining.min(self.timeslice.get());
        self.timeline.push(TimelineSegment {
            pid: process.pid,
            start,
            duration: run,
        });
        self.now += run;
        process.remaining -= run;
        trace!("t={} ran {} for {}", start, process.pid, run);

        let reason = if process.remaining == 0 {
            process.state = Exited;
            process.completion = Some(self.now);
            let result = process.result(self.now);
            debug!(
                "process {} exited at {}, turnaround {}, waiting {}",
                result.pid, result.completion, result.turnaround, result.waiting
            );
            self.results.push(result);
            self.completed += 1;
            StopReason::Exited
        } else {
            StopReason::Expired
        };

        Run {
            pid: process.pid,
            start,
            timeslice: NonZeroUsize::new(run).unwrap_or(NonZeroUsize::MIN),
            reason,
        }
    }

    fn list(&self) -> Vec<&dyn Process> {
        self.processes
            .iter()
            .map(|process| process as &dyn Process)
            .collect()
    }

    fn now(&self) -> Ticks {
        self.now
    }
}

fn validate(specs: &[ProcessSpec]) -> Result<Vec<PCB>, InvalidInput> {
    let mut pids = HashSet::with_capacity(specs.len());
    let mut processes = Vec::with_capacity(specs.len());
    let mut latest_arrival: Ticks = 0;
    let mut total_burst: Ticks = 0;

    for (index, spec) in specs.iter().enumerate() {
        let pid = Pid::new(spec.id).ok_or(InvalidInput::ZeroId { index })?;
        if spec.burst == 0 {
            return Err(InvalidInput::Burst { pid });
        }
        if !pids.insert(pid) {
            return Err(InvalidInput::DuplicateId { pid });
        }

        latest_arrival = latest_arrival.max(spec.arrival);
        total_burst = total_burst
            .checked_add(spec.burst)
            .ok_or(InvalidInput::Horizon { pid })?;
        latest_arrival
            .checked_add(total_burst)
            .ok_or(InvalidInput::Horizon { pid })?;

        processes.push(PCB::new(pid, spec.arrival, spec.burst));
    }

    Ok(processes)
}
