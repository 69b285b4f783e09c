use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Logical time, in scheduler ticks.
pub type Ticks = usize;

/// The PID of a process
///
/// The PID cannot be 0, PIDs start from 1.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pid(NonZeroUsize);

impl Pid {
    /// Returns [`None`] for 0.
    pub fn new(pid: usize) -> Option<Pid> {
        NonZeroUsize::new(pid).map(Pid)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0.get() == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A process as submitted to the scheduler.
///
/// Specs are never modified by a simulation; the engine works on its own copy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// The process id, must be unique and not 0.
    pub id: usize,
    /// The time at which the process becomes ready.
    pub arrival: Ticks,
    /// The total execution time the process requires, must not be 0.
    pub burst: Ticks,
}

impl ProcessSpec {
    pub fn new(id: usize, arrival: Ticks, burst: Ticks) -> ProcessSpec {
        ProcessSpec { id, arrival, burst }
    }
}

/// The metrics of a finished process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// The time at which the last unit of the burst was executed.
    pub completion: Ticks,
    /// `completion - arrival`
    pub turnaround: Ticks,
    /// `turnaround - burst`
    pub waiting: Ticks,
}

/// A contiguous run of a single process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub pid: Pid,
    pub start: Ticks,
    pub duration: Ticks,
}

impl TimelineSegment {
    /// The first tick after the segment.
    pub fn end(&self) -> Ticks {
        self.start + self.duration
    }
}

impl Display for TimelineSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{} [{}, {})", self.pid, self.start, self.end())
    }
}

/// The reason a process left the CPU after a [`SchedulingDecision::Run`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The quanta has expired and the process has been preempted.
    Expired,
    /// The process has executed its whole burst.
    Exited,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Expired => write!(f, "Expired"),
            StopReason::Exited => write!(f, "Exited"),
        }
    }
}

/// The action taken by the scheduler in one iteration.
///
/// This is returned by the [`Scheduler::next`] function.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SchedulingDecision {
    /// The process with PID `pid` ran from `start` for `timeslice` time units.
    Run {
        pid: Pid,
        start: Ticks,
        timeslice: NonZeroUsize,
        reason: StopReason,
    },
    /// No process was ready, the CPU stayed idle for `ticks` time units
    /// starting at `from`.
    Idle { from: Ticks, ticks: NonZeroUsize },
    /// There are no more processes to schedule.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingDecision::Run {
                pid,
                start,
                timeslice,
                reason,
            } => {
                write!(f, "Run {} at {} for {} slices, {}", pid, start, timeslice, reason)
            }
            SchedulingDecision::Idle { from, ticks } => {
                write!(f, "Idle at {} for {} slices", from, ticks)
            }
            SchedulingDecision::Done => {
                write!(f, "Done, no more processes")
            }
        }
    }
}

/// The trait that any scheduler has to implement.
pub trait Scheduler: Send {
    /// Performs one scheduling iteration and returns what happened.
    ///
    /// Once [`SchedulingDecision::Done`] is returned, every following call
    /// returns it again.
    fn next(&mut self) -> SchedulingDecision;

    /// Returns the list of processes, in submission order.
    fn list(&self) -> Vec<&dyn Process>;

    /// The current logical time.
    fn now(&self) -> Ticks;
}

/// The state of a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// The process has not arrived yet, or has arrived but was not admitted.
    Pending,

    /// The process is in the ready queue.
    Ready,

    /// The process was the last one to run and has not been admitted again.
    Running,

    /// The process has executed its whole burst.
    Exited,
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessState::Pending => write!(f, "PENDING"),
            ProcessState::Ready => write!(f, "READY"),
            ProcessState::Running => write!(f, "RUNNING"),
            ProcessState::Exited => write!(f, "EXITED"),
        }
    }
}

/// The trait that the Process Control Block (PCB) has to implement.
///
/// The PCB can be implemented with any data structure as long as
/// it implements this trait.
pub trait Process {
    /// Return the PID of the process.
    fn pid(&self) -> Pid;

    /// Return the state of the process.
    fn state(&self) -> ProcessState;

    fn arrival(&self) -> Ticks;

    fn burst(&self) -> Ticks;

    /// Returns the execution time the process still needs.
    fn remaining(&self) -> Ticks;

    /// Returns the completion time, once the process has exited.
    fn completion(&self) -> Option<Ticks>;
}
