//! A round robin scheduling library.
//!
//! This library simulates the round robin CPU scheduling discipline over
//! logical time. Given a list of processes (arrival and burst time) and a
//! time quanta, it computes the completion, turnaround and waiting time of
//! every process together with the execution timeline.
//!
//! ```rust
//! use scheduler::{simulate, ProcessSpec};
//!
//! let specs = [ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 0, 2)];
//! let simulation = simulate(&specs, 2).unwrap();
//!
//! assert_eq!(simulation.results[0].pid, 2);
//! assert_eq!(simulation.results[1].completion, 6);
//! ```

mod error;
mod scheduler;
mod schedulers;
mod simulation;

pub use crate::error::InvalidInput;
pub use crate::scheduler::{
    Pid, Process, ProcessResult, ProcessSpec, ProcessState, Scheduler, SchedulingDecision,
    StopReason, Ticks, TimelineSegment,
};
pub use crate::schedulers::RoundRobin;
pub use crate::simulation::{Simulation, Summary};

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `specs` - the processes to schedule, they are copied and never modified.
/// * `quantum` - the time quanta that a process can run before it is preempted,
///               must be at least 1.
///
/// The scheduler is stepped with [`Scheduler::next`], which allows observing
/// every decision. Use [`simulate`] to get the outcome directly.
pub fn round_robin(specs: &[ProcessSpec], quantum: usize) -> Result<RoundRobin, InvalidInput> {
    RoundRobin::new(specs, quantum)
}

/// Runs a complete round robin simulation.
///
/// Fails with [`InvalidInput`] before doing any work if the quanta is 0, a
/// burst is 0, an id is 0 or used twice.
pub fn simulate(specs: &[ProcessSpec], quantum: usize) -> Result<Simulation, InvalidInput> {
    Ok(round_robin(specs, quantum)?.finish())
}
