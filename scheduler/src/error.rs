use thiserror::Error;

use crate::Pid;

/// Rejected simulation input.
///
/// Input is validated before any simulation state is built, so an error
/// never comes with partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("time quantum must be at least 1")]
    Quantum,

    /// `index` is the position of the spec in the submitted list.
    #[error("process #{index}: id must be at least 1")]
    ZeroId { index: usize },

    #[error("process {pid}: burst must be at least 1")]
    Burst { pid: Pid },

    #[error("process {pid}: id is used by more than one process")]
    DuplicateId { pid: Pid },

    /// The last possible completion time does not fit in [`Ticks`](crate::Ticks).
    #[error("process {pid}: arrival and bursts overflow the simulation clock")]
    Horizon { pid: Pid },
}

impl InvalidInput {
    /// The process the error refers to, if any.
    pub fn pid(&self) -> Option<Pid> {
        match *self {
            InvalidInput::Quantum | InvalidInput::ZeroId { .. } => None,
            InvalidInput::Burst { pid }
            | InvalidInput::DuplicateId { pid }
            | InvalidInput::Horizon { pid } => Some(pid),
        }
    }
}
