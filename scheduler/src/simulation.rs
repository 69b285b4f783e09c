use serde::Serialize;

use crate::{Pid, ProcessResult, Ticks, TimelineSegment};

/// The outcome of a complete simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    /// The quanta the simulation ran with.
    pub quantum: Ticks,

    /// One entry per process, in completion order.
    pub results: Vec<ProcessResult>,

    /// The executed segments, in chronological order. Idle time has no
    /// segment.
    pub timeline: Vec<TimelineSegment>,
}

impl Simulation {
    /// Returns the segments executed by `pid`.
    pub fn segments_of(&self, pid: Pid) -> impl Iterator<Item = &TimelineSegment> + '_ {
        self.timeline
            .iter()
            .filter(move |segment| segment.pid == pid)
    }

    pub fn result_of(&self, pid: Pid) -> Option<&ProcessResult> {
        self.results.iter().find(|result| result.pid == pid)
    }

    /// The time at which the last process completed.
    pub fn makespan(&self) -> Ticks {
        self.timeline.last().map_or(0, TimelineSegment::end)
    }

    pub fn summary(&self) -> Summary {
        let processes = self.results.len();
        let makespan = self.makespan();
        let busy: Ticks = self.timeline.iter().map(|segment| segment.duration).sum();

        let average = |total: Ticks| {
            if processes == 0 {
                0.0
            } else {
                total as f64 / processes as f64
            }
        };

        Summary {
            processes,
            makespan,
            busy,
            idle: makespan - busy,
            average_turnaround: average(self.results.iter().map(|r| r.turnaround).sum()),
            average_waiting: average(self.results.iter().map(|r| r.waiting).sum()),
            utilization: if makespan == 0 {
                0.0
            } else {
                busy as f64 / makespan as f64
            },
        }
    }
}

/// Aggregate statistics of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub processes: usize,
    pub makespan: Ticks,
    /// Time spent executing processes.
    pub busy: Ticks,
    /// Time between 0 and the makespan with no process running.
    pub idle: Ticks,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    /// `busy / makespan`, between 0 and 1.
    pub utilization: f64,
}

#[cfg(test)]
mod tests {
    use crate::{simulate, Pid, ProcessSpec};
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_with_idle_gap() {
        let specs = [ProcessSpec::new(1, 2, 3), ProcessSpec::new(2, 2, 1)];
        let summary = simulate(&specs, 2).unwrap().summary();

        // P1 2..4, P2 4..5, P1 5..6
        assert_eq!(summary.processes, 2);
        assert_eq!(summary.makespan, 6);
        assert_eq!(summary.busy, 4);
        assert_eq!(summary.idle, 2);
        assert_eq!(summary.average_turnaround, 3.5);
        assert_eq!(summary.average_waiting, 1.5);
        assert_eq!(summary.utilization, 4.0 / 6.0);
    }

    #[test]
    fn summary_of_nothing() {
        let summary = simulate(&[], 1).unwrap().summary();
        assert_eq!(summary.makespan, 0);
        assert_eq!(summary.average_waiting, 0.0);
        assert_eq!(summary.utilization, 0.0);
    }

    #[test]
    fn segments_of_one_process() {
        let specs = [ProcessSpec::new(1, 0, 3), ProcessSpec::new(2, 0, 3)];
        let simulation = simulate(&specs, 2).unwrap();
        let pid = Pid::new(2).unwrap();

        let starts: Vec<_> = simulation.segments_of(pid).map(|s| s.start).collect();
        assert_eq!(starts, vec![2, 5]);
        assert_eq!(simulation.result_of(pid).map(|r| r.completion), Some(6));
    }
}
