use std::thread;
use std::time::Duration;

use scheduler::{Ticks, TimelineSegment};

/// Walks a finished timeline at a caller chosen pace.
///
/// Before yielding a segment the replay waits for as many `tick`s as
/// elapsed, in logical time, since the start of the previous one (or since 0
/// for the first segment), so idle gaps and longer segments take
/// proportionally longer to reveal.
///
/// ```rust
/// use std::time::Duration;
/// use processor::Replay;
/// use scheduler::{simulate, ProcessSpec};
///
/// let simulation = simulate(&[ProcessSpec::new(1, 0, 3)], 2).unwrap();
/// for segment in Replay::new(&simulation.timeline, Duration::ZERO) {
///     println!("{}", segment);
/// }
/// ```
pub struct Replay<'a, F = fn(Duration)> {
    timeline: &'a [TimelineSegment],
    tick: Duration,
    position: usize,
    clock: Ticks,
    wait: F,
}

impl<'a> Replay<'a> {
    /// Sleeps the current thread between segments.
    pub fn new(timeline: &'a [TimelineSegment], tick: Duration) -> Replay<'a> {
        Replay::with_wait(timeline, tick, thread::sleep as fn(Duration))
    }
}

impl<'a, F: FnMut(Duration)> Replay<'a, F> {
    /// Calls `wait` instead of sleeping.
    pub fn with_wait(timeline: &'a [TimelineSegment], tick: Duration, wait: F) -> Replay<'a, F> {
        Replay {
            timeline,
            tick,
            position: 0,
            clock: 0,
            wait,
        }
    }
}

impl<'a, F: FnMut(Duration)> Iterator for Replay<'a, F> {
    type Item = &'a TimelineSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.timeline.get(self.position)?;
        self.position += 1;

        let elapsed = segment.start.saturating_sub(self.clock);
        self.clock = segment.start;
        if elapsed > 0 && !self.tick.is_zero() {
            let ticks = u32::try_from(elapsed).unwrap_or(u32::MAX);
            (self.wait)(self.tick.saturating_mul(ticks));
        }

        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.timeline.len() - self.position;
        (left, Some(left))
    }
}
