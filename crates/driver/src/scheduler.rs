use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Source of frame timings for [`crate::SceneDriver::run`].
///
/// `next_frame` blocks until the next display refresh slot and returns the
/// elapsed time since the loop started; `None` means host teardown and is
/// the only normal way out of the loop. Exactly one frame is in flight at a
/// time: the driver finishes its tick before pulling the next timing.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> Option<Duration>;
}

/// Scripted scheduler: replays a fixed list of frame timestamps.
///
/// Used by tests and headless runs where determinism matters more than
/// real-time pacing.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    frames: VecDeque<Duration>,
}

impl ManualScheduler {
    pub fn from_timestamps(timestamps: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            frames: timestamps.into_iter().collect(),
        }
    }

    /// `count` frames at a fixed step, starting one step after zero.
    pub fn fixed_step(step: Duration, count: usize) -> Self {
        Self {
            frames: (1..=count as u32).map(|i| step * i).collect(),
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn next_frame(&mut self) -> Option<Duration> {
        self.frames.pop_front()
    }
}

/// Wall-clock scheduler pacing frames at a fixed rate.
///
/// Sleeps out the remainder of each frame budget; a frame that ran long is
/// simply followed immediately by the next one.
#[derive(Debug)]
pub struct IntervalScheduler {
    start: Instant,
    period: Duration,
    next_deadline: Duration,
}

impl IntervalScheduler {
    pub fn from_fps(fps: f64) -> Self {
        Self {
            start: Instant::now(),
            period: Duration::from_secs_f64(1.0 / fps),
            next_deadline: Duration::ZERO,
        }
    }
}

impl FrameScheduler for IntervalScheduler {
    fn next_frame(&mut self) -> Option<Duration> {
        self.next_deadline += self.period;
        let now = self.start.elapsed();
        if let Some(remaining) = self.next_deadline.checked_sub(now) {
            std::thread::sleep(remaining);
        }
        Some(self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_replays_in_order_then_ends() {
        let mut sched = ManualScheduler::fixed_step(Duration::from_millis(16), 3);
        assert_eq!(sched.next_frame(), Some(Duration::from_millis(16)));
        assert_eq!(sched.next_frame(), Some(Duration::from_millis(32)));
        assert_eq!(sched.next_frame(), Some(Duration::from_millis(48)));
        assert_eq!(sched.next_frame(), None);
    }

    #[test]
    fn interval_scheduler_never_runs_ahead_of_its_deadlines() {
        let mut sched = IntervalScheduler::from_fps(200.0);
        let period = sched.period;

        let mut previous = Duration::ZERO;
        for frame in 1..=3u32 {
            let elapsed = sched.next_frame().expect("interval scheduler never ends");
            // Each frame waits out its slot; timestamps only move forward.
            assert!(elapsed >= period * frame);
            assert!(elapsed >= previous);
            previous = elapsed;
        }
    }
}
