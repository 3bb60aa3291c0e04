use std::time::Duration;

/// Monotonic elapsed time since the loop started.
///
/// The driver never reads wall time itself; the scheduler supplies each
/// frame's timestamp. A timestamp behind the previous one is clamped so the
/// clock never rewinds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Clock {
    elapsed: Duration,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now` and return the elapsed seconds. Returns the previous
    /// value unchanged if `now` is in the past.
    pub fn advance(&mut self, now: Duration) -> f32 {
        if now > self.elapsed {
            self.elapsed = now;
        }
        self.elapsed.as_secs_f32()
    }

    /// Seconds since the loop started.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Seconds between the previous frame and `now`, zero if `now` regressed.
    pub fn delta_seconds(&self, now: Duration) -> f32 {
        now.saturating_sub(self.elapsed).as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_rewinds() {
        let mut clock = Clock::new();
        assert_eq!(clock.advance(Duration::from_secs(2)), 2.0);
        assert_eq!(clock.advance(Duration::from_secs(1)), 2.0);
        assert_eq!(clock.elapsed_seconds(), 2.0);
    }

    #[test]
    fn delta_is_zero_for_regressed_timestamps() {
        let mut clock = Clock::new();
        clock.advance(Duration::from_secs(3));
        assert_eq!(clock.delta_seconds(Duration::from_secs(1)), 0.0);
        assert_eq!(clock.delta_seconds(Duration::from_secs(4)), 1.0);
    }
}
