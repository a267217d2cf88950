use std::time::Duration;
use crate::constants::MIN_INTERVAL_MS;

// Repeating timer driven by the frame time handed in by the host.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: Duration,
    elapsed: Duration,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(MIN_INTERVAL_MS)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advances the timer and returns how many times it fired.
    pub fn tick(&mut self, dt: Duration) -> u64 {
        self.elapsed += dt;

        let interval = self.interval.as_nanos();
        let elapsed = self.elapsed.as_nanos();

        // The remainder is below the interval, which itself came from a Duration
        self.elapsed = Duration::from_nanos((elapsed % interval) as u64);
        u64::try_from(elapsed / interval).unwrap_or(u64::MAX)
    }
}
