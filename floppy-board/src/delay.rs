use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

/// Busy-wait delay that paces back to back waits against a running deadline,
/// like `embassy_time::Ticker` does for loops. A tone built from many 1 ms
/// waits then lasts its full duration without the call overhead of every
/// step piling up.
pub struct PacedDelay {
    deadline: Instant,
}

/// How late a wait may start and still continue the previous deadline.
const PACE_SLACK: Duration = Duration::from_millis(1);

impl PacedDelay {
    pub fn new() -> Self {
        PacedDelay {
            deadline: Instant::now(),
        }
    }

    fn wait(&mut self, duration: Duration) {
        let now = Instant::now();
        // anything later than the slack is a fresh wait, e.g. after console input
        if now > self.deadline + PACE_SLACK {
            self.deadline = now;
        }

        self.deadline += duration;
        while Instant::now() < self.deadline {}
    }
}

impl Default for PacedDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for PacedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wait(Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait(Duration::from_millis(ms as u64));
    }
}
