//! Fixed-rate loop scheduling

use std::thread;
use std::time::{Duration, Instant};

use crate::common::{ToolError, ToolResult};

/// Sleeps so that successive calls to `sleep` are one period apart.
///
/// Deadlines are absolute, so the time spent between calls does not
/// accumulate as drift. When the caller falls more than a full period
/// behind, the schedule restarts from now instead of firing a burst.
#[derive(Debug, Clone)]
pub struct Rate {
    period: Duration,
    next_deadline: Instant,
}

impl Rate {
    pub fn new(hz: f64) -> ToolResult<Self> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(ToolError::InvalidParameter(format!(
                "rate must be a positive frequency, got {}",
                hz
            )));
        }
        let period = Duration::from_secs_f64(1.0 / hz);
        Ok(Self {
            period,
            next_deadline: Instant::now() + period,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Restart the schedule one period from now
    pub fn reset(&mut self) {
        self.next_deadline = Instant::now() + self.period;
    }

    /// Block until the next tick
    pub fn sleep(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            thread::sleep(self.next_deadline - now);
            self.next_deadline += self.period;
        } else if now - self.next_deadline > self.period {
            self.next_deadline = now + self.period;
        } else {
            self.next_deadline += self.period;
        }
    }
}
