use std::cmp;
use std::time::Duration;

/// Bounded retry schedule for waiting on the lightweight sink to attach
///
/// Passed as configuration rather than hand-rolled timers so the schedule is
/// testable on its own. The delay grows linearly with the attempt number and
/// is capped at `max_delay`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Delay to wait after the given attempt (1-based)
    pub fn delay(&self, attempt: u32) -> Duration {
        cmp::min(self.base_delay.saturating_mul(attempt), self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_millis(2000),
        }
    }
}
