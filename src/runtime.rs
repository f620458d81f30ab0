//! Gravity scheduling for the main loop.
//!
//! Gravity is an explicit schedulable task: a deadline-based timer with
//! arm/cancel semantics. The main loop keeps it in sync with the published
//! snapshot: armed with the level's period while play is active, cancelled
//! during pause, game over, and idle.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct GravityTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self {
            period: Duration::ZERO,
            deadline: None,
        }
    }

    /// Schedule ticks at `period`, replacing any pending deadline
    pub fn arm(&mut self, now: Instant, period: Duration) {
        self.period = period;
        self.deadline = Some(now + period);
    }

    /// Stop ticking; any pending deadline is discarded
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time remaining until the next tick; None when cancelled
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consume a due deadline, re-arming at the current period.
    /// Returns false when cancelled or not yet due.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_timer_never_fires() {
        let mut timer = GravityTimer::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.time_until_due(Instant::now()), None);
        assert!(!timer.fire_if_due(Instant::now()));
    }

    #[test]
    fn test_fires_at_deadline_and_rearms() {
        let mut timer = GravityTimer::new();
        let start = Instant::now();
        timer.arm(start, Duration::from_millis(100));

        assert!(!timer.fire_if_due(start + Duration::from_millis(99)));
        assert!(timer.fire_if_due(start + Duration::from_millis(100)));

        // Re-armed relative to the fire time.
        let fired_at = start + Duration::from_millis(100);
        assert!(!timer.fire_if_due(fired_at + Duration::from_millis(99)));
        assert!(timer.fire_if_due(fired_at + Duration::from_millis(100)));
    }

    #[test]
    fn test_rearm_replaces_pending_deadline() {
        let mut timer = GravityTimer::new();
        let start = Instant::now();
        timer.arm(start, Duration::from_millis(100));

        // Level went up: shorter period, fresh deadline.
        let later = start + Duration::from_millis(50);
        timer.arm(later, Duration::from_millis(40));

        assert!(!timer.fire_if_due(later + Duration::from_millis(39)));
        assert!(timer.fire_if_due(later + Duration::from_millis(40)));
        assert_eq!(timer.period(), Duration::from_millis(40));
    }

    #[test]
    fn test_cancel_discards_deadline() {
        let mut timer = GravityTimer::new();
        let start = Instant::now();
        timer.arm(start, Duration::from_millis(10));
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_time_until_due_saturates_past_deadline() {
        let mut timer = GravityTimer::new();
        let start = Instant::now();
        timer.arm(start, Duration::from_millis(10));

        let late = start + Duration::from_millis(50);
        assert_eq!(timer.time_until_due(late), Some(Duration::ZERO));
    }
}
