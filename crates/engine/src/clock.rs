//! Fixed-timestep gravity clock for drivers.
//!
//! The engine owns no timer. A driver feeds real elapsed time into a
//! [`GravityClock`] and calls `Engine::tick` once for every tick it reports
//! due. Tests can skip the clock entirely and tick by hand.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GravityClock {
    interval: Duration,
    accumulated: Duration,
}

impl GravityClock {
    /// A zero interval is clamped to 1ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed time and return how many ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }

    /// Time left before the next tick is due
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    /// Drop any partial interval, e.g. when resuming from pause
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_whole_intervals_only() {
        let mut clock = GravityClock::new(Duration::from_millis(200));
        assert_eq!(clock.advance(Duration::from_millis(150)), 0);
        assert_eq!(clock.until_next(), Duration::from_millis(50));
        assert_eq!(clock.advance(Duration::from_millis(60)), 1);
        assert_eq!(clock.until_next(), Duration::from_millis(190));
        assert_eq!(clock.advance(Duration::from_millis(610)), 3);
    }

    #[test]
    fn reset_discards_partial_interval() {
        let mut clock = GravityClock::new(Duration::from_millis(100));
        clock.advance(Duration::from_millis(90));
        clock.reset();
        assert_eq!(clock.advance(Duration::from_millis(20)), 0);
        assert_eq!(clock.until_next(), Duration::from_millis(80));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let clock = GravityClock::new(Duration::ZERO);
        assert_eq!(clock.interval(), Duration::from_millis(1));
    }
}
