use std::time::{Duration, Instant};

/// Default event-loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Cancellable whole-second tick source for the focus timer. While armed it
/// accumulates elapsed wall time and hands out whole seconds; cancelling
/// disarms it so no tick can fire after a pause or teardown. Fractional
/// carry is dropped on cancel, so re-arming starts a fresh second.
#[derive(Debug, Default)]
pub struct SecondTicker {
    armed_at: Option<Instant>,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self { armed_at: None }
    }

    /// Start counting from now; re-arming resets the baseline
    pub fn arm(&mut self) {
        self.armed_at = Some(Instant::now());
    }

    /// Disarm. Subsequent drains yield 0 until re-armed.
    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Shift the armed baseline into the past to simulate elapsed time
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, secs: u64) {
        if let Some(baseline) = self.armed_at {
            self.armed_at = Some(baseline - Duration::from_secs(secs));
        }
    }

    /// Whole seconds elapsed since the last drain (or arm). Advances the
    /// baseline by exactly the seconds returned, keeping the sub-second
    /// remainder for the next drain. Yields 0 while disarmed.
    pub fn drain_seconds(&mut self) -> u32 {
        let Some(baseline) = self.armed_at else {
            return 0;
        };

        let elapsed = baseline.elapsed();
        let whole = elapsed.as_secs() as u32;
        if whole > 0 {
            self.armed_at = Some(baseline + Duration::from_secs(whole as u64));
        }
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_disarmed_ticker_yields_nothing() {
        let mut ticker = SecondTicker::new();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.drain_seconds(), 0);
    }

    #[test]
    fn test_freshly_armed_ticker_yields_nothing() {
        let mut ticker = SecondTicker::new();
        ticker.arm();
        assert_eq!(ticker.drain_seconds(), 0);
    }

    #[test]
    fn test_cancel_disarms() {
        let mut ticker = SecondTicker::new();
        ticker.arm();
        ticker.cancel();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.drain_seconds(), 0);
    }

    #[test]
    fn test_drain_advances_baseline_by_whole_seconds() {
        let mut ticker = SecondTicker::new();
        // Simulate 2.5 elapsed seconds
        ticker.arm();
        ticker.armed_at = ticker.armed_at.map(|t| t - Duration::from_millis(2500));

        assert_eq!(ticker.drain_seconds(), 2);
        // The half-second remainder stays banked, not discarded
        let remaining = ticker.armed_at.unwrap().elapsed();
        assert!(remaining >= Duration::from_millis(500));
        assert!(remaining < Duration::from_millis(1500));
    }

    #[test]
    fn test_drain_twice_does_not_double_count() {
        let mut ticker = SecondTicker::new();
        ticker.arm();
        ticker.backdate(3);

        assert_eq!(ticker.drain_seconds(), 3);
        assert_eq!(ticker.drain_seconds(), 0);
    }
}
