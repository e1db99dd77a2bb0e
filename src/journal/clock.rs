//! Clock Module
//!
//! Injected time source so the store and statistics can be driven by a
//! controllable clock in tests instead of ambient wall time.

use chrono::{DateTime, Local};

// == Clock Trait ==
/// Source of "now" for timestamps, undo-window deadlines, and calendar
/// statistics.
pub trait Clock: Send + Sync {
    /// Current local time.
    fn now(&self) -> DateTime<Local>;

    /// Current instant as epoch milliseconds.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

// == System Clock ==
/// Production clock backed by the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}


// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::testing::ManualClock;
    use super::*;

    #[test]
    fn test_system_clock_is_current() {
        let clock = SystemClock;
        let before = Local::now().timestamp_millis();
        let now = clock.now_millis();
        let after = Local::now().timestamp_millis();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_manual_clock_advances_only_on_demand() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_millis(), 1_000);
        assert_eq!(clock.now_millis(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_millis(), 1_500);

        clock.set(42);
        assert_eq!(clock.now_millis(), 42);
    }
}
