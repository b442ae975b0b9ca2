//! Injectable time source.

use chrono::{DateTime, Local, Timelike};

/// A source of the current local wall-clock time.
///
/// The prediction request carries the hour and day-of-month of the moment
/// it is composed. Deriving those through this trait keeps request
/// composition deterministic under test and lets the CLI pin them.
pub trait Clock {
    /// Returns the current local time.
    fn now(&self) -> DateTime<Local>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Pins the clock to the given instant.
    #[must_use]
    pub const fn new(instant: DateTime<Local>) -> Self {
        Self(instant)
    }

    /// Pins the clock to the current date with the given hour and/or
    /// day-of-month overridden.
    ///
    /// Returns `None` if the resulting date does not exist (e.g. day 31
    /// in a 30-day month).
    #[must_use]
    pub fn with_overrides(hour: Option<u32>, day: Option<u32>) -> Option<Self> {
        use chrono::Datelike;
        let mut now = Local::now();
        if let Some(day) = day {
            now = now.with_day(day)?;
        }
        if let Some(hour) = hour {
            now = now.with_hour(hour)?;
        }
        Some(Self(now))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
