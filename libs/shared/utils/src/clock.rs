use chrono::{DateTime, Local, LocalResult, TimeZone};

/// Source of the current instant in the server's local calendar.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now }
    }

    /// Builds a clock from a local wall time. Returns `None` when the wall
    /// time does not exist or is ambiguous in the local timezone.
    pub fn at_local(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        match Local.with_ymd_and_hms(year, month, day, hour, min, sec) {
            LocalResult::Single(now) => Some(Self::new(now)),
            _ => None,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }
}
