//! Date source used to stamp exercises logged without an explicit date.

use chrono::{Local, NaiveDate};

/// Supplies "today" when a caller does not give an exercise a date
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Use `date` when given, otherwise fall back to today
    fn resolve(&self, date: Option<NaiveDate>) -> NaiveDate {
        date.unwrap_or_else(|| self.today())
    }
}

/// Wall clock in the local timezone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date (scripts and tests)
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
