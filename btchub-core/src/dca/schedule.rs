//! Purchase intervals and inclusive calendar stepping.
//!
//! `DateRange` walks `start, start + step, …` while the date is `<= end`.
//! The last point is wherever the stepping lands, so a range can finish a
//! few days short of `end`; the point count is `floor(days / step) + 1`.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// How often a DCA purchase happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Calendar days between purchases. "Monthly" is a fixed 30 days.
    pub fn step_days(self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interval {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownChoice {
                question: "interval",
                value: s.to_string(),
                expected: "Daily, Weekly, Monthly".into(),
            })
    }
}

/// Finite, restartable sequence of dates from `start` to `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    step_days: u32,
}

impl DateRange {
    /// A zero step is treated as one day.
    pub fn new(start: NaiveDate, end: NaiveDate, step_days: u32) -> Self {
        Self {
            start,
            end,
            step_days: step_days.max(1),
        }
    }

    /// `[as_of − years, as_of]` stepped by the interval.
    ///
    /// The start is the same calendar day `years` earlier; Feb 29 clamps to
    /// Feb 28 in non-leap years.
    pub fn trailing_years(as_of: NaiveDate, years: u32, interval: Interval) -> Self {
        let start = as_of
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN);
        Self::new(start, as_of, interval.step_days())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn step_days(&self) -> u32 {
        self.step_days
    }

    /// Number of dates the range yields.
    pub fn len(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        let days = (self.end - self.start).num_days() as u64;
        (days / u64::from(self.step_days)) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Start a fresh walk over the range.
    pub fn iter(&self) -> DateSteps {
        DateSteps {
            next: (self.start <= self.end).then_some(self.start),
            end: self.end,
            step: Days::new(u64::from(self.step_days)),
        }
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateSteps;

    fn into_iter(self) -> DateSteps {
        self.iter()
    }
}

/// Iterator over a `DateRange`.
#[derive(Debug, Clone)]
pub struct DateSteps {
    next: Option<NaiveDate>,
    end: NaiveDate,
    step: Days,
}

impl Iterator for DateSteps {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.checked_add_days(self.step);
        Some(current)
    }
}
