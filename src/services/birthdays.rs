//! Upcoming birthday calculation.
//!
//! Works purely on calendar dates: the caller decides what "today" is, which
//! keeps the calculation deterministic and lets the session inject a clock.

use crate::domain::birthday::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::fmt;

/// How many days ahead (inclusive) a birthday counts as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Source of the current local date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the date from the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A contact to congratulate, and on which day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// Finds contacts whose birthday falls within the next week.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthdayCalculator;

impl BirthdayCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Contacts with a birthday between `today` and `today + 7` days, inclusive.
    ///
    /// A birthday that already passed this year is considered for next year
    /// instead. Birthdays landing on a weekend are congratulated on the
    /// following Monday. Output order follows `records`.
    pub fn upcoming<'a, I>(&self, records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter_map(|record| {
                let birthday = record.birthday().get()?;
                let congratulation_date = congratulation_date(birthday.date(), today)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date,
                })
            })
            .collect()
    }
}

/// Congratulation date for one birthday, or `None` when it is outside the window.
fn congratulation_date(birth_date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let mut next = anniversary(birth_date, today.year())?;
    if next < today {
        next = anniversary(birth_date, today.year() + 1)?;
    }

    let delta = (next - today).num_days();
    if !(0..=UPCOMING_WINDOW_DAYS).contains(&delta) {
        return None;
    }

    shift_off_weekend(next)
}

/// The birthday in `year`; 29 February falls back to 1 March in common years.
fn anniversary(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    birth_date
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

fn shift_off_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}
