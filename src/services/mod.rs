//! Application service layer.
//!
//! Services hold the calculations that work across many records, kept
//! separate from the command handlers that present their results.

mod birthdays;

pub use birthdays::{
    BirthdayCalculator, Clock, FixedClock, SystemClock, UpcomingBirthday, UPCOMING_WINDOW_DAYS,
};
