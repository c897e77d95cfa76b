use chrono::{Local, NaiveDate};

/// Source of the current date used to disable past days, highlight today and
/// bound month navigation.
pub trait Clock: Clone {
    fn today(&self) -> NaiveDate;
}

/// Read the wall-clock date of the local timezone.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on a given day.
///
/// ```
/// use booking_calendar::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
