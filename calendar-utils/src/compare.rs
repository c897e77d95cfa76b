//! Comparisons between dates at day granularity.
//!
//! All functions accept any [`Datelike`] so that time of day, if any, is
//! ignored.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

fn day_number(date: &impl Datelike) -> i32 {
    date.num_days_from_ce()
}

/// Check if two dates fall on the same day.
///
/// ```
/// use calendar_utils::same_day;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// assert!(same_day(date, date.and_hms_opt(18, 30, 0).unwrap()));
/// assert!(!same_day(date, date.succ_opt().unwrap()));
/// ```
pub fn same_day(a: impl Datelike, b: impl Datelike) -> bool {
    day_number(&a) == day_number(&b)
}

/// Check if two dates have the same month number, whatever their year.
pub fn same_month(a: impl Datelike, b: impl Datelike) -> bool {
    a.month() == b.month()
}

pub fn same_year(a: impl Datelike, b: impl Datelike) -> bool {
    a.year() == b.year()
}

/// Check if a date is strictly before `today`.
///
/// ```
/// use calendar_utils::is_before;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
/// assert!(is_before(today.pred_opt().unwrap(), today));
/// assert!(!is_before(today, today));
/// ```
pub fn is_before(date: impl Datelike, today: NaiveDate) -> bool {
    day_number(&date) < day_number(&today)
}

/// Check if a date is after `start` and before `end`, both bounds being
/// excluded.
///
/// ```
/// use calendar_utils::strictly_between;
/// use chrono::NaiveDate;
///
/// let date = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
/// assert!(strictly_between(date(2021), date(2020), date(2022)));
/// assert!(!strictly_between(date(2023), date(2020), date(2022)));
/// assert!(!strictly_between(date(2020), date(2020), date(2022)));
/// ```
pub fn strictly_between(date: impl Datelike, start: impl Datelike, end: impl Datelike) -> bool {
    let day = day_number(&date);
    day_number(&start) < day && day < day_number(&end)
}

/// Count the days from `start` to `end`, a range of a single day counting
/// for 0.
///
/// ```
/// use calendar_utils::total_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
/// assert_eq!(total_days(start, end), Ok(3));
/// assert!(total_days(end, start).is_err());
/// ```
pub fn total_days(start: NaiveDate, end: NaiveDate) -> Result<u32> {
    if end < start {
        #[cfg(feature = "log")]
        log::warn!("Refused to count days of reversed range {start} - {end}");
        return Err(Error::ReversedRange { start, end });
    }

    (end - start)
        .num_days()
        .try_into()
        .map_err(|_| Error::OutOfRange)
}
