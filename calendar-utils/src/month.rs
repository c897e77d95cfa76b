use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{Error, Result};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Get the english name of a month from its 0-based index.
///
/// ```
/// use calendar_utils::month_name;
///
/// assert_eq!(month_name(0).unwrap(), "January");
/// assert_eq!(month_name(11).unwrap(), "December");
/// assert!(month_name(12).is_err());
/// ```
pub fn month_name(index: u32) -> Result<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .ok_or(Error::InvalidMonth(index))
}

/// Shift a date by a number of months, the day of month is clamped if the
/// target month is shorter.
///
/// ```
/// use calendar_utils::add_months;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
/// assert_eq!(add_months(date, 1), Ok(NaiveDate::from_ymd_opt(2021, 2, 28).unwrap()));
/// ```
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or(Error::OutOfRange)
}

/// Shift a date back by a number of months, see [`add_months`].
pub fn subtract_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_sub_months(Months::new(months))
        .ok_or(Error::OutOfRange)
}

/// Count the days of the month of a date.
///
/// ```
/// use calendar_utils::days_in_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2020, 2, 10).unwrap()), 29);
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2021, 2, 10).unwrap()), 28);
/// ```
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first_this_month = date
        .with_day(1)
        .expect("first of the month should always exist");

    let Some(first_next_month) = first_this_month.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return 31;
    };

    (first_next_month - first_this_month)
        .num_days()
        .try_into()
        .expect("time not monotonic while comparing dates")
}

// DisplayMonth

/// A month of a specific year, as displayed by a calendar.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayMonth {
    first_day: NaiveDate,
}

impl DisplayMonth {
    /// Build a month from a year and a 1-based month number.
    ///
    /// ```
    /// use calendar_utils::{DisplayMonth, Error};
    ///
    /// assert_eq!(DisplayMonth::new(2021, 2).unwrap().name(), "February");
    /// assert_eq!(DisplayMonth::new(2021, 13), Err(Error::InvalidMonth(13)));
    /// ```
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::OutOfRange)?;
        Ok(Self { first_day })
    }

    /// The month containing given date.
    pub fn of(date: NaiveDate) -> Self {
        let first_day = date
            .with_day(1)
            .expect("first of the month should always exist");

        Self { first_day }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// 0-based month number.
    pub fn month0(&self) -> u32 {
        self.first_day.month0()
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.first_day.month0() as usize]
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .with_day(days_in_month(self.first_day))
            .expect("last day of the month should always exist")
    }

    /// Check if a date belongs to this month, ignoring time of day.
    ///
    /// ```
    /// use calendar_utils::DisplayMonth;
    /// use chrono::NaiveDate;
    ///
    /// let month = DisplayMonth::new(2021, 2).unwrap();
    /// assert!(month.contains(NaiveDate::from_ymd_opt(2021, 2, 28).unwrap()));
    /// assert!(!month.contains(NaiveDate::from_ymd_opt(2022, 2, 28).unwrap()));
    /// ```
    pub fn contains(&self, date: impl Datelike) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The month after this one.
    pub fn succ(&self) -> Result<Self> {
        add_months(self.first_day, 1).map(|first_day| Self { first_day })
    }

    /// The month before this one.
    pub fn pred(&self) -> Result<Self> {
        subtract_months(self.first_day, 1).map(|first_day| Self { first_day })
    }
}

impl fmt::Display for DisplayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_days_in_month() {
        let days = |y, m| days_in_month(NaiveDate::from_ymd_opt(y, m, 1).unwrap());
        assert_eq!(days(2021, 1), 31);
        assert_eq!(days(2021, 4), 30);
        assert_eq!(days(1900, 2), 28);
        assert_eq!(days(2000, 2), 29);
        assert_eq!(days(2021, 12), 31);
        assert_eq!(days_in_month(NaiveDate::MAX), 31);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(DisplayMonth::of(NaiveDate::MAX).succ(), Err(Error::OutOfRange));
        assert_eq!(DisplayMonth::of(NaiveDate::MIN).pred(), Err(Error::OutOfRange));
        assert_eq!(month_name(u32::MAX), Err(Error::InvalidMonth(u32::MAX)));
    }
}
