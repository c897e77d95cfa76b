use std::fmt;

use calendar_utils::{same_day, strictly_between, total_days};
use chrono::NaiveDate;

use crate::error::{Error, Result};

// DateRange

/// A completed selection, `start` is never after `end`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range between two days, in any order.
    ///
    /// ```
    /// use booking_calendar::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let d1 = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    /// let d2 = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
    /// assert_eq!(DateRange::new(d2, d1).start(), d1);
    /// assert_eq!(DateRange::new(d2, d1), DateRange::new(d1, d2));
    /// ```
    pub fn new(day_1: NaiveDate, day_2: NaiveDate) -> Self {
        Self { start: day_1.min(day_2), end: day_1.max(day_2) }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days between both ends, a range over a single day counts for
    /// 0.
    pub fn total_days(&self) -> u32 {
        total_days(self.start, self.end).expect("date range is not ordered")
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

// SelectionRange

/// Range of days picked by the user, which may be partially filled.
///
/// The end of the range is never set while its start isn't.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct SelectionRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl SelectionRange {
    /// A selection with no day picked yet.
    pub const fn empty() -> Self {
        Self { start: None, end: None }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Check if both ends of the range have been picked.
    pub fn is_complete(&self) -> bool {
        self.as_range().is_some()
    }

    /// Get the completed range, if any.
    pub fn as_range(&self) -> Option<DateRange> {
        Some(DateRange { start: self.start?, end: self.end? })
    }

    /// Number of days of the selected range.
    ///
    /// ```
    /// use booking_calendar::{Error, SelectionRange};
    ///
    /// assert_eq!(SelectionRange::empty().total_days(), Err(Error::IncompleteRange));
    /// ```
    pub fn total_days(&self) -> Result<u32> {
        let range = self.as_range().ok_or(Error::IncompleteRange)?;
        Ok(total_days(range.start, range.end)?)
    }

    /// Check if a day is inside of the completed range, ends excluded.
    pub fn strictly_contains(&self, date: NaiveDate) -> bool {
        self.as_range()
            .is_some_and(|range| strictly_between(date, range.start, range.end))
    }

    pub fn is_start(&self, date: NaiveDate) -> bool {
        self.start.is_some_and(|start| same_day(date, start))
    }

    pub fn is_end(&self, date: NaiveDate) -> bool {
        self.end.is_some_and(|end| same_day(date, end))
    }

    /// Register a click on a day.
    ///
    /// The first click starts a range and the second one completes it, in
    /// which case the range is reordered if the second day comes first. Any
    /// click on a completed range starts a new one.
    pub(crate) fn push(&mut self, date: NaiveDate) -> SelectionChange {
        match (self.start, self.end) {
            (None, _) => {
                *self = Self { start: Some(date), end: None };
                SelectionChange::Started(date)
            }
            (Some(start), None) => {
                let range = DateRange::new(start, date);
                *self = range.into();
                SelectionChange::Completed(range)
            }
            (Some(_), Some(_)) => {
                *self = Self { start: Some(date), end: None };
                SelectionChange::Restarted(date)
            }
        }
    }
}

impl From<DateRange> for SelectionRange {
    fn from(range: DateRange) -> Self {
        Self { start: Some(range.start), end: Some(range.end) }
    }
}

// SelectionChange

/// Effect of a click on a day of the calendar.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum SelectionChange {
    /// The day is the start of a new range.
    Started(NaiveDate),
    /// The day completed the range.
    Completed(DateRange),
    /// A completed range was discarded and the day starts a new one.
    Restarted(NaiveDate),
    /// The day can't be selected, nothing changed.
    Ignored(NaiveDate),
}
