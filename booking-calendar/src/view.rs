//! What a calendar displays for a given state.
//!
//! Views are plain values recomputed from the state of the calendar, they
//! don't hold any reference to it.

use std::fmt;

use calendar_utils::{weekday_label, WEEK_DAYS};
use chrono::{Datelike, NaiveDate, Weekday};

/// Top of the calendar: label of the displayed month and navigation.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Header {
    pub month_name: &'static str,
    pub year: i32,
    /// The button to browse to previous month must be disabled.
    pub previous_disabled: bool,
}

/// Display state of a day of the grid.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    /// The day is strictly inside of the selected range.
    pub is_selected: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    /// The day can't be clicked.
    pub is_disabled: bool,
}

impl DayCell {
    /// Single character summarizing the state of the day when printed.
    fn marker(&self) -> char {
        if self.is_range_start {
            '['
        } else if self.is_range_end {
            ']'
        } else if self.is_selected {
            '='
        } else if self.is_today {
            '*'
        } else if self.is_disabled {
            '.'
        } else {
            ' '
        }
    }
}

/// A full month, as displayed by the calendar.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MonthView {
    pub header: Header,
    /// Column order of the days.
    pub week_days: [Weekday; 7],
    pub days: Vec<DayCell>,
}

impl MonthView {
    pub(crate) fn new(header: Header, days: Vec<DayCell>) -> Self {
        Self { header, week_days: WEEK_DAYS, days }
    }

    /// Get the state of a displayed day.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days.iter().find(|cell| cell.date == date)
    }

    /// Iterate over the rows of the grid. The first row may not be complete
    /// if the grid doesn't start on a Sunday.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> + '_ {
        let lead = self
            .days
            .first()
            .map(|cell| cell.date.weekday().num_days_from_sunday() as usize)
            .unwrap_or(0);

        let first_row = (7 - lead).min(self.days.len());
        let (head, tail) = self.days.split_at(first_row);
        std::iter::once(head).filter(|row| !row.is_empty()).chain(tail.chunks(7))
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prev = if self.header.previous_disabled { ' ' } else { '<' };
        writeln!(f, "{prev} {} {} >", self.header.month_name, self.header.year)?;

        for wday in self.week_days {
            write!(f, " {} ", weekday_label(wday))?;
        }

        for week in self.weeks() {
            writeln!(f)?;

            if let Some(first) = week.first() {
                let lead = first.date.weekday().num_days_from_sunday();

                for _ in 0..lead {
                    write!(f, "    ")?;
                }
            }

            for cell in week {
                write!(f, "{:>2}{} ", cell.date.day(), cell.marker())?;
            }
        }

        Ok(())
    }
}
