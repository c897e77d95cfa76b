use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::month::DisplayMonth;

/// Order of the columns of a month grid, weeks start on Sunday.
pub const WEEK_DAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Short label of a weekday, as displayed in a grid header.
pub fn weekday_label(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Which days are laid out in the grid of a month.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum GridPolicy {
    /// Only the days of the month.
    ExactMonth,
    /// Days of the month, extended with days of adjacent months to complete
    /// the first and last weeks.
    #[default]
    PaddedWeeks,
}

/// List the days to render for a month, in order.
///
/// With [`GridPolicy::PaddedWeeks`] the grid starts on the Sunday on or
/// before the 1st and ends on the Saturday on or after the last day of the
/// month, which always gives between 4 and 6 full weeks. Near the bounds of
/// dates supported by chrono the padding is truncated.
///
/// ```
/// use calendar_utils::{days_in_grid, DisplayMonth, GridPolicy};
/// use chrono::NaiveDate;
///
/// // February 2015 starts on Sunday and ends on Saturday
/// let month = DisplayMonth::new(2015, 2).unwrap();
/// let grid = days_in_grid(month, GridPolicy::PaddedWeeks);
/// assert_eq!(grid.len(), 28);
/// assert_eq!(grid[0], NaiveDate::from_ymd_opt(2015, 2, 1).unwrap());
/// ```
pub fn days_in_grid(month: DisplayMonth, policy: GridPolicy) -> Vec<NaiveDate> {
    let (first, last) = match policy {
        GridPolicy::ExactMonth => (month.first_day(), month.last_day()),
        GridPolicy::PaddedWeeks => {
            let first = month.first_day();
            let last = month.last_day();
            let lead = Days::new(first.weekday().num_days_from_sunday().into());
            let trail = Days::new((6 - last.weekday().num_days_from_sunday()).into());

            (
                first.checked_sub_days(lead).unwrap_or(first),
                last.checked_add_days(trail).unwrap_or(last),
            )
        }
    };

    first.iter_days().take_while(|day| *day <= last).collect()
}
