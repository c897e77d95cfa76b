#![doc = include_str!("../README.md")]

pub mod compare;
pub mod error;
pub mod grid;
pub mod month;

#[cfg(test)]
mod tests;

pub use compare::{is_before, same_day, same_month, same_year, strictly_between, total_days};
pub use error::{Error, Result};
pub use grid::{days_in_grid, weekday_label, GridPolicy, WEEK_DAYS};
pub use month::{add_months, days_in_month, month_name, subtract_months, DisplayMonth};
