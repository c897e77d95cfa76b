#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod booking;
pub mod calendar;
pub mod clock;
pub mod context;
pub mod error;
pub mod selection;
pub mod view;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::CalendarState;
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::context::Context;
pub use crate::error::Error;
pub use crate::selection::{DateRange, SelectionChange, SelectionRange};
pub use crate::view::{DayCell, Header, MonthView};
pub use calendar_utils::{DisplayMonth, GridPolicy};
