//! Pricing of a selected range and payload of the booking request.
//!
//! Amounts are expressed in whole euros, fractional parts are truncated.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::selection::{DateRange, SelectionRange};

/// Number of days billed at the day rate to get the week rate.
pub const DAYS_PER_WEEK: u64 = 7;

// ServiceFee

/// Fee added on top of the rental price, as a percentage of the subtotal.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct ServiceFee {
    percent: u64,
}

impl ServiceFee {
    pub const fn percent(percent: u64) -> Self {
        Self { percent }
    }

    /// Compute the fee for given subtotal.
    ///
    /// ```
    /// use booking_calendar::booking::ServiceFee;
    ///
    /// assert_eq!(ServiceFee::percent(15).apply(30), 4);
    /// assert_eq!(ServiceFee::percent(0).apply(30), 0);
    /// ```
    pub fn apply(&self, subtotal: u64) -> u64 {
        subtotal.saturating_mul(self.percent) / 100
    }
}

impl Default for ServiceFee {
    fn default() -> Self {
        Self::percent(15)
    }
}

// Quote

/// Price overview of a booking.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Quote {
    pub rate_by_day: u64,
    pub rate_by_week: u64,
    /// Number of billed days.
    pub days: u32,
    pub subtotal: u64,
    pub service_fee: u64,
    pub total: u64,
}

impl Quote {
    /// Compute the price of renting for given range.
    ///
    /// ```
    /// use booking_calendar::booking::{Quote, ServiceFee};
    /// use booking_calendar::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
    /// );
    ///
    /// let quote = Quote::new(10, &range, ServiceFee::default());
    /// assert_eq!(quote.rate_by_week, 70);
    /// assert_eq!(quote.subtotal, 30);
    /// assert_eq!(quote.total, 34);
    /// ```
    pub fn new(rate_by_day: u64, range: &DateRange, fee: ServiceFee) -> Self {
        let days = range.total_days();
        let subtotal = rate_by_day.saturating_mul(days.into());
        let service_fee = fee.apply(subtotal);

        Self {
            rate_by_day,
            rate_by_week: rate_by_day.saturating_mul(DAYS_PER_WEEK),
            days,
            subtotal,
            service_fee,
            total: subtotal.saturating_add(service_fee),
        }
    }

    /// Compute the price for a selection, if it is complete.
    pub fn for_selection(
        rate_by_day: u64,
        selection: &SelectionRange,
        fee: ServiceFee,
    ) -> Option<Self> {
        let range = selection.as_range()?;
        Some(Self::new(rate_by_day, &range, fee))
    }
}

// BookingRequest

/// Content of the request sent to book a bike for a range of days.
///
/// Sending the request is up to the caller: a successful booking is
/// acknowledged with HTTP status `201 Created` on `POST /rentals`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct BookingRequest {
    pub candidate_id: u64,
    pub bike_id: u64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BookingRequest {
    /// HTTP path the request must be posted to.
    pub const PATH: &'static str = "/rentals";

    /// Prepare a booking for the selected range.
    ///
    /// ```
    /// use booking_calendar::booking::BookingRequest;
    /// use booking_calendar::{Error, SelectionRange};
    ///
    /// assert_eq!(
    ///     BookingRequest::new(1, 2, &SelectionRange::empty()),
    ///     Err(Error::IncompleteRange),
    /// );
    /// ```
    pub fn new(candidate_id: u64, bike_id: u64, selection: &SelectionRange) -> Result<Self> {
        let range = selection.as_range().ok_or(Error::IncompleteRange)?;

        Ok(Self {
            candidate_id,
            bike_id,
            start: range.start(),
            end: range.end(),
        })
    }

    /// Check if the status of the response to this request means that the
    /// bike is booked.
    pub fn is_booked(status: u16) -> bool {
        status == 201
    }
}
