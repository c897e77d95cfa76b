use std::fmt;

use calendar_utils::{days_in_grid, is_before, same_day, DisplayMonth};
use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::context::Context;
use crate::selection::{DateRange, SelectionChange, SelectionRange};
use crate::view::{DayCell, Header, MonthView};

type Listener = Box<dyn FnMut(DateRange)>;

/// State of a booking calendar: the month being displayed and the range of
/// days selected by the user.
///
/// Inputs are processed synchronously, listeners registered with
/// [`CalendarState::on_range_selected`] are called before
/// [`CalendarState::select_day`] returns.
pub struct CalendarState<C: Clock = SystemClock> {
    ctx: Context<C>,
    display_month: DisplayMonth,
    selection: SelectionRange,
    listeners: Vec<Listener>,
}

impl CalendarState<SystemClock> {
    /// A calendar displaying the current month of the local timezone.
    pub fn new() -> Self {
        Self::with_context(Context::default())
    }
}

impl Default for CalendarState<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CalendarState<C> {
    /// A calendar with no selection which displays the current month of the
    /// context's clock.
    pub fn with_context(ctx: Context<C>) -> Self {
        let display_month = DisplayMonth::of(ctx.clock.today());

        Self {
            ctx,
            display_month,
            selection: SelectionRange::empty(),
            listeners: Vec::new(),
        }
    }

    // --
    // -- Getters
    // --

    pub fn context(&self) -> &Context<C> {
        &self.ctx
    }

    pub fn today(&self) -> NaiveDate {
        self.ctx.clock.today()
    }

    pub fn display_month(&self) -> DisplayMonth {
        self.display_month
    }

    pub fn selection(&self) -> &SelectionRange {
        &self.selection
    }

    /// Register a callback which will be called each time a range is
    /// completed.
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// use booking_calendar::{CalendarState, Context, FixedClock};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
    /// let ctx = Context::default().with_clock(FixedClock(today));
    /// let mut calendar = CalendarState::with_context(ctx);
    ///
    /// let received = Rc::new(RefCell::new(Vec::new()));
    /// let sink = received.clone();
    /// calendar.on_range_selected(move |range| sink.borrow_mut().push(range));
    ///
    /// calendar.select_day(NaiveDate::from_ymd_opt(2021, 6, 20).unwrap());
    /// calendar.select_day(NaiveDate::from_ymd_opt(2021, 6, 22).unwrap());
    /// assert_eq!(received.borrow().len(), 1);
    /// ```
    pub fn on_range_selected(&mut self, listener: impl FnMut(DateRange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // --
    // -- Navigation
    // --

    /// Check if the month before the displayed one can be browsed, which is
    /// not the case for months before the current one.
    pub fn can_go_to_previous_month(&self) -> bool {
        self.display_month > DisplayMonth::of(self.today())
    }

    /// Display the previous month, return `false` if it is not allowed.
    pub fn go_to_previous_month(&mut self) -> bool {
        if !self.can_go_to_previous_month() {
            #[cfg(feature = "log")]
            log::warn!("Can't browse before {}", self.display_month);
            return false;
        }

        self.set_display_month(self.display_month.pred())
    }

    /// Display the next month, return `false` if the last month supported
    /// by chrono is already displayed.
    pub fn go_to_next_month(&mut self) -> bool {
        self.set_display_month(self.display_month.succ())
    }

    fn set_display_month(&mut self, month: calendar_utils::Result<DisplayMonth>) -> bool {
        match month {
            Ok(month) => {
                #[cfg(feature = "log")]
                log::debug!("Display month changed from {} to {month}", self.display_month);
                self.display_month = month;
                true
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                log::warn!("Can't browse past {}: {_err}", self.display_month);
                false
            }
        }
    }

    // --
    // -- Selection
    // --

    /// Check if a day can't be clicked: it is either in the past or outside
    /// of the displayed month.
    pub fn is_day_disabled(&self, date: NaiveDate) -> bool {
        is_before(date, self.today()) || !self.display_month.contains(date)
    }

    /// Register a click on a day, see [`SelectionRange`] for the lifecycle of
    /// a selection.
    ///
    /// Listeners are notified if this click completes a range. Clicks on
    /// disabled days are ignored.
    pub fn select_day(&mut self, date: NaiveDate) -> SelectionChange {
        if self.is_day_disabled(date) {
            #[cfg(feature = "log")]
            log::warn!("Ignored click on disabled day {date}");
            return SelectionChange::Ignored(date);
        }

        let change = self.selection.push(date);

        #[cfg(feature = "log")]
        log::debug!("Selection changed: {change:?}");

        if let SelectionChange::Completed(range) = change {
            for listener in &mut self.listeners {
                listener(range);
            }
        }

        change
    }

    // --
    // -- Rendering
    // --

    /// Compute what must be displayed for current state.
    pub fn view(&self) -> MonthView {
        let today = self.today();

        let header = Header {
            month_name: self.display_month.name(),
            year: self.display_month.year(),
            previous_disabled: !self.can_go_to_previous_month(),
        };

        let days = days_in_grid(self.display_month, self.ctx.grid_policy)
            .into_iter()
            .map(|date| DayCell {
                date,
                is_today: same_day(date, today),
                is_selected: self.selection.strictly_contains(date),
                is_range_start: self.selection.is_start(date),
                is_range_end: self.selection.is_end(date),
                is_disabled: self.is_day_disabled(date),
            })
            .collect();

        MonthView::new(header, days)
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for CalendarState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarState")
            .field("ctx", &self.ctx)
            .field("display_month", &self.display_month)
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
