//! Invariants of the calendar checked against arbitrary sequences of inputs,
//! shared between unit tests and the actual fuzzing.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use arbitrary::Arbitrary;
use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::{CalendarState, Context, DateRange, DisplayMonth, FixedClock, GridPolicy};
use crate::{SelectionChange, SelectionRange};

/// Number of days of the window of dates used as "today".
const TODAY_WINDOW: u32 = 366 * 200;

/// A user input.
#[derive(Arbitrary, Clone, Debug)]
pub enum Action {
    PreviousMonth,
    NextMonth,
    /// Click on a cell of the displayed grid.
    Select { cell: u8 },
    /// Click on a day relative to today, which may not be displayed.
    SelectRelative { offset: i16 },
}

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub today: u32,
    pub exact_month: bool,
    pub actions: Vec<Action>,
}

impl Data {
    fn today(&self) -> NaiveDate {
        let origin = NaiveDate::from_ymd_opt(1900, 1, 1).expect("invalid fuzzing origin");
        origin + Days::new((self.today % TODAY_WINDOW).into())
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("today", &self.today())
            .field("exact_month", &self.exact_month)
            .field("actions", &self.actions)
            .finish()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_calendar(data: Data) -> bool {
    if data.actions.is_empty() {
        return false;
    }

    let today = data.today();

    let policy = {
        if data.exact_month {
            GridPolicy::ExactMonth
        } else {
            GridPolicy::PaddedWeeks
        }
    };

    let ctx = Context::default()
        .with_clock(FixedClock(today))
        .with_grid_policy(policy);

    let mut calendar = CalendarState::with_context(ctx);
    let notified: Rc<RefCell<Vec<DateRange>>> = Rc::default();

    {
        let notified = notified.clone();
        calendar.on_range_selected(move |range| notified.borrow_mut().push(range));
    }

    let mut expected_notifications = 0;

    for action in &data.actions {
        let month_before = calendar.display_month();
        let selection_before = *calendar.selection();

        match action {
            Action::PreviousMonth => {
                let allowed = month_before != DisplayMonth::of(today);
                assert_eq!(calendar.go_to_previous_month(), allowed);
            }
            Action::NextMonth => {
                assert!(calendar.go_to_next_month());
                assert_eq!(Ok(calendar.display_month()), month_before.succ());
            }
            Action::Select { cell } => {
                let view = calendar.view();
                let cell = view.days[usize::from(*cell) % view.days.len()];
                check_selection(&mut calendar, cell.date, selection_before);
            }
            Action::SelectRelative { offset } => {
                let Some(date) = today.checked_add_signed(chrono::Duration::days((*offset).into()))
                else {
                    continue;
                };

                check_selection(&mut calendar, date, selection_before);
            }
        }

        if let (Some(_), None) = (selection_before.start(), selection_before.end()) {
            if calendar.selection().is_complete() {
                expected_notifications += 1;
            }
        }

        check_state(&calendar, today, policy);
        assert_eq!(notified.borrow().len(), expected_notifications);
    }

    true
}

fn check_selection(
    calendar: &mut CalendarState<FixedClock>,
    date: NaiveDate,
    before: SelectionRange,
) {
    let disabled = calendar.is_day_disabled(date);

    match calendar.select_day(date) {
        SelectionChange::Ignored(ignored) => {
            assert!(disabled);
            assert_eq!(ignored, date);
            assert_eq!(*calendar.selection(), before);
        }
        SelectionChange::Started(started) => {
            assert!(!disabled);
            assert!(before.is_empty());
            assert_eq!(calendar.selection().start(), Some(started));
            assert_eq!(calendar.selection().end(), None);
        }
        SelectionChange::Completed(range) => {
            let first = before.start().expect("completed an empty selection");
            assert!(before.end().is_none());
            assert_eq!(range, DateRange::new(first, date));
            assert_eq!(calendar.selection().as_range(), Some(range));
        }
        SelectionChange::Restarted(restarted) => {
            assert!(before.is_complete());
            assert_eq!(calendar.selection().start(), Some(restarted));
            assert_eq!(calendar.selection().end(), None);
        }
    }
}

fn check_state(calendar: &CalendarState<FixedClock>, today: NaiveDate, policy: GridPolicy) {
    let month = calendar.display_month();
    let selection = calendar.selection();
    assert!(month >= DisplayMonth::of(today));
    assert!(selection.end().is_none() || selection.start().is_some());

    if let Some(range) = selection.as_range() {
        assert!(range.start() <= range.end());
        assert_eq!(selection.total_days(), Ok(range.total_days()));
    }

    let view = calendar.view();
    assert_eq!(view, calendar.view());
    assert_eq!(view.header.month_name, month.name());
    assert_eq!(view.header.previous_disabled, month == DisplayMonth::of(today));

    match policy {
        GridPolicy::ExactMonth => {
            assert!(view.days.iter().all(|cell| month.contains(cell.date)));
        }
        GridPolicy::PaddedWeeks => {
            assert_eq!(view.days.len() % 7, 0);
            assert!((28..=42).contains(&view.days.len()));
            assert_eq!(view.days[0].date.weekday(), Weekday::Sun);
        }
    }

    for cell in &view.days {
        assert_eq!(cell.is_today, cell.date == today);
        assert_eq!(cell.is_disabled, cell.date < today || !month.contains(cell.date));
        assert!(!(cell.is_selected && (cell.is_range_start || cell.is_range_end)));
    }
}
