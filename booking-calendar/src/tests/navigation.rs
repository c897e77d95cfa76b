use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::{calendar_at, date};
use crate::{CalendarState, Clock, Context, DisplayMonth, SelectionChange};

/// A clock which can be moved forward while a calendar is in use.
#[derive(Clone)]
struct SharedClock(Rc<Cell<NaiveDate>>);

impl Clock for SharedClock {
    fn today(&self) -> NaiveDate {
        self.0.get()
    }
}

#[test]
fn no_browsing_before_current_month() {
    let mut calendar = calendar_at!("2021-06-15");
    assert!(!calendar.can_go_to_previous_month());
    assert!(!calendar.go_to_previous_month());
    assert_eq!(calendar.display_month(), DisplayMonth::new(2021, 6).unwrap());
}

#[test]
fn next_then_previous() {
    let mut calendar = calendar_at!("2021-06-15");

    assert!(calendar.go_to_next_month());
    assert_eq!(calendar.display_month().name(), "July");
    assert!(calendar.can_go_to_previous_month());

    assert!(calendar.go_to_previous_month());
    assert_eq!(calendar.display_month().name(), "June");
    assert!(!calendar.go_to_previous_month());
    assert_eq!(calendar.display_month().name(), "June");
}

#[test]
fn browse_forward_unbounded() {
    let mut calendar = calendar_at!("2021-06-15");

    for _ in 0..24 {
        assert!(calendar.go_to_next_month());
    }

    assert_eq!(calendar.display_month(), DisplayMonth::new(2023, 6).unwrap());

    for _ in 0..24 {
        assert!(calendar.go_to_previous_month());
    }

    assert!(!calendar.go_to_previous_month());
}

#[test]
fn browse_across_years() {
    let mut calendar = calendar_at!("2021-12-10");
    assert!(calendar.go_to_next_month());

    let month = calendar.display_month();
    assert_eq!((month.name(), month.year()), ("January", 2022));

    assert!(calendar.go_to_previous_month());
    assert_eq!(calendar.display_month(), DisplayMonth::new(2021, 12).unwrap());
}

#[test]
fn navigation_keeps_selection() {
    let mut calendar = calendar_at!("2021-06-15");
    calendar.select_day(date!("2021-06-20"));
    calendar.go_to_next_month();
    calendar.go_to_next_month();
    calendar.go_to_previous_month();

    assert_eq!(calendar.selection().start(), Some(date!("2021-06-20")));
    assert_eq!(calendar.selection().end(), None);
}

#[test]
fn clock_moves_to_next_month() {
    let clock = SharedClock(Rc::new(Cell::new(date!("2021-06-30"))));
    let mut calendar = CalendarState::with_context(Context::default().with_clock(clock.clone()));
    clock.0.set(date!("2021-07-01"));

    // The displayed month is now in the past: it can be left forward only.
    assert_eq!(calendar.display_month(), DisplayMonth::new(2021, 6).unwrap());
    assert!(!calendar.can_go_to_previous_month());
    assert!(calendar.view().header.previous_disabled);
    assert!(calendar.view().days.iter().all(|cell| cell.is_disabled));

    let last_june = date!("2021-06-30");
    assert_eq!(calendar.select_day(last_june), SelectionChange::Ignored(last_june));

    assert!(calendar.go_to_next_month());
    assert!(!calendar.can_go_to_previous_month());
    let first_july = date!("2021-07-01");
    assert_eq!(calendar.select_day(first_july), SelectionChange::Started(first_july));
}
