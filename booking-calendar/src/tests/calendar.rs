use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error;
use crate::{calendar_at, date};
use crate::SelectionChange::{Completed, Ignored, Restarted, Started};
use crate::{CalendarState, Clock, DateRange, DisplayMonth, SelectionRange};

type Received = Rc<RefCell<Vec<DateRange>>>;

fn record_ranges<C: Clock>(calendar: &mut CalendarState<C>) -> Received {
    let received: Received = Rc::default();
    let sink = received.clone();
    calendar.on_range_selected(move |range| sink.borrow_mut().push(range));
    received
}

#[test]
fn starts_on_current_month() {
    let calendar = calendar_at!("2021-06-15");
    assert_eq!(calendar.display_month(), DisplayMonth::new(2021, 6).unwrap());
    assert_eq!(calendar.today(), date!("2021-06-15"));
    assert_eq!(*calendar.selection(), SelectionRange::empty());
}

#[test]
fn range_lifecycle() {
    let mut calendar = calendar_at!("2021-06-15");
    let received = record_ranges(&mut calendar);

    assert_eq!(calendar.select_day(date!("2021-06-20")), Started(date!("2021-06-20")));
    assert_eq!(calendar.selection().start(), Some(date!("2021-06-20")));
    assert_eq!(calendar.selection().end(), None);
    assert!(received.borrow().is_empty());

    let range = DateRange::new(date!("2021-06-20"), date!("2021-06-25"));
    assert_eq!(calendar.select_day(date!("2021-06-25")), Completed(range));
    assert_eq!(calendar.selection().as_range(), Some(range));
    assert_eq!(*received.borrow(), [range]);

    assert_eq!(calendar.select_day(date!("2021-06-22")), Restarted(date!("2021-06-22")));
    assert_eq!(calendar.selection().start(), Some(date!("2021-06-22")));
    assert_eq!(calendar.selection().end(), None);
    assert_eq!(received.borrow().len(), 1);

    let range = DateRange::new(date!("2021-06-22"), date!("2021-06-23"));
    assert_eq!(calendar.select_day(date!("2021-06-23")), Completed(range));
    assert_eq!(received.borrow().len(), 2);
    assert_eq!(received.borrow()[1], range);
}

#[test]
fn reversed_range_is_reordered() {
    let mut calendar = calendar_at!("2021-06-15");
    let received = record_ranges(&mut calendar);

    calendar.select_day(date!("2021-06-25"));
    calendar.select_day(date!("2021-06-20"));

    assert_eq!(calendar.selection().start(), Some(date!("2021-06-20")));
    assert_eq!(calendar.selection().end(), Some(date!("2021-06-25")));
    assert_eq!(calendar.selection().total_days(), Ok(5));
    assert_eq!(received.borrow()[0].start(), date!("2021-06-20"));
    assert_eq!(received.borrow()[0].end(), date!("2021-06-25"));
}

#[test]
fn single_day_range() {
    let mut calendar = calendar_at!("2021-06-15");
    calendar.select_day(date!("2021-06-15"));

    assert!(matches!(
        calendar.select_day(date!("2021-06-15")),
        Completed(range) if range.total_days() == 0,
    ));
}

#[test]
fn disabled_days_are_ignored() {
    let mut calendar = calendar_at!("2021-06-15");
    let received = record_ranges(&mut calendar);

    assert_eq!(calendar.select_day(date!("2021-06-14")), Ignored(date!("2021-06-14")));
    assert_eq!(calendar.select_day(date!("2021-07-01")), Ignored(date!("2021-07-01")));
    assert_eq!(calendar.select_day(date!("2020-06-20")), Ignored(date!("2020-06-20")));
    assert!(calendar.selection().is_empty());

    calendar.select_day(date!("2021-06-15"));
    assert_eq!(calendar.select_day(date!("2021-05-31")), Ignored(date!("2021-05-31")));
    assert!(!calendar.selection().is_complete());
    assert!(received.borrow().is_empty());
}

#[test]
fn range_over_two_months() {
    let mut calendar = calendar_at!("2021-06-15");
    calendar.select_day(date!("2021-06-28"));
    assert!(calendar.go_to_next_month());

    assert_eq!(
        calendar.select_day(date!("2021-07-03")),
        Completed(DateRange::new(date!("2021-06-28"), date!("2021-07-03"))),
    );

    assert_eq!(calendar.selection().total_days(), Ok(5));
}

#[test]
fn all_listeners_are_notified() {
    let mut calendar = calendar_at!("2021-06-15");
    let received_1 = record_ranges(&mut calendar);
    let received_2 = record_ranges(&mut calendar);

    calendar.select_day(date!("2021-06-16"));
    calendar.select_day(date!("2021-06-18"));

    assert_eq!(received_1.borrow().len(), 1);
    assert_eq!(*received_1.borrow(), *received_2.borrow());
}

#[test]
fn incomplete_selection_has_no_length() {
    let mut calendar = calendar_at!("2021-06-15");
    assert_eq!(calendar.selection().total_days(), Err(Error::IncompleteRange));

    calendar.select_day(date!("2021-06-16"));
    assert_eq!(calendar.selection().total_days(), Err(Error::IncompleteRange));
    assert_eq!(calendar.selection().as_range(), None);
}
