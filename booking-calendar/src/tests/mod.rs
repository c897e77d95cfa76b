mod calendar;
mod navigation;


#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! calendar_at {
    (
        $today: expr
        $( , policy = $policy: expr )?
        $( , )?
    ) => {{
        use $crate::{date, CalendarState, Context, FixedClock};

        let ctx = Context::default()
            .with_clock(FixedClock(date!($today)))
            $( .with_grid_policy($policy) )?;

        CalendarState::with_context(ctx)
    }};
}
