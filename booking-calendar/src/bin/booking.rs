use std::env;

use chrono::NaiveDate;

use booking_calendar::booking::{Quote, ServiceFee};
use booking_calendar::{CalendarState, DisplayMonth};

/// Price of a day of rental used for the quote.
const RATE_BY_DAY: u64 = 20;

fn parse_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("invalid date `{raw}`: {err}"))
}

fn main() {
    let days: Vec<_> = env::args().skip(1).map(|raw| parse_date(&raw)).collect();
    let mut calendar = CalendarState::new();
    println!(" - today: {}", calendar.today());

    for day in &days {
        while calendar.display_month() < DisplayMonth::of(*day) && calendar.go_to_next_month() {}
        println!(" - click on {day}: {:?}", calendar.select_day(*day));
    }

    println!("---");
    println!("{}", calendar.view());
    println!("---");

    match Quote::for_selection(RATE_BY_DAY, calendar.selection(), ServiceFee::default()) {
        Some(quote) => {
            println!(" - day: {} €", quote.rate_by_day);
            println!(" - week: {} €", quote.rate_by_week);
            println!(" - subtotal ({} days): {} €", quote.days, quote.subtotal);
            println!(" - service fee: {} €", quote.service_fee);
            println!(" - total: {} €", quote.total);
        }
        None => println!(" (no range selected)"),
    }
}
