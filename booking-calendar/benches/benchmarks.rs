use booking_calendar::{CalendarState, Context, DisplayMonth, FixedClock, GridPolicy};

use calendar_utils::days_in_grid;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let month = DisplayMonth::new(2021, 1).unwrap();

    group.bench_function("exact_month", |b| {
        b.iter(|| days_in_grid(black_box(month), GridPolicy::ExactMonth))
    });

    group.bench_function("padded_weeks", |b| {
        b.iter(|| days_in_grid(black_box(month), GridPolicy::PaddedWeeks))
    });
}

fn bench_view(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
    let ctx = Context::default().with_clock(FixedClock(today));

    let empty = CalendarState::with_context(ctx.clone());

    let mut selected = CalendarState::with_context(ctx);
    selected.select_day(NaiveDate::from_ymd_opt(2021, 6, 18).unwrap());
    selected.select_day(NaiveDate::from_ymd_opt(2021, 6, 27).unwrap());

    let mut group = c.benchmark_group("view");
    group.bench_function("empty", |b| b.iter(|| black_box(&empty).view()));
    group.bench_function("selected", |b| b.iter(|| black_box(&selected).view()));
}

criterion_group!(benches, bench_grid, bench_view);
criterion_main!(benches);
