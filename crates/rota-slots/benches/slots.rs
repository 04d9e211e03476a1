//! Benchmarks for encoding, intersecting and searching a week of 5-minute atoms.

use chrono::Duration;
use criterion::{criterion_group, criterion_main, Criterion};
use rota_slots::{intervals_to_slots, BoolInterval, Interval, Slots, TimeSystem, WeekSystem};
use std::hint::black_box;

/// Working hours 09:00-17:00 on weekdays, shifted by `offset` atoms.
fn weekday_shifts(ws: &WeekSystem, offset: usize) -> Slots {
    let per_day = ws.epoch_length() / 7;
    let per_hour = per_day / 24;
    let intervals: Vec<BoolInterval> = (0..5)
        .map(|day| {
            let from = day * per_day + 9 * per_hour + offset;
            BoolInterval::new(from, from + 8 * per_hour, true)
        })
        .collect();
    intervals_to_slots(&intervals, ws).expect("valid shifts")
}

fn bench_slots(c: &mut Criterion) {
    let ws = WeekSystem::new(Duration::minutes(5)).expect("valid atom");
    let a = weekday_shifts(&ws, 0);
    let b = weekday_shifts(&ws, 30);
    let week = Interval::new(0, ws.epoch_length());

    c.bench_function("encode_week", |bench| {
        bench.iter(|| weekday_shifts(black_box(&ws), 0))
    });
    c.bench_function("intersection", |bench| {
        bench.iter(|| black_box(&a).intersection(black_box(&b)))
    });
    c.bench_function("available_intervals_1h", |bench| {
        let both = a.intersection(&b);
        bench.iter(|| black_box(&both).available_intervals(12, week))
    });
}

criterion_group!(benches, bench_slots);
criterion_main!(benches);
