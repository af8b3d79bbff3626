use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_calendar::{AstronomicalCalendar, SexagenaryCalendar};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2001, 12, 23).expect("valid date")
}

fn pillars_bench(c: &mut Criterion) {
    let cal = AstronomicalCalendar::new();
    let mut group = c.benchmark_group("calendar_pillars");
    group.bench_function("pillars_for_date", |b| {
        b.iter(|| {
            cal.pillars_for_date(black_box(reference_date()))
                .expect("in range")
        })
    });
    group.finish();
}

fn term_bench(c: &mut Criterion) {
    let cal = AstronomicalCalendar::new();
    let mut group = c.benchmark_group("calendar_terms");
    group.sample_size(30);
    group.bench_function("next_major_term", |b| {
        b.iter(|| {
            cal.next_major_term(black_box(reference_date()))
                .expect("term found")
        })
    });
    group.finish();
}

fn lunar_bench(c: &mut Criterion) {
    let cal = AstronomicalCalendar::new();
    let mut group = c.benchmark_group("calendar_lunar");
    group.sample_size(30);
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| {
            cal.solar_to_lunar(black_box(reference_date()))
                .expect("in range")
        })
    });
    group.finish();
}

criterion_group!(benches, pillars_bench, term_bench, lunar_bench);
criterion_main!(benches);
