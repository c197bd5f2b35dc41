//! Performance benchmarks for the shift pay engine.
//!
//! Covers pricing one shift, aggregating growing shift sets, and the
//! `/summary` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use shift_pay_engine::api::{AppState, create_router};
use shift_pay_engine::calculation::{aggregate_over_range, compute_shift_pay};
use shift_pay_engine::config::ConfigLoader;
use shift_pay_engine::models::{Employer, Shift};
use shift_pay_engine::store::{EmployerDraft, MemoryStore, ShiftDraft};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const USER: &str = "bench_user";

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn employer_draft(name: &str) -> EmployerDraft {
    EmployerDraft {
        name: name.to_string(),
        job_role: "Barista".to_string(),
        joining_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        day_rate: Decimal::from_str("25.00").unwrap(),
        night_rate: Decimal::from_str("30.00").unwrap(),
        saturday_rate: Decimal::from_str("32.50").unwrap(),
        sunday_rate: Decimal::from_str("40.00").unwrap(),
    }
}

/// Alternates day, evening and overnight shifts on consecutive dates.
fn shift_draft(employer_id: i64, index: u64) -> ShiftDraft {
    let work_date = first_day().checked_add_days(Days::new(index)).unwrap();
    let (start, end, overnight) = match index % 3 {
        0 => ("09:00", "17:30", false),
        1 => ("18:00", "23:15", false),
        _ => ("22:00", "06:00", true),
    };
    ShiftDraft {
        employer_id,
        work_date,
        start_time: start.to_string(),
        end_time: end.to_string(),
        is_overnight_shift: overnight,
        end_date: None,
    }
}

fn create_shifts(count: u64) -> (Vec<Shift>, HashMap<i64, Employer>) {
    let employer = Employer {
        id: 1,
        name: "Harbour Cafe".to_string(),
        job_role: "Barista".to_string(),
        joining_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        day_rate: Decimal::from_str("25.00").unwrap(),
        night_rate: Decimal::from_str("30.00").unwrap(),
        saturday_rate: Decimal::from_str("32.50").unwrap(),
        sunday_rate: Decimal::from_str("40.00").unwrap(),
    };
    let shifts = (0..count)
        .map(|i| {
            let draft = shift_draft(1, i);
            Shift {
                id: i as i64 + 1,
                employer_id: draft.employer_id,
                work_date: draft.work_date,
                start_time: draft.start_time,
                end_time: draft.end_time,
                is_overnight_shift: draft.is_overnight_shift,
                end_date: draft.end_date,
            }
        })
        .collect();
    (shifts, HashMap::from([(1, employer)]))
}

/// Benchmark: pricing a single overnight shift.
fn bench_single_shift(c: &mut Criterion) {
    let (shifts, employers) = create_shifts(3);
    let shift = &shifts[2];
    let employer = &employers[&1];

    c.bench_function("single_shift", |b| {
        b.iter(|| black_box(compute_shift_pay(black_box(shift), black_box(employer)).unwrap()))
    });
}

/// Benchmark: aggregation over growing shift sets.
fn bench_aggregation_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for shift_count in [14u64, 100, 1000].iter() {
        let (shifts, employers) = create_shifts(*shift_count);

        group.throughput(Throughput::Elements(*shift_count));
        group.bench_with_input(
            BenchmarkId::new("shifts", shift_count),
            shift_count,
            |b, _| b.iter(|| black_box(aggregate_over_range(&shifts, &employers).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: `GET /summary` for a user with a year of shifts.
fn bench_summary_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = MemoryStore::new();
    rt.block_on(async {
        let employer = store
            .create_employer(USER, employer_draft("Harbour Cafe"))
            .await
            .unwrap();
        for i in 0..365 {
            store
                .create_shift(USER, shift_draft(employer.id, i))
                .await
                .unwrap();
        }
    });
    let router = create_router(AppState::new(ConfigLoader::default(), store));

    c.bench_function("summary_365_shifts", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/summary")
                        .header("x-user-id", USER)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_shift,
    bench_aggregation_scaling,
    bench_summary_endpoint,
);
criterion_main!(benches);
