//! Performance benchmarks for the payroll calculators.
//!
//! Calculators rerun on every keystroke, so each one should stay well under
//! a millisecond:
//! - Normalizing a raw field: < 1μs mean
//! - Formatting a currency value: < 5μs mean
//! - Running a calculator end to end: < 50μs mean
//! - A full HTTP round trip through the router: < 200μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_calc::api::{AppState, create_router};
use payroll_calc::calculation::{CalculatorDefaults, CalculatorInput, calculate};
use payroll_calc::config::SiteConfig;
use payroll_calc::format::{NumberFormatter, format_currency};
use payroll_calc::models::CalculatorKind;
use payroll_calc::normalize::normalize;

use axum::{body::Body, http::Request};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Creates a timecard form with the given number of days.
fn create_timecard(day_count: usize) -> Value {
    let days: Vec<Value> = (0..day_count)
        .map(|i| {
            json!({
                "clock_in": format!("{:02}:00", 6 + i % 4),
                "clock_out": "17:30",
                "break_minutes": "30"
            })
        })
        .collect();
    json!({ "hourly_rate": "22.50", "days": days })
}

/// Benchmark: normalizing typical raw field values.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for raw in ["25", "1234.5678", "12abc", "", "-1e3"] {
        group.bench_with_input(BenchmarkId::new("text", raw), raw, |b, raw| {
            b.iter(|| normalize(black_box(raw)))
        });
    }

    group.finish();
}

/// Benchmark: locale-aware and fallback currency formatting.
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_currency");

    let cases = [
        ("en-US", "USD"),
        ("de-DE", "EUR"),
        ("ja-JP", "JPY"),
        ("xx-YY", "USD"),
    ];
    for (locale, currency) in cases {
        group.bench_function(locale, |b| {
            b.iter(|| format_currency(black_box(1_234_567.891), locale, currency))
        });
    }

    group.finish();
}

/// Benchmark: each calculator over a typical form.
fn bench_calculators(c: &mut Criterion) {
    let defaults = CalculatorDefaults::default();
    let formatter = NumberFormatter::default();

    let forms = [
        (
            CalculatorKind::HourlyToSalary,
            json!({"hourly_rate": "25", "hours_per_week": "40", "weeks_per_year": "52"}),
        ),
        (
            CalculatorKind::SalaryToHourly,
            json!({"annual_salary": "65000"}),
        ),
        (
            CalculatorKind::OvertimePay,
            json!({"hourly_rate": "20", "regular_hours": "45", "overtime_hours": "5"}),
        ),
        (CalculatorKind::Timecard, create_timecard(5)),
    ];

    let mut group = c.benchmark_group("calculators");

    for (kind, form) in forms {
        let input = CalculatorInput::from_json(form);
        group.bench_function(kind.slug(), |b| {
            b.iter(|| calculate(black_box(kind), &input, &defaults, &formatter))
        });
    }

    group.finish();
}

/// Benchmark: timecard scaling with the number of days.
fn bench_timecard_scaling(c: &mut Criterion) {
    let defaults = CalculatorDefaults::default();
    let formatter = NumberFormatter::default();

    let mut group = c.benchmark_group("timecard_scaling");

    for day_count in [1, 5, 7, 14, 31].iter() {
        let input = CalculatorInput::from_json(create_timecard(*day_count));

        group.throughput(Throughput::Elements(*day_count as u64));
        group.bench_with_input(BenchmarkId::new("days", day_count), day_count, |b, _| {
            b.iter(|| calculate(CalculatorKind::Timecard, black_box(&input), &defaults, &formatter))
        });
    }

    group.finish();
}

/// Benchmark: a full request through the HTTP router.
///
/// Target: < 200μs mean
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::from_config(SiteConfig::default()));
    let body =
        json!({"hourly_rate": "20", "regular_hours": "45", "overtime_hours": "5"}).to_string();

    c.bench_function("http_overtime_pay", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate/overtime-pay")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
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
    bench_normalize,
    bench_format,
    bench_calculators,
    bench_timecard_scaling,
    bench_http_round_trip,
);
criterion_main!(benches);
