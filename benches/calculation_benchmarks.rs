//! Performance benchmarks for the pricing engine.
//!
//! Covers the two calculators directly and the `/cost` route end to end:
//! - Booking cost across one, two and four rate segments
//! - Budget playtime from a short stop up to a run to closing time
//! - A batch of 100 `/cost` requests through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use cue_rates::api::{AppState, create_router};
use cue_rates::calculation::{compute_cost, compute_playtime};
use cue_rates::config::{ConfigLoader, PricingConfig};
use cue_rates::models::{BookingRequest, BudgetRequest};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/pool_hall").expect("Failed to load config");
    AppState::new(config)
}

fn booking(day_of_week: i32, start: &str, end: &str) -> BookingRequest {
    BookingRequest {
        day_of_week,
        start_time: start.to_string(),
        end_time: end.to_string(),
        is_member: false,
    }
}

/// Benchmark: booking cost by number of segments walked.
fn bench_compute_cost(c: &mut Criterion) {
    let config = PricingConfig::standard();
    let cases = [
        ("one_segment", booking(1, "10:00", "18:00")),
        ("two_segments", booking(1, "16:30", "19:15")),
        ("overnight", booking(5, "22:00", "01:00")),
        ("full_evening", booking(0, "10:00", "01:00")),
    ];

    let mut group = c.benchmark_group("compute_cost");
    for (name, request) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), request, |b, request| {
            b.iter(|| black_box(compute_cost(&config, black_box(request))))
        });
    }
    group.finish();
}

/// Benchmark: budget playtime by budget size.
fn bench_compute_playtime(c: &mut Criterion) {
    let config = PricingConfig::standard();

    let mut group = c.benchmark_group("compute_playtime");
    for budget in [5i64, 20, 100, 500] {
        let request = BudgetRequest {
            budget: Decimal::from(budget),
            day_of_week: 0,
            start_time: "10:00".to_string(),
            is_member: false,
        };
        group.bench_with_input(BenchmarkId::from_parameter(budget), &request, |b, request| {
            b.iter(|| black_box(compute_playtime(&config, black_box(request))))
        });
    }
    group.finish();
}

/// Benchmark: single `/cost` request through the router.
fn bench_cost_route(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "day_of_week": 5,
        "start_time": "16:30",
        "end_time": "01:00",
        "is_member": true
    })
    .to_string();

    c.bench_function("cost_route", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/cost")
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

/// Benchmark: batch of 100 `/cost` requests with varied days and times.
fn bench_cost_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| {
            serde_json::json!({
                "day_of_week": i % 7,
                "start_time": format!("{:02}:00", 10 + i % 12),
                "end_time": format!("{:02}:30", 12 + i % 12),
                "is_member": i % 3 == 0
            })
            .to_string()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("cost_batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut responses = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/cost")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                responses.push(response);
            }
            black_box(responses)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_cost,
    bench_compute_playtime,
    bench_cost_route,
    bench_cost_batch_100
);
criterion_main!(benches);
