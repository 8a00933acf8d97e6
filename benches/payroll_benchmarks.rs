//! Performance benchmarks for the payroll engine.
//!
//! - Deriving one employee-month of attendance
//! - Reducing a month to a payroll breakdown
//! - Payroll runs over growing rosters
//! - A full `/payroll` request through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use okboz_payroll::api::{AppState, create_router};
use okboz_payroll::calculation::{attendance_for, compute_payroll_with_audit, run_payroll};
use okboz_payroll::config::{ConfigLoader, EngineConfig};
use okboz_payroll::models::{AttendancePeriod, Employee};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 15).unwrap()
}

fn october() -> AttendancePeriod {
    AttendancePeriod::new(2025, 10).unwrap()
}

fn roster(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|i| Employee {
            id: format!("E{:04}", i),
            name: format!("Staff {}", i),
            role: if i % 4 == 0 { "Support Lead" } else { "Executive" }.to_string(),
            department: if i % 3 == 0 { "Sales" } else { "Operations" }.to_string(),
            salary: (30_000 + (i % 10) * 5_000).to_string(),
            joining_date: NaiveDate::from_ymd_opt(2023, 1 + (i % 12) as u32, 1 + (i % 28) as u32),
            week_off: "Sunday".to_string(),
        })
        .collect()
}

/// Benchmark: one employee-month of attendance (generation + variation).
fn bench_employee_month(c: &mut Criterion) {
    let config = EngineConfig::default();
    let employee = roster(1).remove(0);
    let period = october();

    c.bench_function("employee_month", |b| {
        b.iter(|| {
            black_box(attendance_for(
                black_box(&employee),
                &period,
                reference_date(),
                &config,
            ))
        })
    });
}

/// Benchmark: payroll breakdown with audit trace for a derived month.
fn bench_payroll_breakdown(c: &mut Criterion) {
    let config = EngineConfig::default();
    let employee = roster(1).remove(0);
    let records = attendance_for(&employee, &october(), reference_date(), &config);

    c.bench_function("payroll_breakdown", |b| {
        b.iter(|| {
            black_box(compute_payroll_with_audit(
                black_box(&records),
                &employee.salary,
                config.payroll(),
            ))
        })
    });
}

/// Benchmark: payroll runs as the roster grows.
fn bench_payroll_run_scaling(c: &mut Criterion) {
    let config = EngineConfig::default();
    let period = october();
    let mut group = c.benchmark_group("payroll_run");

    for size in [10usize, 100, 1000] {
        let employees = roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| black_box(run_payroll(employees, &period, reference_date(), &config, &[])))
        });
    }

    group.finish();
}

/// Benchmark: a 100-employee `/payroll` request end to end.
fn bench_http_payroll(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/okboz").expect("Failed to load config");
    let router = create_router(AppState::new(config));

    let employees: Vec<serde_json::Value> = roster(100)
        .iter()
        .map(|e| {
            serde_json::json!({
                "id": e.id,
                "role": e.role,
                "department": e.department,
                "salary": e.salary,
                "joining_date": e.joining_date.map(|d| d.to_string())
            })
        })
        .collect();
    let body = serde_json::json!({
        "employees": employees,
        "year": 2025,
        "month": 10,
        "today": "2025-11-15"
    })
    .to_string();

    c.bench_function("http_payroll_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
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
    bench_employee_month,
    bench_payroll_breakdown,
    bench_payroll_run_scaling,
    bench_http_payroll,
);
criterion_main!(benches);
