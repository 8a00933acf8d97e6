//! HTTP request handlers for the payroll API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    attendance_for, compute_payroll_with_audit, run_payroll, salary_history,
    summarize_attendance,
};
use crate::models::{AttendancePeriod, Employee};

use super::request::{AttendanceRequest, PayrollRequest, SalaryHistoryRequest};
use super::response::{
    ApiError, ApiErrorResponse, AttendanceResponse, PayrollBreakdownResponse,
    PayrollRunResponse, SalaryHistoryResponse,
};
use super::state::AppState;

/// Upper bound on the months a salary history request may ask for.
pub const MAX_HISTORY_MONTHS: usize = 120;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance", post(attendance_handler))
        .route("/payroll", post(payroll_handler))
        .route("/payroll/breakdown", post(payroll_breakdown_handler))
        .route("/salary-history", post(salary_history_handler))
        .with_state(state)
}

/// Handler for POST /attendance.
///
/// Returns the derived month of attendance for one employee with a summary.
async fn attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> ApiResult<AttendanceResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    let request = parse_payload(payload, correlation_id)?;
    let period = resolve_period(request.year, request.month, correlation_id)?;
    let today = request.today.unwrap_or_else(local_today);
    let employee: Employee = request.employee.into();

    let records = attendance_for(&employee, &period, today, state.config().config());
    let summary = summarize_attendance(&records);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        period = %period,
        present = summary.present,
        absent = summary.absent,
        "Attendance derived"
    );

    Ok(Json(AttendanceResponse {
        employee_id: employee.id,
        year: period.year(),
        month: period.month(),
        records,
        summary,
    }))
}

/// Handler for POST /payroll.
///
/// Computes an entry for every employee plus run totals.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> ApiResult<PayrollRunResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = parse_payload(payload, correlation_id)?;
    let period = resolve_period(request.year, request.month, correlation_id)?;
    let today = request.today.unwrap_or_else(local_today);
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let run = run_payroll(
        &employees,
        &period,
        today,
        state.config().config(),
        &request.previous,
    );

    info!(
        correlation_id = %correlation_id,
        period = %period,
        employee_count = run.totals.employee_count,
        total_payout = %run.totals.total_payout,
        pending_payout = %run.totals.pending_payout,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll run completed successfully"
    );

    Ok(Json(PayrollRunResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        run,
    }))
}

/// Handler for POST /payroll/breakdown.
///
/// Returns one employee's salary components with the audit trace.
async fn payroll_breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> ApiResult<PayrollBreakdownResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll breakdown request");

    let request = parse_payload(payload, correlation_id)?;
    let period = resolve_period(request.year, request.month, correlation_id)?;
    let today = request.today.unwrap_or_else(local_today);
    let employee: Employee = request.employee.into();
    let config = state.config().config();

    let records = attendance_for(&employee, &period, today, config);
    let calculation = compute_payroll_with_audit(&records, &employee.salary, config.payroll());

    for warning in &calculation.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        period = %period,
        net_pay = %calculation.breakdown.net_pay,
        "Payroll breakdown completed successfully"
    );

    Ok(Json(PayrollBreakdownResponse {
        employee_id: employee.id,
        period,
        breakdown: calculation.breakdown,
        audit_trace: calculation.audit_trace,
    }))
}

/// Handler for POST /salary-history.
async fn salary_history_handler(
    State(_state): State<AppState>,
    payload: Result<Json<SalaryHistoryRequest>, JsonRejection>,
) -> ApiResult<SalaryHistoryResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary history request");

    let request = parse_payload(payload, correlation_id)?;
    let context = resolve_period(request.year, request.month, correlation_id)?;
    if request.months > MAX_HISTORY_MONTHS {
        warn!(
            correlation_id = %correlation_id,
            months = request.months,
            "Salary history request too long"
        );
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!("months must be at most {}", MAX_HISTORY_MONTHS),
        )));
    }
    let employee: Employee = request.employee.into();

    let slips = salary_history(&employee, &context, request.months);
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        slips = slips.len(),
        "Salary history listed"
    );

    Ok(Json(SalaryHistoryResponse {
        employee_id: employee.id,
        slips,
    }))
}

/// Unwraps a JSON body, mapping extractor rejections to API errors.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

fn resolve_period(
    year: i32,
    month: u32,
    correlation_id: Uuid,
) -> Result<AttendancePeriod, ApiErrorResponse> {
    AttendancePeriod::new(year, month).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid period");
        err.into()
    })
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/okboz").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post(uri: &str, body: impl Into<Body>) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn employee_json() -> Value {
        json!({
            "id": "E001",
            "name": "Alice Johnson",
            "role": "Sales Manager",
            "department": "Sales",
            "salary": "85000",
            "joining_date": "2023-01-15",
            "week_off": "Sunday"
        })
    }

    #[tokio::test]
    async fn test_attendance_returns_full_month() {
        let body = json!({
            "employee": employee_json(),
            "year": 2025,
            "month": 11,
            "today": "2025-11-15"
        });
        let response = post("/attendance", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result = body_json(response).await;
        assert_eq!(result["employee_id"], "E001");
        assert_eq!(result["records"].as_array().unwrap().len(), 30);
        assert_eq!(result["records"][0]["date"], "2025-11-01");
        assert_eq!(result["records"][14]["status"], "NOT_MARKED");
        assert_eq!(result["summary"]["not_marked"], 16);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post("/attendance", "{invalid json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = body_json(response).await;
        assert_eq!(error["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let body = json!({ "employee": employee_json(), "year": 2025 });
        let response = post("/payroll/breakdown", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = body_json(response).await;
        assert_eq!(error["code"], "VALIDATION_ERROR");
        assert!(error["message"].as_str().unwrap().contains("month"));
    }

    #[tokio::test]
    async fn test_invalid_month_returns_invalid_period() {
        let body = json!({ "employee": employee_json(), "year": 2025, "month": 13 });
        let response = post("/attendance", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = body_json(response).await;
        assert_eq!(error["code"], "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_breakdown_includes_audit_trace() {
        let body = json!({
            "employee": employee_json(),
            "year": 2025,
            "month": 10,
            "today": "2025-11-15"
        });
        let response = post("/payroll/breakdown", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result = body_json(response).await;
        assert_eq!(result["employee_id"], "E001");
        assert_eq!(result["period"], json!({ "year": 2025, "month": 10 }));
        assert_eq!(result["breakdown"]["total_days"], 30);
        assert_eq!(result["audit_trace"]["steps"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_payroll_run_carries_previous_status() {
        let body = json!({
            "employees": [employee_json(), { "id": "E009", "salary": 40000 }],
            "year": 2025,
            "month": 10,
            "today": "2025-11-15",
            "previous": [{
                "employee_id": "E001",
                "payable_days": "30",
                "total_days": 30,
                "basic": "1",
                "allowances": "1",
                "status": "Paid"
            }]
        });
        let response = post("/payroll", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result = body_json(response).await;
        assert!(result["calculation_id"].is_string());
        assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(result["entries"].as_array().unwrap().len(), 2);
        assert_eq!(result["entries"][0]["status"], "Paid");
        assert_eq!(result["entries"][1]["status"], "Pending");
        assert_eq!(result["totals"]["employee_count"], 2);
    }

    #[tokio::test]
    async fn test_salary_history_stops_at_joining() {
        let body = json!({
            "employee": { "id": "E006", "salary": "30000", "joining_date": "2025-09-16" },
            "year": 2025,
            "month": 11
        });
        let response = post("/salary-history", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result = body_json(response).await;
        let slips = result["slips"].as_array().unwrap();
        assert_eq!(slips.len(), 2);
        assert_eq!(slips[0]["amount"], "30000");
        assert_eq!(slips[1]["amount"], "15000");
        assert_eq!(slips[1]["payout_date"], "2025-10-01");
    }

    #[tokio::test]
    async fn test_salary_history_rejects_excessive_months() {
        let body = json!({
            "employee": employee_json(),
            "year": 2025,
            "month": 11,
            "months": MAX_HISTORY_MONTHS + 1
        });
        let response = post("/salary-history", body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}
