//! Response types for the payroll API.
//!
//! Successful bodies and the error envelope shared by every endpoint.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{AttendanceSummary, PayrollRun};
use crate::error::EngineError;
use crate::models::{AttendancePeriod, AuditTrace, DailyAttendanceRecord, PayrollBreakdown, SalarySlip};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid policy", message),
            },
            err @ EngineError::InvalidPeriod { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_PERIOD",
                    err.to_string(),
                    "Months are numbered 1 (January) to 12 (December) and the year must be a supported calendar year",
                ),
            ),
        }
    }
}

/// Body of `POST /attendance`.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    /// The employee the month belongs to.
    pub employee_id: String,
    /// Calendar year.
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    /// One record per calendar day.
    pub records: Vec<DailyAttendanceRecord>,
    /// Per-status counts over `records`.
    pub summary: AttendanceSummary,
}

/// Body of `POST /payroll`.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollRunResponse {
    /// Unique identifier of this run.
    pub calculation_id: Uuid,
    /// When the run was computed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that computed it.
    pub engine_version: String,
    /// Period, entries and totals.
    #[serde(flatten)]
    pub run: PayrollRun,
}

/// Body of `POST /payroll/breakdown`.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollBreakdownResponse {
    /// The employee paid.
    pub employee_id: String,
    /// The month paid.
    pub period: AttendancePeriod,
    /// Salary components.
    pub breakdown: PayrollBreakdown,
    /// How the components were derived.
    pub audit_trace: AuditTrace,
}

/// Body of `POST /salary-history`.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryHistoryResponse {
    /// The employee listed.
    pub employee_id: String,
    /// Slips, newest first.
    pub slips: Vec<SalarySlip>,
}
