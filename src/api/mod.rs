//! HTTP API for the payroll engine.
//!
//! JSON endpoints for derived attendance, payroll runs, single-employee
//! breakdowns, and salary history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_HISTORY_MONTHS, create_router};
pub use request::{
    AttendanceRequest, EmployeeRequest, PayrollRequest, SalaryField, SalaryHistoryRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, AttendanceResponse, PayrollBreakdownResponse,
    PayrollRunResponse, SalaryHistoryResponse,
};
pub use state::AppState;
