use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_employee::EmployeeResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<EmployeeResponseData>, ApiError> {
    state
        .employee_service
        .get_employee(&employee_id)
        .await
        .into_result()
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}
