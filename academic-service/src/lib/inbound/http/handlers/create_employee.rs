use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::shared::AppError;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .employee_service
        .create_employee(body.try_into_command()?)
        .await
        .into_result()
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}

/// HTTP request body for registering an employee (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    role: Option<String>,
}

impl CreateEmployeeRequest {
    fn try_into_command(self) -> Result<CreateEmployeeCommand, AppError> {
        CreateEmployeeCommand::parse(self.name, self.email, self.password, self.role)
            .map_err(AppError::Validation)
    }
}

/// Public projection of an employee; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeResponseData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name.as_str().to_string(),
            email: employee.email.as_str().to_string(),
            role: employee.role.clone(),
            active: employee.active,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}
