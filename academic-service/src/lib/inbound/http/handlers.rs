use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::shared::errors::ErrorObject;
use crate::domain::shared::AppError;
use crate::domain::shared::ErrorCode;

pub mod create_employee;
pub mod get_employee;
pub mod health;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh_token;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const INTERNAL_ERROR_DETAILS: &str = "Something went wrong";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// HTTP rendering of an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Unreadable JSON bodies get the regular error envelope instead of axum's plain-text rejection.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::BadRequest(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.0
            .status_code()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Generic 500 body; `details` is only filled in development.
    pub fn internal_response(details: Option<String>) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let data = ApiErrorData {
            error: ErrorObject {
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                code: ErrorCode::InternalError,
                errors: None,
            },
            details: Some(details.unwrap_or_else(|| INTERNAL_ERROR_DETAILS.to_string())),
        };

        (status, Json(ApiResponseBody::new(status, data))).into_response()
    }
}

/// Underlying message of an internal error, carried on the response so a
/// development-only layer can expose it.
#[derive(Debug, Clone)]
pub struct InternalErrorDetails(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self.0 {
            AppError::Internal(details) => {
                tracing::error!(error = %details, "Request failed with internal error");

                let mut response = ApiError::internal_response(None);
                response
                    .extensions_mut()
                    .insert(InternalErrorDetails(details));
                response
            }
            err => {
                let data = ApiErrorData {
                    error: err.to_object(),
                    details: None,
                };
                (status, Json(ApiResponseBody::new(status, data))).into_response()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    #[serde(flatten)]
    pub error: ErrorObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Plain confirmation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}
