use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::shared::AppError;
use crate::inbound::http::middleware::extract_bearer_token;
use crate::inbound::http::router::AppState;

/// Revoke the presented bearer token. The token does not need to verify.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let token = extract_bearer_token(&headers)
        .ok_or_else(|| AppError::BadRequest("Token is required for logout".to_string()))?;

    state
        .auth_service
        .logout(token)
        .await
        .into_result()
        .map_err(ApiError::from)
        .map(|()| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData {
                    message: "Logout successful. Token revoked.".to_string(),
                },
            )
        })
}
