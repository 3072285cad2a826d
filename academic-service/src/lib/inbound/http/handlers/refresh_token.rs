use auth::GeneratedTokens;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn refresh_token(
    State(state): State<AppState>,
    body: Result<Json<RefreshTokenRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<TokenPairData>, ApiError> {
    // A missing or unreadable body is treated as a missing token.
    let body = body.map(|Json(body)| body).unwrap_or_default();

    state
        .auth_service
        .refresh(&body.refresh_token)
        .await
        .into_result()
        .map_err(ApiError::from)
        .map(|tokens| ApiSuccess::new(StatusCode::OK, tokens.into()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequestBody {
    #[serde(default)]
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairData {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<GeneratedTokens> for TokenPairData {
    fn from(tokens: GeneratedTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}
