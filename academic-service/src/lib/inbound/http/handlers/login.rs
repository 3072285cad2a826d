use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AccountSummary;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginResponse;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .login(LoginCommand::new(body.email, body.password))
        .await
        .into_result()
        .map_err(ApiError::from)
        .map(|response| ApiSuccess::new(StatusCode::OK, response.into()))
}

/// Missing fields behave like credentials that match no account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub access_token: String,
    pub refresh_token: String,
    pub account: AccountData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub email: String,
}

impl From<AccountSummary> for AccountData {
    fn from(account: AccountSummary) -> Self {
        Self {
            id: account.id,
            email: account.email,
        }
    }
}

impl From<LoginResponse> for LoginResponseData {
    fn from(response: LoginResponse) -> Self {
        Self {
            access_token: response.tokens.access_token,
            refresh_token: response.tokens.refresh_token,
            account: response.account.into(),
        }
    }
}
