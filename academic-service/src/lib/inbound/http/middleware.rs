use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::shared::AppError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::InternalErrorDetails;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Request gate for protected routes.
///
/// Rejects requests without a bearer token, with a revoked token, or with a
/// token that fails access verification. On success the
/// [`AuthenticatedEmployee`](crate::domain::auth::models::AuthenticatedEmployee)
/// is inserted into the request extensions and the request continues once.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers())
        .map(str::to_owned)
        .ok_or_else(|| {
            tracing::warn!(reason = "missing_token", "Request rejected");
            AppError::unauthorized("Missing authorization token")
        })?;

    let employee = state
        .auth_service
        .authenticate(&token)
        .await
        .into_result()
        .map_err(|e| {
            tracing::warn!(reason = %e, "Request rejected");
            ApiError::from(e)
        })?;

    req.extensions_mut().insert(employee);

    Ok(next.run(req).await)
}

/// Token from an `Authorization: Bearer <token>` header.
///
/// Any other scheme, casing or an empty token yields `None`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .filter(|token| !token.trim().is_empty())
}

/// Replace the generic 500 body with one that exposes the underlying message.
///
/// Only installed in development.
pub async fn expose_internal_error_details(mut response: Response) -> Response {
    match response.extensions_mut().remove::<InternalErrorDetails>() {
        Some(InternalErrorDetails(details)) => ApiError::internal_response(Some(details)),
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc123")), Some("abc123"));
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
        assert_eq!(extract_bearer_token(&headers("Basic abc123")), None);
        assert_eq!(extract_bearer_token(&headers("bearer abc123")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer ")), None);
        assert_eq!(extract_bearer_token(&headers("abc123")), None);
    }
}
