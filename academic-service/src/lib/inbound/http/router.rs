use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_employee::create_employee;
use super::handlers::get_employee::get_employee;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::me::me;
use super::handlers::refresh_token::refresh_token;
use super::middleware::authenticate as auth_middleware;
use super::middleware::expose_internal_error_details;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::employee::ports::EmployeeServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
}

/// Build the HTTP application.
///
/// `expose_internal_errors` puts the underlying message of 500 responses in
/// their `details` field; it is meant for development only.
pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    employee_service: Arc<dyn EmployeeServicePort>,
    expose_internal_errors: bool,
) -> Router {
    let state = AppState {
        auth_service,
        employee_service,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh-token", post(refresh_token))
        .route("/api/auth/logout", post(logout))
        .route("/api/employees", post(create_employee));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/employees/:employee_id", get(get_employee))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let router = Router::new()
        .merge(public_routes)
        .merge(protected_routes);

    let router = if expose_internal_errors {
        router.layer(middleware::map_response(expose_internal_error_details))
    } else {
        router
    };

    router
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
