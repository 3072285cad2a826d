mod common;

use auth::TokenPayload;
use chrono::Duration;
use common::TestApp;
use common::TEST_PASSWORD;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    let employee = app.create_employee("Ana Lima", "a@x.com").await;

    let response = app.login("a@x.com", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 200);
    assert!(!body["data"]["accessToken"].as_str().unwrap().is_empty());
    assert!(!body["data"]["refreshToken"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["account"]["id"], employee["id"]);
    assert_eq!(body["data"]["account"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.create_employee("Ana Lima", "a@x.com").await;

    let response = app.login("a@x.com", "wrong").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::spawn().await;
    app.create_employee("Ana Lima", "a@x.com").await;

    let wrong_password = app.login("a@x.com", "wrong").await;
    let unknown_email = app.login("nobody@x.com", TEST_PASSWORD).await;

    assert_eq!(wrong_password.status(), unknown_email.status());

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_email: Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_refresh_token_success() {
    let app = TestApp::spawn().await;
    let (employee_id, access_token, refresh_token) = app.signed_in_employee("a@x.com").await;

    let response = app
        .post("/api/auth/refresh-token")
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let new_access_token = body["data"]["accessToken"].as_str().unwrap();
    assert_ne!(new_access_token, access_token);
    assert!(!body["data"]["refreshToken"].as_str().unwrap().is_empty());

    let me: Value = app
        .get_authenticated("/api/auth/me", new_access_token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(me["data"]["id"], employee_id);
}

#[tokio::test]
async fn test_refresh_token_expired() {
    let app = TestApp::spawn().await;
    let expired = app
        .token_service_with(Duration::minutes(15), Duration::seconds(-60))
        .generate_tokens(&TokenPayload::new("employee-1", "a@x.com"))
        .unwrap();

    let response = app
        .post("/api/auth/refresh-token")
        .json(&json!({ "refreshToken": expired.refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_refresh_token_missing() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/refresh-token")
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Refresh token is required");
}

#[tokio::test]
async fn test_refresh_token_without_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/refresh-token")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 401);
    assert_eq!(body["data"]["code"], "UNAUTHORIZED");
    assert_eq!(body["data"]["message"], "Refresh token is required");
}

#[tokio::test]
async fn test_login_with_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .header("Content-Type", "application/json")
        .body("not json")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 400);
    assert_eq!(body["data"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::spawn().await;
    let (_, access_token, _) = app.signed_in_employee("a@x.com").await;

    let response = app
        .post("/api/auth/refresh-token")
        .json(&json!({ "refreshToken": access_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = TestApp::spawn().await;
    let (_, access_token, _) = app.signed_in_employee("a@x.com").await;

    let response = app
        .post_authenticated("/api/auth/logout", &access_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Logout successful. Token revoked.");

    let response = app
        .get_authenticated("/api/auth/me", &access_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_accepts_opaque_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post_authenticated("/api/auth/logout", "abc123")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.revocations.len().await, 1);

    let response = app
        .get_authenticated("/api/auth/me", "abc123")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Token has been revoked");
}

#[tokio::test]
async fn test_logout_without_header() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["code"], "BAD_REQUEST");
    assert_eq!(body["data"]["message"], "Token is required for logout");
}

#[tokio::test]
async fn test_refresh_after_refresh_token_logout() {
    let app = TestApp::spawn().await;
    let (_, _, refresh_token) = app.signed_in_employee("a@x.com").await;

    let response = app
        .post_authenticated("/api/auth/logout", &refresh_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post("/api/auth/refresh-token")
        .json(&json!({ "refreshToken": refresh_token }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_me_with_expired_access_token() {
    let app = TestApp::spawn().await;
    let expired = app
        .token_service_with(Duration::seconds(-60), Duration::days(7))
        .generate_tokens(&TokenPayload::new("employee-1", "a@x.com"))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/me", &expired.access_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_refresh_token() {
    let app = TestApp::spawn().await;
    let (_, _, refresh_token) = app.signed_in_employee("a@x.com").await;

    let response = app
        .get_authenticated("/api/auth/me", &refresh_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
