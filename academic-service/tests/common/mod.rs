use std::sync::Arc;

use academic_service::application::Services;
use academic_service::inbound::http::router::create_router;
use academic_service::outbound::password::Argon2PasswordService;
use academic_service::outbound::repositories::InMemoryEmployeeRepository;
use academic_service::outbound::revocation::InMemoryRevocationStore;
use auth::PasswordHasher;
use auth::TokenConfig;
use auth::TokenService;
use chrono::Duration;
use serde_json::json;
use serde_json::Value;

pub const TEST_PASSWORD: &str = "correct";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub token_config: TokenConfig,
    pub revocations: Arc<InMemoryRevocationStore>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_config = TokenConfig {
            access_secret: "test-access-secret-for-jwt-signing-32-bytes".to_string(),
            refresh_secret: "test-refresh-secret-for-jwt-signing-32-bytes".to_string(),
            access_lifetime: Duration::minutes(15),
            refresh_lifetime: Duration::days(7),
        };

        // Cheap costs keep the suite fast
        let hasher = PasswordHasher::with_costs(1024, 1, 1).expect("Failed to build hasher");
        let revocations = Arc::new(InMemoryRevocationStore::new());

        let services = Services::new(
            Arc::new(InMemoryEmployeeRepository::new()),
            Arc::new(Argon2PasswordService::new(hasher)),
            Arc::clone(&revocations),
            Arc::new(TokenService::new(&token_config)),
        );

        let router = create_router(services.auth, services.employees, false);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            token_config,
            revocations,
        }
    }

    /// Token service sharing this app's secrets but with other lifetimes.
    pub fn token_service_with(
        &self,
        access_lifetime: Duration,
        refresh_lifetime: Duration,
    ) -> TokenService {
        TokenService::new(&TokenConfig {
            access_lifetime,
            refresh_lifetime,
            ..self.token_config.clone()
        })
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register an employee and return the response body's `data`.
    pub async fn create_employee(&self, name: &str, email: &str) -> Value {
        let response = self
            .post("/api/employees")
            .json(&json!({
                "name": name,
                "email": email,
                "password": TEST_PASSWORD
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"].clone()
    }

    /// Submit credentials to the login endpoint.
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in; returns (employee id, access token, refresh token).
    pub async fn signed_in_employee(&self, email: &str) -> (String, String, String) {
        let employee = self.create_employee("Test Employee", email).await;
        let response = self.login(email, TEST_PASSWORD).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        (
            employee["id"].as_str().unwrap().to_string(),
            body["data"]["accessToken"].as_str().unwrap().to_string(),
            body["data"]["refreshToken"].as_str().unwrap().to_string(),
        )
    }
}
