use std::sync::Arc;

use academic_service::application::spawn_revocation_sweeper;
use academic_service::application::Services;
use academic_service::config::Config;
use academic_service::inbound::http::router::create_router;
use academic_service::outbound::password::Argon2PasswordService;
use academic_service::outbound::repositories::InMemoryEmployeeRepository;
use academic_service::outbound::repositories::PostgresEmployeeRepository;
use academic_service::outbound::revocation::InMemoryRevocationStore;
use auth::TokenService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "academic_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "academic-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    config.check_secrets()?;
    let token_config = config.token_config()?;
    let persistence = match config.database {
        Some(_) => "postgresql",
        None => "memory",
    };

    tracing::info!(
        run_mode = %config.run_mode,
        http_port = config.server.http_port,
        persistence,
        access_expires_in = %config.jwt.access_expires_in,
        refresh_expires_in = %config.jwt.refresh_expires_in,
        sweep_interval_secs = config.revocation.sweep_interval_secs,
        "Configuration loaded"
    );

    let tokens = Arc::new(TokenService::new(&token_config));
    let passwords = Arc::new(Argon2PasswordService::default());
    let revocations = Arc::new(InMemoryRevocationStore::new());

    let services = match &config.database {
        Some(database) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(database.max_connections)
                .connect(&database.url)
                .await?;
            tracing::info!(
                max_connections = database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            Services::new(
                Arc::new(PostgresEmployeeRepository::new(pg_pool)),
                passwords,
                Arc::clone(&revocations),
                tokens,
            )
        }
        None => {
            tracing::warn!("No database configured, employees are kept in memory");

            Services::new(
                Arc::new(InMemoryEmployeeRepository::new()),
                passwords,
                Arc::clone(&revocations),
                tokens,
            )
        }
    };

    if spawn_revocation_sweeper(revocations, config.revocation.sweep_interval()).is_some() {
        tracing::info!(
            interval_secs = config.revocation.sweep_interval_secs,
            "Revocation sweeper started"
        );
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        services.auth,
        services.employees,
        config.is_development(),
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
