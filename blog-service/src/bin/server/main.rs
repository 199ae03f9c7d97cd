use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use blog_service::bootstrap;
use blog_service::config::Config;
use blog_service::domain::account::service::AccountService;
use blog_service::domain::post::service::PostService;
use blog_service::inbound::http::router::create_router;
use blog_service::outbound::repositories::PostgresAccountRepository;
use blog_service::outbound::repositories::PostgresPostRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().context("Failed to load configuration")?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    // Schema and seed data must be in place before any request is served;
    // a bootstrap failure aborts startup
    bootstrap::run(&config.database.url)
        .await
        .context("Storage bootstrap failed")?;
    tracing::info!(database = "postgresql", "Storage bootstrap completed");

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await
        .context("Failed to create database connection pool")?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let post_repository = Arc::new(PostgresPostRepository::new(pg_pool));

    let account_service = Arc::new(AccountService::new(account_repository));
    let post_service = Arc::new(PostService::new(post_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address)
        .await
        .with_context(|| format!("Failed to bind {}", http_address))?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        account_service,
        post_service,
        authenticator,
        config.jwt.expiration_hours,
    );

    axum::serve(http_listener, http_application)
        .await
        .context("Http server error")?;

    Ok(())
}
