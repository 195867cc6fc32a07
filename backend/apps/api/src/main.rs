//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `customers::CustomerError`, rendered through `kernel::error::AppError`.

mod config;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use config::ApiConfig;
use customers::{CustomersConfig, SqliteCustomerRepository, customers_router};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,customers=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Database connection
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(database_url = %config.database_url, "Connected to database");

    let store = SqliteCustomerRepository::new(pool);

    // Run migrations
    store.migrate().await?;

    tracing::info!("Migrations completed");

    let app = build_app(store, &config);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Customers router wrapped in request tracing and CORS
fn build_app(store: SqliteCustomerRepository, config: &ApiConfig) -> Router {
    // Preflights (OPTIONS with Origin and Access-Control-Request-Method) are
    // answered here and never reach the dispatcher; a plain OPTIONS still gets 405.
    let allowed_origins: Vec<HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    let mut customers_config = CustomersConfig::default();
    if let Some(max_body_bytes) = config.max_body_bytes {
        customers_config.max_body_bytes = max_body_bytes;
    }

    customers_router(store, customers_config)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
