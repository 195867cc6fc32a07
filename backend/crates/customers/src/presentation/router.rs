//! Customers Router

use crate::application::config::CustomersConfig;
use crate::domain::repository::CustomerRepository;
use crate::infra::sqlite::SqliteCustomerRepository;
use crate::presentation::handlers::{self, CustomersAppState};
use axum::Router;
use std::sync::Arc;

/// Create the customers router with SQLite repository
pub fn customers_router(repo: SqliteCustomerRepository, config: CustomersConfig) -> Router {
    customers_router_generic(repo, config)
}

/// Create a generic customers router for any repository implementation
///
/// The dispatcher is installed as the fallback so it sees every path and
/// every method; routing happens on the path's segments, not on axum routes.
/// The dispatcher takes the raw body, so axum's default body limit never
/// applies; POST and PUT bodies are capped by `CustomersConfig::max_body_bytes`.
pub fn customers_router_generic<R>(repo: R, config: CustomersConfig) -> Router
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
{
    let state = CustomersAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .fallback(handlers::dispatch::<R>)
        .with_state(state)
}
