//! Server Configuration
//!
//! Read from the environment after `.env` has been loaded.

use anyhow::Context;
use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite://customers.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:8788,http://127.0.0.1:8788";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// Pool size
    pub max_connections: u32,
    /// Listen address
    pub bind_addr: SocketAddr,
    /// Origins allowed by CORS
    pub frontend_origins: Vec<String>,
    /// POST / PUT body cap in bytes (`None` keeps the customers default)
    pub max_body_bytes: Option<usize>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(raw) => Some(
                raw.parse()
                    .with_context(|| format!("MAX_BODY_BYTES is not a number: {raw}"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
            max_body_bytes,
        })
    }
}
