//! Voucher Service - Main Application Entry Point
//!
//! A REST API for creating discount vouchers and redeeming them against a
//! purchase amount. A voucher takes a percentage off purchases of 100 or
//! more and can be redeemed only once.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Persistence boundary**: `VoucherRepository` trait
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router over the PostgreSQL repository
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::repositories::voucher_repository::PgVoucherRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let app = routes::build_router(Arc::new(PgVoucherRepository::new(pool)));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
