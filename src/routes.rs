//! HTTP router and shared handler state.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers, repositories::voucher_repository::VoucherRepository,
    services::voucher_service::VoucherService,
};

/// State shared with every handler via `State` extraction.
#[derive(Clone)]
pub struct AppState {
    pub vouchers: Arc<VoucherService>,
}

/// Build the application router on top of a voucher repository.
pub fn build_router(repository: Arc<dyn VoucherRepository>) -> Router {
    let state = AppState {
        vouchers: Arc::new(VoucherService::new(repository)),
    };

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/vouchers", post(handlers::vouchers::create_voucher))
        .route(
            "/api/v1/vouchers/apply",
            post(handlers::vouchers::apply_voucher),
        )
        .route(
            "/api/v1/vouchers/{code}",
            get(handlers::vouchers::get_voucher),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
