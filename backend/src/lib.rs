use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state — read-only, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Config,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            catalog: Arc::new(Catalog::fixed()),
            config,
            started_at: Instant::now(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health / readiness ──────────────────────────────────────────────
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))

        // ── Catalog ─────────────────────────────────────────────────────────
        .route("/api/products", get(handlers::products::list_products))

        // ── Simulated cart ──────────────────────────────────────────────────
        .route(
            "/api/cart",
            get(handlers::cart::get_cart).post(handlers::cart::add_to_cart),
        )

        // ── Operational metrics ─────────────────────────────────────────────
        .route("/metrics", get(handlers::metrics::runtime_metrics))

        // ── 404 for everything else ─────────────────────────────────────────
        // Both unmatched paths and wrong methods on known paths get the
        // same not-found body; nothing in this API answers 405.
        .fallback(handlers::endpoint_not_found)
        .method_not_allowed_fallback(handlers::endpoint_not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
