pub mod cart;
pub mod metrics;
pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::json;

use crate::AppState;

/// Liveness signal. No dependency checks — it cannot fail.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
    }))
}

/// Readiness probe. The dependency flags are simulated constants and
/// `overall` is a literal, not an aggregate of the flags.
pub async fn ready() -> Json<serde_json::Value> {
    Json(json!({
        "database": true,
        "redis": true,
        "overall": true,
    }))
}

/// Fallback for any route the router does not know.
pub async fn endpoint_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
