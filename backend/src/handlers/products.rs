use std::time::Duration;

use axum::{extract::State, Json};
use rand::Rng;
use tracing::info;

use crate::{catalog::Product, AppState};

/// Full product listing. No pagination or filtering; the only twist is a
/// uniformly random delay in [0, 100) ms standing in for backing-store
/// latency.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let delay_ms = rand::thread_rng().gen_range(0..100u64);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    let products = state.catalog.all().to_vec();
    info!(count = products.len(), delay_ms, "Listed products");

    Json(products)
}
