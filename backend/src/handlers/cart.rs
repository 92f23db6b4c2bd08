use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    /// Accepted as a JSON number or a numeric string; anything else
    /// simply fails the catalog lookup.
    #[serde(default)]
    pub product_id: Value,
    pub quantity: Option<u32>,
}

/// Coerce a loosely-typed product id to the catalog's integer key.
fn coerce_product_id(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Simulated cart add: validates the product id, echoes the match back,
/// and stores nothing. A later `GET /api/cart` never sees this call.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCart>,
) -> AppResult<Json<Value>> {
    let quantity = payload.quantity.unwrap_or(1);

    let product = coerce_product_id(&payload.product_id)
        .and_then(|id| state.catalog.find(id))
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    info!(product_id = product.id, quantity, "Simulated cart add");

    Ok(Json(json!({
        "message": "Product added to cart",
        "product": product,
        "quantity": quantity,
    })))
}

/// Simulated cart read: always empty, regardless of any prior adds.
pub async fn get_cart() -> Json<Value> {
    Json(json!({
        "items": [],
        "total": 0,
        "message": "Cart functionality simulated",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_json_numbers() {
        assert_eq!(coerce_product_id(&json!(3)), Some(3));
        assert_eq!(coerce_product_id(&json!(0)), Some(0));
    }

    #[test]
    fn coerces_numeric_strings() {
        assert_eq!(coerce_product_id(&json!("2")), Some(2));
        assert_eq!(coerce_product_id(&json!(" 5 ")), Some(5));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(coerce_product_id(&json!("abc")), None);
        assert_eq!(coerce_product_id(&json!("")), None);
        assert_eq!(coerce_product_id(&json!(null)), None);
        assert_eq!(coerce_product_id(&json!(true)), None);
        assert_eq!(coerce_product_id(&json!([1])), None);
        assert_eq!(coerce_product_id(&json!(-1)), None);
    }
}
