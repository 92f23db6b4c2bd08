use std::any::Any;
use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

/// Two-valued error taxonomy: a request either misses a resource/route
/// or blows up. Nothing is retried; every failure is terminal and local.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Set once at startup from `Config::is_development()`. Consulted only
/// by the internal-error paths below to decide whether the response body
/// carries the underlying fault detail.
static DEVELOPMENT: OnceLock<bool> = OnceLock::new();

pub fn set_development(development: bool) {
    // Ignored if already set (tests may initialize it more than once).
    let _ = DEVELOPMENT.set(development);
}

fn is_development() -> bool {
    *DEVELOPMENT.get().unwrap_or(&false)
}

/// The message shown for a 500: the real detail in development, a
/// generic placeholder everywhere else.
fn disclose(detail: &str, development: bool) -> String {
    if development {
        detail.to_string()
    } else {
        "Something went wrong".to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            AppError::Internal(fault) => {
                error!(%fault, "Unhandled error in request handler");
                internal_error_response(&fault.to_string())
            }
        }
    }
}

fn internal_error_response(detail: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "message": disclose(detail, is_development()),
        })),
    )
        .into_response()
}

/// Panic boundary for the router: converts a handler panic into the same
/// sanitized 500 body as `AppError::Internal`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    error!(detail, "Handler panicked");
    internal_error_response(&detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclose_passes_detail_through_in_development() {
        assert_eq!(disclose("index out of bounds", true), "index out of bounds");
    }

    #[test]
    fn disclose_hides_detail_outside_development() {
        assert_eq!(disclose("index out of bounds", false), "Something went wrong");
    }

    #[test]
    fn not_found_maps_to_404_with_error_body() {
        let response = AppError::NotFound("Product not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
