//! Observability HTTP Routes
//!
//! Health check and counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::food_routes::FoodsState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Metrics response: counters plus the current record count
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub counters: crate::observability::MetricsSnapshot,
    pub foods: Option<usize>,
}

/// Create observability routes
pub fn observability_routes(state: Arc<FoodsState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// `foods` is null when the store cannot be read; the fault is counted
/// and logged first so the snapshot includes it.
async fn metrics_handler(State(state): State<Arc<FoodsState>>) -> impl IntoResponse {
    let foods = match state.store.len() {
        Ok(count) => Some(count),
        Err(err) => {
            state.record_fault(&err.to_string());
            None
        }
    };

    let response = MetricsResponse {
        counters: state.metrics.snapshot(),
        foods,
    };

    (StatusCode::OK, Json(response))
}
