//! Liveness and service-metadata endpoints.

use axum::Json;
use serde_json::{Value, json};

/// `GET /` — service metadata.
pub async fn root() -> Json<Value> {
  Json(json!({
    "service": "apologia",
    "version": env!("CARGO_PKG_VERSION"),
  }))
}

/// `GET /health` — liveness only.
pub async fn health() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}
