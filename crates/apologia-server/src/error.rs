//! Server error type and axum `IntoResponse` implementation.
//!
//! The taxonomy: validation → 400, authentication → 401, conflict → 409,
//! quota → 429, upstream dependency (processor, model, store) → 500 with a
//! generic body and the cause logged. Webhook failures are a special 400
//! whose plain-text body carries the `Webhook Error:` prefix the processor's
//! dashboard surfaces.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("unauthorized")]
  Unauthorized,

  #[error("conflict: {0}")]
  Conflict(String),

  /// The daily message quota is spent. Not retryable until the next UTC day.
  #[error("daily message limit reached")]
  QuotaExceeded,

  /// Signature or payload failure on the webhook endpoint.
  #[error("Webhook Error: {0}")]
  Webhook(String),

  #[error("billing error: {0}")]
  Billing(#[from] apologia_billing::Error),

  #[error("model error: {0}")]
  Model(#[from] apologia_llm::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("internal error: {0}")]
  Internal(String),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::BadRequest(msg) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
      }
      Error::Unauthorized => {
        let mut res = (
          StatusCode::UNAUTHORIZED,
          Json(json!({ "error": "unauthorized" })),
        )
          .into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Bearer realm=\"apologia\""),
        );
        res
      }
      Error::Conflict(msg) => {
        (StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
      }
      Error::QuotaExceeded => (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({
          "error": "daily message limit reached",
          "remaining": 0,
        })),
      )
        .into_response(),
      // Plain text, prefixed body: the shape the processor dashboard shows.
      Error::Webhook(msg) => {
        (StatusCode::BAD_REQUEST, format!("Webhook Error: {msg}")).into_response()
      }
      Error::Billing(e) => {
        tracing::error!(error = %e, "payment processor call failed");
        generic_500("payment processing is temporarily unavailable; please try again")
      }
      Error::Model(e) => {
        tracing::error!(error = %e, "model call failed");
        generic_500("the assistant is temporarily unavailable; please try again")
      }
      Error::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        generic_500("internal error; please try again")
      }
      Error::Internal(msg) => {
        tracing::error!(error = %msg, "internal error");
        generic_500("internal error; please try again")
      }
    }
  }
}

fn generic_500(msg: &str) -> Response {
  (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": msg })))
    .into_response()
}
