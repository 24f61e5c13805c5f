//! Error type for `apologia-billing`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The `stripe-signature` header is missing a `t=` or `v1=` field, or is
  /// otherwise unparseable.
  #[error("malformed signature header")]
  MalformedSignatureHeader,

  /// The computed HMAC does not match the header's `v1` value.
  #[error("signature verification failed")]
  SignatureMismatch,

  /// The event payload is not the JSON shape the processor documents.
  #[error("malformed event payload: {0}")]
  MalformedEvent(String),

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  /// A non-2xx response from the processor API.
  #[error("processor error ({status}): {message}")]
  Api { status: u16, message: String },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
