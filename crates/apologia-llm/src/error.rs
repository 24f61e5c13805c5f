//! Error type for `apologia-llm`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  /// A non-2xx response from the model provider.
  #[error("provider error ({status}): {message}")]
  Api { status: u16, message: String },

  /// A 2xx response that does not carry an assistant message.
  #[error("provider returned no completion")]
  EmptyCompletion,

  #[error("invalid api key: not a valid header value")]
  InvalidApiKey,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
