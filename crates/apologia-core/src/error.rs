//! Error types for `apologia-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A plan selector outside the fixed catalog. Never reaches the payment
  /// processor; callers surface it as a validation error.
  #[error("unknown plan: {0:?}")]
  UnknownPlan(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
