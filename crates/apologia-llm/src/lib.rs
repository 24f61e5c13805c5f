//! Language-model client for the Apologia chat path.
//!
//! The [`ChatModel`] trait is the seam the server depends on; the one
//! production implementation speaks the OpenAI-compatible chat-completions
//! REST shape directly over `reqwest` (no SDK). One synchronous round-trip
//! per call — no streaming, no retries; the quota gate upstream decides what
//! a failure costs.

pub mod error;
pub mod openai;

pub use error::{Error, Result};
pub use openai::OpenAiClient;

use async_trait::async_trait;

/// Abstraction over a chat-completion model.
#[async_trait]
pub trait ChatModel: Send + Sync {
  /// Produce one assistant reply for a system prompt and a user message.
  async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
