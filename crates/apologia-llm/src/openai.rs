//! OpenAI-compatible chat-completions client (HTTP direct, no SDK).

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::{ChatModel, Error, Result};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// A chat-completions client bound to one model name.
#[derive(Clone)]
pub struct OpenAiClient {
  http:     reqwest::Client,
  base_url: String,
  model:    String,
}

impl OpenAiClient {
  /// Create a client against the production API.
  pub fn new(api_key: &str, model: &str) -> Result<Self> {
    Self::with_base_url(api_key, model, OPENAI_API_BASE)
  }

  /// Create a client against a caller-supplied base URL (proxies, local
  /// stubs, compatible providers).
  pub fn with_base_url(api_key: &str, model: &str, base_url: &str) -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
      .map_err(|_| Error::InvalidApiKey)?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    let http = reqwest::Client::builder().default_headers(headers).build()?;

    Ok(Self {
      http,
      base_url: base_url.trim_end_matches('/').to_string(),
      model: model.to_string(),
    })
  }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CompletionBody {
  #[serde(default)]
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
  content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
  #[serde(default)]
  error: ApiErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorDetail {
  message: Option<String>,
}

// ─── ChatModel impl ──────────────────────────────────────────────────────────

#[async_trait]
impl ChatModel for OpenAiClient {
  async fn complete(&self, system: &str, user: &str) -> Result<String> {
    let payload = serde_json::json!({
      "model": self.model,
      "messages": [
        {"role": "system", "content": system},
        {"role": "user", "content": user},
      ],
    });

    let response = self
      .http
      .post(format!("{}/chat/completions", self.base_url))
      .json(&payload)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body: ApiErrorBody = response.json().await.unwrap_or_default();
      return Err(Error::Api {
        status:  status.as_u16(),
        message: body.error.message.unwrap_or_else(|| "unknown error".to_string()),
      });
    }

    let body: CompletionBody = response.json().await?;
    body
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .filter(|content| !content.is_empty())
      .ok_or(Error::EmptyCompletion)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn completion_body_reads_first_choice() {
    let body: CompletionBody = serde_json::from_str(
      r#"{"choices":[{"message":{"content":"hello"}},{"message":{"content":"x"}}]}"#,
    )
    .unwrap();
    let content = body
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .unwrap();
    assert_eq!(content, "hello");
  }

  #[test]
  fn error_body_tolerates_missing_fields() {
    let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.error.message.is_none());
  }

  #[test]
  fn base_url_trailing_slash_is_trimmed() {
    let client =
      OpenAiClient::with_base_url("sk-test", "gpt-4o-mini", "http://localhost:9/v1/")
        .unwrap();
    assert_eq!(client.base_url, "http://localhost:9/v1");
  }
}
