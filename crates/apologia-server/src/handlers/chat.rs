//! The quota-gated chat endpoint.
//!
//! Flow: authenticate → atomically reserve a message slot → canned
//! classifier → (chat-mode miss only) language model. A failed model call
//! hands the slot back, so failures never consume quota.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use apologia_core::{message::Message, store::AppStore, usage::QuotaDecision};
use apologia_responder::Mode;

use crate::{AppState, auth::AuthedUser, error::Error};

#[derive(Debug, Deserialize)]
pub struct ChatBody {
  pub message: String,
  pub topic:   Option<String>,
  #[serde(default)]
  pub mode:    Mode,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
  pub response:  String,
  /// Messages the caller may still send today.
  pub remaining: u32,
  /// The structured bot message, ready for the client's transcript.
  pub message:   Message,
}

/// `POST /chat` — bearer auth; body `{message, topic?, mode?}`.
pub async fn handler<S>(
  AuthedUser(user): AuthedUser,
  State(state): State<AppState<S>>,
  Json(body): Json<ChatBody>,
) -> Result<Json<ChatResponse>, Error>
where
  S: AppStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.message.trim().is_empty() {
    return Err(Error::BadRequest("message must not be empty".to_string()));
  }

  let today = Utc::now().date_naive();
  let limit = state.config.daily_message_limit;

  let decision = state
    .store
    .reserve_usage(user.user_id, today, limit)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let QuotaDecision::Granted { remaining, .. } = decision else {
    tracing::info!(user = %user.user_id, "daily message limit reached");
    return Err(Error::QuotaExceeded);
  };

  let response = match apologia_responder::respond(&body.message, body.mode) {
    Some(canned) => canned,
    // Only reachable in chat mode: debate mode is total.
    None => {
      let system = match &body.topic {
        Some(topic) => {
          format!("{}\n\nCurrent topic: {topic}.", state.config.llm_system_prompt)
        }
        None => state.config.llm_system_prompt.clone(),
      };
      match state.model.complete(&system, &body.message).await {
        Ok(reply) => reply,
        Err(e) => {
          if let Err(release_err) =
            state.store.release_usage(user.user_id, today).await
          {
            tracing::error!(
              user = %user.user_id,
              error = %release_err,
              "failed to release quota slot"
            );
          }
          return Err(Error::Model(e));
        }
      }
    }
  };

  let message = Message::bot(response.clone(), body.topic);
  Ok(Json(ChatResponse { response, remaining, message }))
}
