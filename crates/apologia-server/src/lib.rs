//! HTTP layer for the Apologia chat backend.
//!
//! Exposes an axum [`Router`] backed by any [`AppStore`], a
//! [`PaymentGateway`], and a [`ChatModel`]. Transport and TLS concerns are
//! the caller's responsibility.

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use apologia_billing::PaymentGateway;
use apologia_core::{plan::Plan, store::AppStore};
use apologia_llm::ChatModel;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` merged with
/// `APOLOGIA_`-prefixed environment variables (secrets come from the
/// environment).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,

  #[serde(default = "defaults::daily_message_limit")]
  pub daily_message_limit: u32,

  // Billing.
  #[serde(default = "defaults::currency")]
  pub currency:              String,
  pub price_id_weekly:       String,
  pub price_id_monthly:      String,
  pub success_url:           String,
  pub cancel_url:            String,
  pub portal_return_url:     String,
  pub stripe_secret_key:     String,
  pub stripe_webhook_secret: String,

  // Language model.
  pub llm_api_key: String,
  #[serde(default = "defaults::llm_model")]
  pub llm_model: String,
  #[serde(default = "defaults::llm_base_url")]
  pub llm_base_url: String,
  #[serde(default = "defaults::llm_system_prompt")]
  pub llm_system_prompt: String,

  /// Report every account as subscribed without consulting the store.
  /// Test/demo switch; keep off in production.
  #[serde(default)]
  pub skip_subscription_check: bool,
}

impl ServerConfig {
  /// Processor-side price identifier for a catalog plan.
  pub fn price_id(&self, plan: Plan) -> &str {
    match plan {
      Plan::Weekly => &self.price_id_weekly,
      Plan::Monthly => &self.price_id_monthly,
    }
  }
}

mod defaults {
  pub fn daily_message_limit() -> u32 {
    apologia_core::usage::DAILY_MESSAGE_LIMIT
  }

  pub fn currency() -> String { "usd".to_string() }

  pub fn llm_model() -> String { "gpt-4o-mini".to_string() }

  pub fn llm_base_url() -> String { "https://api.openai.com/v1".to_string() }

  pub fn llm_system_prompt() -> String {
    "You are a knowledgeable Christian apologetics assistant. Answer with \
     scripture references and historical evidence, charitably and directly."
      .to_string()
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: AppStore> {
  pub store:   Arc<S>,
  pub config:  Arc<ServerConfig>,
  pub gateway: Arc<dyn PaymentGateway>,
  pub model:   Arc<dyn ChatModel>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the backend.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: AppStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Liveness / metadata.
    .route("/",       get(handlers::meta::root))
    .route("/health", get(handlers::meta::health))
    // Billing.
    .route("/create-payment-intent", post(handlers::billing::create_payment_intent::<S>))
    .route("/webhook",               post(handlers::billing::webhook::<S>))
    .route("/checkout-session",      post(handlers::billing::checkout_session::<S>))
    .route("/portal-session",        post(handlers::billing::portal_session::<S>))
    // Chat.
    .route("/chat", post(handlers::chat::handler::<S>))
    // Accounts.
    .route("/auth/guest",    post(handlers::accounts::guest::<S>))
    .route("/auth/login",    post(handlers::accounts::login::<S>))
    .route("/auth/promote",  post(handlers::accounts::promote::<S>))
    .route("/subscription",  get(handlers::accounts::subscription::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
