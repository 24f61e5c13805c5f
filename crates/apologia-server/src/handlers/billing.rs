//! Handlers for payment initiation and the processor webhook.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/create-payment-intent` | `{plan, email, name?}` → camelCase intent triple |
//! | `POST` | `/webhook` | raw body + `stripe-signature`; responds `{received: true}` |
//! | `POST` | `/checkout-session` | bearer token or `{email}`; returns hosted URL |
//! | `POST` | `/portal-session` | bearer token or `{email}`; returns hosted URL |

use axum::{Json, extract::State, http::HeaderMap};
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use apologia_billing::{
  CheckoutRequest, PaymentIntentRequest,
  webhook::{PAYMENT_FAILED, PAYMENT_SUCCEEDED, WebhookEvent},
};
use apologia_core::{
  plan::Plan, store::AppStore, subscriber::Subscriber, user::NewUser,
};

use crate::{AppState, auth, error::Error};

// ─── Payment intent ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PaymentIntentBody {
  pub plan:  String,
  pub email: String,
  pub name:  Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
  pub client_secret:     String,
  pub payment_intent_id: String,
  pub price_id:          String,
}

/// `POST /create-payment-intent`
pub async fn create_payment_intent<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<PaymentIntentBody>,
) -> Result<Json<PaymentIntentResponse>, Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let plan =
    Plan::parse(&body.plan).map_err(|e| Error::BadRequest(e.to_string()))?;
  if body.email.trim().is_empty() {
    return Err(Error::BadRequest("email is required".to_string()));
  }

  let intent = state
    .gateway
    .create_payment_intent(PaymentIntentRequest {
      plan,
      currency: state.config.currency.clone(),
      email: body.email,
      customer_name: body.name,
    })
    .await?;

  Ok(Json(PaymentIntentResponse {
    client_secret:     intent.client_secret,
    payment_intent_id: intent.id,
    price_id:          state.config.price_id(plan).to_string(),
  }))
}

// ─── Webhook ──────────────────────────────────────────────────────────────────

/// `POST /webhook` — raw body, signature header, `{received: true}` reply.
pub async fn webhook<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Json<Value>, Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let signature = headers
    .get("stripe-signature")
    .and_then(|v| v.to_str().ok())
    .ok_or_else(|| Error::Webhook("missing stripe-signature header".to_string()))?;

  apologia_billing::webhook::verify_signature(
    &body,
    signature,
    &state.config.stripe_webhook_secret,
  )
  .map_err(|e| Error::Webhook(e.to_string()))?;

  let event =
    WebhookEvent::parse(&body).map_err(|e| Error::Webhook(e.to_string()))?;

  match event.event_type.as_str() {
    PAYMENT_SUCCEEDED => payment_succeeded(&state, &event).await?,
    PAYMENT_FAILED => match event.payment_intent() {
      Ok(intent) => {
        tracing::warn!(intent = %intent.id, "payment failed");
      }
      Err(e) => tracing::warn!(error = %e, "payment failed (unparseable intent)"),
    },
    other => tracing::debug!(event_type = other, "ignoring webhook event"),
  }

  Ok(Json(json!({ "received": true })))
}

/// Record the subscription and make sure an account exists for the payer.
async fn payment_succeeded<S>(
  state: &AppState<S>,
  event: &WebhookEvent,
) -> Result<(), Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let intent = event
    .payment_intent()
    .map_err(|e| Error::Webhook(e.to_string()))?;

  let Some(email) = WebhookEvent::payment_email(&intent) else {
    tracing::warn!(intent = %intent.id, "payment succeeded without an email");
    return Ok(());
  };

  // Unknown tiers are recorded as a bare subscription rather than bounced:
  // the charge already went through.
  let plan = intent.metadata.plan.as_deref().and_then(|p| Plan::parse(p).ok());

  let user = match state
    .store
    .find_user_by_email(&email)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
  {
    Some(user) => user,
    None => {
      // First sight of this payer: provision a guest account they can
      // claim later by setting a real password.
      let user = state
        .store
        .create_user(NewUser {
          email:         email.clone(),
          password_hash: auth::hash_password(&auth::generate_token())?,
          is_guest:      true,
        })
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
      tracing::info!(user = %user.user_id, "guest account created for payer");
      user
    }
  };

  let now = Utc::now();
  state
    .store
    .upsert_subscriber(Subscriber {
      email:              email.clone(),
      user_id:            Some(user.user_id),
      stripe_customer_id: intent.customer.clone(),
      subscribed:         true,
      subscription_tier:  plan,
      subscription_end:   plan.map(|p| now + p.period()),
    })
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  tracing::info!(
    intent = %intent.id,
    plan = plan.map(Plan::as_str).unwrap_or("unknown"),
    "subscription recorded"
  );
  Ok(())
}

// ─── Hosted sessions ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CheckoutBody {
  pub plan:  String,
  /// Required when no bearer token is sent (guest checkout).
  pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionUrlResponse {
  pub url: String,
}

/// `POST /checkout-session`
pub async fn checkout_session<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(body): Json<CheckoutBody>,
) -> Result<Json<SessionUrlResponse>, Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let plan =
    Plan::parse(&body.plan).map_err(|e| Error::BadRequest(e.to_string()))?;
  let email = resolve_email(&state, &headers, body.email).await?;

  let session = state
    .gateway
    .create_checkout_session(CheckoutRequest {
      price_id:    state.config.price_id(plan).to_string(),
      email,
      success_url: state.config.success_url.clone(),
      cancel_url:  state.config.cancel_url.clone(),
    })
    .await?;

  Ok(Json(SessionUrlResponse { url: session.url }))
}

#[derive(Debug, Deserialize)]
pub struct PortalBody {
  /// Required when no bearer token is sent.
  pub email: Option<String>,
}

/// `POST /portal-session`
pub async fn portal_session<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Json(body): Json<PortalBody>,
) -> Result<Json<SessionUrlResponse>, Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let email = resolve_email(&state, &headers, body.email).await?;

  let subscriber = state
    .store
    .get_subscriber(&email)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or_else(|| Error::BadRequest("no subscription for this email".to_string()))?;

  let customer_id = subscriber.stripe_customer_id.ok_or_else(|| {
    Error::BadRequest("no billing profile for this email".to_string())
  })?;

  let session = state
    .gateway
    .create_portal_session(&customer_id, &state.config.portal_return_url)
    .await?;

  Ok(Json(SessionUrlResponse { url: session.url }))
}

/// Authenticated callers act as their account email; guests must supply one.
async fn resolve_email<S>(
  state: &AppState<S>,
  headers: &HeaderMap,
  body_email: Option<String>,
) -> Result<String, Error>
where
  S: AppStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if let Some(user) = auth::user_from_headers(state, headers).await? {
    return Ok(user.email);
  }
  match body_email {
    Some(email) if !email.trim().is_empty() => Ok(email),
    _ => Err(Error::BadRequest(
      "email is required without a bearer token".to_string(),
    )),
  }
}
