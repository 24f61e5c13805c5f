//! [`StripeGateway`] — the Stripe REST implementation of [`PaymentGateway`].
//!
//! Talks to the Stripe API directly: form-encoded request bodies, bearer
//! secret key, JSON responses. Form construction is kept in pure functions
//! so the exact wire parameters are unit-testable without a network.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{
  Error, Result,
  gateway::{
    CheckoutRequest, CheckoutSession, PaymentGateway, PaymentIntent,
    PaymentIntentRequest, PortalSession,
  },
};

const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// A Stripe client holding a pre-authenticated `reqwest::Client`.
#[derive(Clone)]
pub struct StripeGateway {
  http:     reqwest::Client,
  base_url: String,
}

impl StripeGateway {
  /// Build a gateway against the production Stripe API.
  pub fn new(secret_key: &str) -> Result<Self> {
    Self::with_base_url(secret_key, STRIPE_API_BASE)
  }

  /// Build a gateway against a caller-supplied base URL (stripe-mock, local
  /// stubs).
  pub fn with_base_url(secret_key: &str, base_url: &str) -> Result<Self> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {secret_key}"))
      .map_err(|_| Error::Api {
        status:  0,
        message: "secret key is not a valid header value".to_string(),
      })?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    let http = reqwest::Client::builder().default_headers(headers).build()?;

    Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
  }

  async fn post_form<T: DeserializeOwned>(
    &self,
    path: &str,
    form: &[(String, String)],
  ) -> Result<T> {
    let response = self
      .http
      .post(format!("{}{path}", self.base_url))
      .form(form)
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

    Ok(response.json().await?)
  }
}

// ─── Form construction ───────────────────────────────────────────────────────

pub(crate) fn payment_intent_form(
  req: &PaymentIntentRequest,
) -> Vec<(String, String)> {
  let mut form = vec![
    ("amount".to_string(), req.plan.amount_minor().to_string()),
    ("currency".to_string(), req.currency.clone()),
    ("receipt_email".to_string(), req.email.clone()),
    ("automatic_payment_methods[enabled]".to_string(), "true".to_string()),
    ("metadata[plan]".to_string(), req.plan.as_str().to_string()),
    ("metadata[email]".to_string(), req.email.clone()),
  ];
  if let Some(name) = &req.customer_name {
    form.push(("metadata[name]".to_string(), name.clone()));
  }
  form
}

pub(crate) fn checkout_session_form(req: &CheckoutRequest) -> Vec<(String, String)> {
  vec![
    ("mode".to_string(), "subscription".to_string()),
    ("line_items[0][price]".to_string(), req.price_id.clone()),
    ("line_items[0][quantity]".to_string(), "1".to_string()),
    ("customer_email".to_string(), req.email.clone()),
    ("success_url".to_string(), req.success_url.clone()),
    ("cancel_url".to_string(), req.cancel_url.clone()),
  ]
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PaymentIntentBody {
  id:            String,
  client_secret: String,
}

#[derive(Debug, Deserialize)]
struct CheckoutSessionBody {
  id:  String,
  url: String,
}

#[derive(Debug, Deserialize)]
struct PortalSessionBody {
  url: String,
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

// ─── PaymentGateway impl ─────────────────────────────────────────────────────

#[async_trait]
impl PaymentGateway for StripeGateway {
  async fn create_payment_intent(
    &self,
    req: PaymentIntentRequest,
  ) -> Result<PaymentIntent> {
    let body: PaymentIntentBody = self
      .post_form("/v1/payment_intents", &payment_intent_form(&req))
      .await?;
    Ok(PaymentIntent { id: body.id, client_secret: body.client_secret })
  }

  async fn create_checkout_session(
    &self,
    req: CheckoutRequest,
  ) -> Result<CheckoutSession> {
    let body: CheckoutSessionBody = self
      .post_form("/v1/checkout/sessions", &checkout_session_form(&req))
      .await?;
    Ok(CheckoutSession { id: body.id, url: body.url })
  }

  async fn create_portal_session(
    &self,
    customer_id: &str,
    return_url: &str,
  ) -> Result<PortalSession> {
    let form = vec![
      ("customer".to_string(), customer_id.to_string()),
      ("return_url".to_string(), return_url.to_string()),
    ];
    let body: PortalSessionBody =
      self.post_form("/v1/billing_portal/sessions", &form).await?;
    Ok(PortalSession { url: body.url })
  }
}

#[cfg(test)]
mod tests {
  use apologia_core::plan::Plan;

  use super::*;

  #[test]
  fn payment_intent_form_uses_catalog_amounts() {
    let weekly = payment_intent_form(&PaymentIntentRequest {
      plan:          Plan::Weekly,
      currency:      "usd".to_string(),
      email:         "a@example.com".to_string(),
      customer_name: None,
    });
    assert!(weekly.contains(&("amount".to_string(), "450".to_string())));
    assert!(weekly.contains(&("currency".to_string(), "usd".to_string())));
    assert!(weekly.contains(&("metadata[plan]".to_string(), "weekly".to_string())));

    let monthly = payment_intent_form(&PaymentIntentRequest {
      plan:          Plan::Monthly,
      currency:      "usd".to_string(),
      email:         "a@example.com".to_string(),
      customer_name: Some("Ada".to_string()),
    });
    assert!(monthly.contains(&("amount".to_string(), "1199".to_string())));
    assert!(monthly.contains(&("metadata[name]".to_string(), "Ada".to_string())));
  }

  #[test]
  fn checkout_form_is_a_subscription_with_one_line_item() {
    let form = checkout_session_form(&CheckoutRequest {
      price_id:    "price_123".to_string(),
      email:       "a@example.com".to_string(),
      success_url: "https://app.test/success".to_string(),
      cancel_url:  "https://app.test/cancel".to_string(),
    });
    assert!(form.contains(&("mode".to_string(), "subscription".to_string())));
    assert!(
      form.contains(&("line_items[0][price]".to_string(), "price_123".to_string()))
    );
    assert!(
      form.contains(&("line_items[0][quantity]".to_string(), "1".to_string()))
    );
  }
}
