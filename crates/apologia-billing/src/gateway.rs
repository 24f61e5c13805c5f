//! The `PaymentGateway` trait and its request/response types.
//!
//! Handlers depend on this abstraction, not on the Stripe implementation;
//! the trait object form (`Arc<dyn PaymentGateway>`) lets tests swap in a
//! recording mock.

use apologia_core::plan::Plan;
use async_trait::async_trait;

use crate::Result;

/// Input to [`PaymentGateway::create_payment_intent`].
///
/// The charge amount is derived from `plan` by the implementation — the
/// catalog constants in [`Plan::amount_minor`] are the only source of
/// amounts; nothing is looked up processor-side.
#[derive(Debug, Clone)]
pub struct PaymentIntentRequest {
  pub plan:          Plan,
  pub currency:      String,
  pub email:         String,
  pub customer_name: Option<String>,
}

/// A created payment intent, ready to hand to the client.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
  pub id:            String,
  pub client_secret: String,
}

/// Input to [`PaymentGateway::create_checkout_session`].
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
  /// Processor-side price identifier for the chosen plan.
  pub price_id:    String,
  pub email:       String,
  pub success_url: String,
  pub cancel_url:  String,
}

/// A hosted checkout session; the client is redirected to `url` and control
/// returns via redirect and webhook.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
  pub id:  String,
  pub url: String,
}

/// A hosted customer-portal session.
#[derive(Debug, Clone)]
pub struct PortalSession {
  pub url: String,
}

/// Abstraction over the external payment processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
  /// Create a payment intent for one catalog plan. Returns the opaque
  /// client secret the front end needs to confirm the payment.
  async fn create_payment_intent(
    &self,
    req: PaymentIntentRequest,
  ) -> Result<PaymentIntent>;

  /// Create a hosted checkout session for a subscription price.
  async fn create_checkout_session(
    &self,
    req: CheckoutRequest,
  ) -> Result<CheckoutSession>;

  /// Create a customer-portal session for an existing processor customer.
  async fn create_portal_session(
    &self,
    customer_id: &str,
    return_url: &str,
  ) -> Result<PortalSession>;
}
