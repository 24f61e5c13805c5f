//! Webhook signature verification and event parsing.
//!
//! The processor signs each delivery with
//! `stripe-signature: t=<unix-ts>,v1=<hex hmac-sha256>`, where the MAC is
//! computed over `"{t}.{raw body}"` with the endpoint's shared secret.
//! Verification never branches on secret-derived data: the digest comparison
//! is constant-time.

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use subtle::ConstantTimeEq as _;

use crate::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Event types this backend acts on; everything else is logged and ignored.
pub const PAYMENT_SUCCEEDED: &str = "payment_intent.succeeded";
pub const PAYMENT_FAILED: &str = "payment_intent.payment_failed";

/// Verify the `stripe-signature` header against the raw request body.
pub fn verify_signature(
  payload: &[u8],
  signature_header: &str,
  webhook_secret: &str,
) -> Result<()> {
  let mut timestamp = None;
  let mut signature = None;
  for part in signature_header.split(',') {
    match part.split_once('=') {
      Some(("t", v)) => timestamp = Some(v),
      Some(("v1", v)) => signature = Some(v),
      _ => {}
    }
  }
  let (timestamp, signature) = match (timestamp, signature) {
    (Some(t), Some(v)) => (t, v),
    _ => return Err(Error::MalformedSignatureHeader),
  };

  let mut mac = HmacSha256::new_from_slice(webhook_secret.as_bytes())
    .map_err(|_| Error::MalformedSignatureHeader)?;
  mac.update(timestamp.as_bytes());
  mac.update(b".");
  mac.update(payload);
  let expected = hex::encode(mac.finalize().into_bytes());

  if expected.as_bytes().ct_eq(signature.as_bytes()).into() {
    Ok(())
  } else {
    Err(Error::SignatureMismatch)
  }
}

// ─── Event payloads ──────────────────────────────────────────────────────────

/// A verified webhook delivery, with the inner object left untyped until the
/// dispatcher knows what to extract.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
  #[serde(rename = "type")]
  pub event_type: String,
  data:           EventData,
}

#[derive(Debug, Clone, Deserialize)]
struct EventData {
  object: serde_json::Value,
}

/// The fields this backend reads off a payment-intent object.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentObject {
  pub id:            String,
  pub customer:      Option<String>,
  pub receipt_email: Option<String>,
  #[serde(default)]
  pub metadata:      PaymentMetadata,
}

/// Metadata attached at intent-creation time (see `stripe::payment_intent_form`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentMetadata {
  pub email: Option<String>,
  pub plan:  Option<String>,
  pub name:  Option<String>,
}

impl WebhookEvent {
  /// Parse a raw (already signature-verified) delivery body.
  pub fn parse(payload: &[u8]) -> Result<Self> {
    serde_json::from_slice(payload)
      .map_err(|e| Error::MalformedEvent(e.to_string()))
  }

  /// Interpret the inner object as a payment intent.
  pub fn payment_intent(&self) -> Result<PaymentIntentObject> {
    serde_json::from_value(self.data.object.clone())
      .map_err(|e| Error::MalformedEvent(e.to_string()))
  }

  /// The email to key the subscriber row on: explicit metadata first, then
  /// the receipt email.
  pub fn payment_email(intent: &PaymentIntentObject) -> Option<String> {
    intent
      .metadata
      .email
      .clone()
      .or_else(|| intent.receipt_email.clone())
  }
}
