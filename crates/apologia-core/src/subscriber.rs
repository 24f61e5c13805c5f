//! Subscriber state, keyed by email.
//!
//! One row per email, upserted when the payment webhook reports a successful
//! charge and read back by the front end to gate the chat UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::Plan;

/// The persisted subscription state for one email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
  pub email:              String,
  pub user_id:            Option<Uuid>,
  pub stripe_customer_id: Option<String>,
  pub subscribed:         bool,
  pub subscription_tier:  Option<Plan>,
  pub subscription_end:   Option<DateTime<Utc>>,
}

impl Subscriber {
  /// The default row returned when no subscription exists for an email.
  pub fn unsubscribed(email: impl Into<String>) -> Self {
    Self {
      email: email.into(),
      user_id: None,
      stripe_customer_id: None,
      subscribed: false,
      subscription_tier: None,
      subscription_end: None,
    }
  }

  /// An active subscription for `plan`, ending one billing period from `now`.
  pub fn active(
    email: impl Into<String>,
    user_id: Option<Uuid>,
    plan: Plan,
    now: DateTime<Utc>,
  ) -> Self {
    Self {
      email: email.into(),
      user_id,
      stripe_customer_id: None,
      subscribed: true,
      subscription_tier: Some(plan),
      subscription_end: Some(now + plan.period()),
    }
  }
}
