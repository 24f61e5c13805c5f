//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings and calendar dates as ISO
//! `YYYY-MM-DD`. UUIDs are stored as hyphenated lowercase strings. Booleans
//! are SQLite integers.

use apologia_core::{plan::Plan, subscriber::Subscriber, user::User};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> / NaiveDate ───────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

// ─── Plan ────────────────────────────────────────────────────────────────────

pub fn decode_plan(s: &str) -> Result<Plan> {
  Plan::parse(s).map_err(Error::Core)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:       String,
  pub email:         String,
  pub password_hash: String,
  pub is_guest:      bool,
  pub created_at:    String,
}

impl RawUser {
  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:       decode_uuid(&self.user_id)?,
      email:         self.email,
      password_hash: self.password_hash,
      is_guest:      self.is_guest,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `subscribers` row.
pub struct RawSubscriber {
  pub email:              String,
  pub user_id:            Option<String>,
  pub stripe_customer_id: Option<String>,
  pub subscribed:         bool,
  pub subscription_tier:  Option<String>,
  pub subscription_end:   Option<String>,
}

impl RawSubscriber {
  pub fn into_subscriber(self) -> Result<Subscriber> {
    Ok(Subscriber {
      email:              self.email,
      user_id:            self.user_id.as_deref().map(decode_uuid).transpose()?,
      stripe_customer_id: self.stripe_customer_id,
      subscribed:         self.subscribed,
      subscription_tier:  self
        .subscription_tier
        .as_deref()
        .map(decode_plan)
        .transpose()?,
      subscription_end:   self
        .subscription_end
        .as_deref()
        .map(decode_dt)
        .transpose()?,
    })
  }
}
