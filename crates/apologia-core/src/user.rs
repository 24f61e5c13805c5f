//! Accounts and sessions.
//!
//! A guest account is created automatically at payment time (or on request)
//! with a random password and `is_guest = true`; it can later be promoted to
//! a full account by setting a caller-chosen password.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered account, guest or full.
#[derive(Debug, Clone, Serialize)]
pub struct User {
  pub user_id:       Uuid,
  pub email:         String,
  /// Argon2 PHC string, e.g. `$argon2id$v=19$…`. Never serialised to clients.
  #[serde(skip_serializing)]
  pub password_hash: String,
  pub is_guest:      bool,
  pub created_at:    DateTime<Utc>,
}

/// Input to [`crate::store::AppStore::create_user`].
/// `user_id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub email:         String,
  pub password_hash: String,
  pub is_guest:      bool,
}

/// A bearer-token session. The opaque token itself is handed to the client
/// once and only its SHA-256 digest is stored.
#[derive(Debug, Clone)]
pub struct Session {
  pub token_hash: String,
  pub user_id:    Uuid,
  pub created_at: DateTime<Utc>,
}
