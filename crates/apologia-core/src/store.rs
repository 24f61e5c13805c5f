//! The `AppStore` trait — the persistence seam of the backend.
//!
//! The trait is implemented by storage backends (e.g.
//! `apologia-store-sqlite`). The server depends on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  subscriber::Subscriber,
  usage::QuotaDecision,
  user::{NewUser, Session, User},
};

/// Abstraction over the Apologia persistence backend.
///
/// The only cross-request shared mutable state in the system is the usage
/// counter; [`AppStore::reserve_usage`] must be atomic (see its docs). All
/// methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait AppStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Create and persist a new user. `user_id` and `created_at` are assigned
  /// by the store. The email must be unused.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Retrieve a user by UUID. Returns `None` if not found.
  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Retrieve a user by email. Returns `None` if not found.
  fn find_user_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Replace the password hash and clear the guest flag — the promotion of
  /// a guest account to a full one. Errors if the user does not exist.
  fn promote_user(
    &self,
    id: Uuid,
    password_hash: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Sessions ──────────────────────────────────────────────────────────

  /// Persist a session keyed by the token digest.
  fn create_session(
    &self,
    session: Session,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Resolve a token digest to its user. Returns `None` for unknown tokens.
  fn find_session<'a>(
    &'a self,
    token_hash: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  // ── Subscribers ───────────────────────────────────────────────────────

  /// Insert or update the subscriber row keyed by `subscriber.email`.
  ///
  /// `user_id` and `stripe_customer_id` are only overwritten when the new
  /// value is present — a webhook without a customer id must not erase one
  /// recorded earlier.
  fn upsert_subscriber(
    &self,
    subscriber: Subscriber,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve the subscriber row for an email. Returns `None` if absent.
  fn get_subscriber<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Subscriber>, Self::Error>> + Send + 'a;

  // ── Daily usage ───────────────────────────────────────────────────────

  /// Atomically reserve one message slot for (`user_id`, `date`).
  ///
  /// This is a single conditional upsert: the stored count after N granted
  /// reservations is exactly N, capped at `limit`, under any interleaving
  /// of concurrent callers. Absence of a row counts as zero used.
  fn reserve_usage(
    &self,
    user_id: Uuid,
    date: NaiveDate,
    limit: u32,
  ) -> impl Future<Output = Result<QuotaDecision, Self::Error>> + Send + '_;

  /// Hand back a previously reserved slot (decrement, floored at zero).
  ///
  /// Called when the downstream action fails after a successful
  /// reservation, so failed calls do not consume quota.
  fn release_usage(
    &self,
    user_id: Uuid,
    date: NaiveDate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// The stored count for (`user_id`, `date`); zero when no row exists.
  fn usage_count(
    &self,
    user_id: Uuid,
    date: NaiveDate,
  ) -> impl Future<Output = Result<u32, Self::Error>> + Send + '_;
}
