//! Integration tests for `SqliteStore` against an in-memory database.

use apologia_core::{
  plan::Plan,
  store::AppStore,
  subscriber::Subscriber,
  usage::{DAILY_MESSAGE_LIMIT, QuotaDecision},
  user::{NewUser, Session},
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_user(email: &str) -> NewUser {
  NewUser {
    email:         email.to_string(),
    password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    is_guest:      false,
  }
}

fn day() -> NaiveDate {
  NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_user() {
  let s = store().await;

  let user = s.create_user(new_user("a@example.com")).await.unwrap();
  assert_eq!(user.email, "a@example.com");
  assert!(!user.is_guest);

  let fetched = s.get_user(user.user_id).await.unwrap().unwrap();
  assert_eq!(fetched.user_id, user.user_id);
  assert_eq!(fetched.email, user.email);
}

#[tokio::test]
async fn get_user_missing_returns_none() {
  let s = store().await;
  assert!(s.get_user(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
  let s = store().await;
  s.create_user(new_user("a@example.com")).await.unwrap();

  let err = s.create_user(new_user("a@example.com")).await.unwrap_err();
  assert!(matches!(err, Error::EmailTaken(e) if e == "a@example.com"));
}

#[tokio::test]
async fn find_user_by_email() {
  let s = store().await;
  let created = s.create_user(new_user("b@example.com")).await.unwrap();

  let found = s.find_user_by_email("b@example.com").await.unwrap().unwrap();
  assert_eq!(found.user_id, created.user_id);

  assert!(s.find_user_by_email("nope@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn promote_clears_guest_flag_and_replaces_hash() {
  let s = store().await;
  let guest = s
    .create_user(NewUser { is_guest: true, ..new_user("g@example.com") })
    .await
    .unwrap();
  assert!(guest.is_guest);

  s.promote_user(guest.user_id, "$argon2id$new".to_string())
    .await
    .unwrap();

  let promoted = s.get_user(guest.user_id).await.unwrap().unwrap();
  assert!(!promoted.is_guest);
  assert_eq!(promoted.password_hash, "$argon2id$new");
}

#[tokio::test]
async fn promote_missing_user_errors() {
  let s = store().await;
  let id = Uuid::new_v4();
  let err = s.promote_user(id, "h".to_string()).await.unwrap_err();
  assert!(matches!(err, Error::UserNotFound(got) if got == id));
}

// ─── Sessions ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn session_round_trip() {
  let s = store().await;
  let user = s.create_user(new_user("c@example.com")).await.unwrap();

  s.create_session(Session {
    token_hash: "abc123".to_string(),
    user_id:    user.user_id,
    created_at: Utc::now(),
  })
  .await
  .unwrap();

  let resolved = s.find_session("abc123").await.unwrap().unwrap();
  assert_eq!(resolved.user_id, user.user_id);

  assert!(s.find_session("missing").await.unwrap().is_none());
}

// ─── Subscribers ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn subscriber_upsert_and_read() {
  let s = store().await;
  let now = Utc::now();

  s.upsert_subscriber(Subscriber::active("sub@example.com", None, Plan::Monthly, now))
    .await
    .unwrap();

  let sub = s.get_subscriber("sub@example.com").await.unwrap().unwrap();
  assert!(sub.subscribed);
  assert_eq!(sub.subscription_tier, Some(Plan::Monthly));
  assert!(sub.subscription_end.is_some());

  assert!(s.get_subscriber("none@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn subscriber_upsert_keeps_earlier_customer_id() {
  let s = store().await;
  let now = Utc::now();

  let mut first = Subscriber::active("sub@example.com", None, Plan::Weekly, now);
  first.stripe_customer_id = Some("cus_123".to_string());
  s.upsert_subscriber(first).await.unwrap();

  // A later upsert without a customer id must not erase the recorded one.
  s.upsert_subscriber(Subscriber::active("sub@example.com", None, Plan::Monthly, now))
    .await
    .unwrap();

  let sub = s.get_subscriber("sub@example.com").await.unwrap().unwrap();
  assert_eq!(sub.stripe_customer_id.as_deref(), Some("cus_123"));
  assert_eq!(sub.subscription_tier, Some(Plan::Monthly));
}

// ─── Daily usage ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn usage_count_is_zero_without_a_row() {
  let s = store().await;
  assert_eq!(s.usage_count(Uuid::new_v4(), day()).await.unwrap(), 0);
}

#[tokio::test]
async fn reserve_counts_up_and_reports_remaining() {
  let s = store().await;
  let user = s.create_user(new_user("u@example.com")).await.unwrap();

  let first = s
    .reserve_usage(user.user_id, day(), DAILY_MESSAGE_LIMIT)
    .await
    .unwrap();
  assert_eq!(first, QuotaDecision::Granted { count: 1, remaining: 14 });

  let second = s
    .reserve_usage(user.user_id, day(), DAILY_MESSAGE_LIMIT)
    .await
    .unwrap();
  assert_eq!(second, QuotaDecision::Granted { count: 2, remaining: 13 });

  assert_eq!(s.usage_count(user.user_id, day()).await.unwrap(), 2);
}

#[tokio::test]
async fn sixteenth_reservation_is_refused_without_incrementing() {
  let s = store().await;
  let user = s.create_user(new_user("u@example.com")).await.unwrap();

  for i in 1..=DAILY_MESSAGE_LIMIT {
    let decision = s
      .reserve_usage(user.user_id, day(), DAILY_MESSAGE_LIMIT)
      .await
      .unwrap();
    assert_eq!(
      decision,
      QuotaDecision::Granted { count: i, remaining: DAILY_MESSAGE_LIMIT - i }
    );
  }

  let refused = s
    .reserve_usage(user.user_id, day(), DAILY_MESSAGE_LIMIT)
    .await
    .unwrap();
  assert_eq!(refused, QuotaDecision::Exhausted);
  assert_eq!(refused.remaining(), 0);

  // The stored count did not move past the limit.
  assert_eq!(
    s.usage_count(user.user_id, day()).await.unwrap(),
    DAILY_MESSAGE_LIMIT
  );
}

#[tokio::test]
async fn release_hands_the_slot_back() {
  let s = store().await;
  let user = s.create_user(new_user("u@example.com")).await.unwrap();

  s.reserve_usage(user.user_id, day(), 1).await.unwrap();
  assert_eq!(
    s.reserve_usage(user.user_id, day(), 1).await.unwrap(),
    QuotaDecision::Exhausted
  );

  s.release_usage(user.user_id, day()).await.unwrap();
  assert_eq!(s.usage_count(user.user_id, day()).await.unwrap(), 0);

  // The slot is usable again.
  assert_eq!(
    s.reserve_usage(user.user_id, day(), 1).await.unwrap(),
    QuotaDecision::Granted { count: 1, remaining: 0 }
  );
}

#[tokio::test]
async fn release_without_a_row_is_a_no_op() {
  let s = store().await;
  let user = s.create_user(new_user("u@example.com")).await.unwrap();

  s.release_usage(user.user_id, day()).await.unwrap();
  assert_eq!(s.usage_count(user.user_id, day()).await.unwrap(), 0);
}

#[tokio::test]
async fn dates_are_tracked_independently() {
  let s = store().await;
  let user = s.create_user(new_user("u@example.com")).await.unwrap();
  let tomorrow = day().succ_opt().unwrap();

  s.reserve_usage(user.user_id, day(), 1).await.unwrap();
  assert_eq!(
    s.reserve_usage(user.user_id, day(), 1).await.unwrap(),
    QuotaDecision::Exhausted
  );

  // A new date means a fresh row — the implicit daily reset.
  assert_eq!(
    s.reserve_usage(user.user_id, tomorrow, 1).await.unwrap(),
    QuotaDecision::Granted { count: 1, remaining: 0 }
  );
}
