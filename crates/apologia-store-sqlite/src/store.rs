//! [`SqliteStore`] — the SQLite implementation of [`AppStore`].

use std::path::Path;

use chrono::{NaiveDate, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use apologia_core::{
  store::AppStore,
  subscriber::Subscriber,
  usage::QuotaDecision,
  user::{NewUser, Session, User},
};

use crate::{
  Error, Result,
  encode::{RawSubscriber, RawUser, encode_date, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Apologia store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn user_by_column(
    &self,
    sql: &'static str,
    key: String,
  ) -> Result<Option<User>> {
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(sql, rusqlite::params![key], |row| {
              Ok(RawUser {
                user_id:       row.get(0)?,
                email:         row.get(1)?,
                password_hash: row.get(2)?,
                is_guest:      row.get(3)?,
                created_at:    row.get(4)?,
              })
            })
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }
}

// ─── AppStore impl ───────────────────────────────────────────────────────────

impl AppStore for SqliteStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn create_user(&self, input: NewUser) -> Result<User> {
    let user = User {
      user_id:       Uuid::new_v4(),
      email:         input.email,
      password_hash: input.password_hash,
      is_guest:      input.is_guest,
      created_at:    Utc::now(),
    };

    let id_str   = encode_uuid(user.user_id);
    let email    = user.email.clone();
    let hash     = user.password_hash.clone();
    let is_guest = user.is_guest;
    let at_str   = encode_dt(user.created_at);

    // Existence check and insert run in the same connection call, so no
    // other statement can interleave between them.
    let inserted: Option<()> = self
      .conn
      .call(move |conn| {
        let taken: bool = conn
          .query_row(
            "SELECT 1 FROM users WHERE email = ?1",
            rusqlite::params![email],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if taken {
          return Ok(None);
        }

        conn.execute(
          "INSERT INTO users (user_id, email, password_hash, is_guest, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, email, hash, is_guest, at_str],
        )?;
        Ok(Some(()))
      })
      .await?;

    match inserted {
      Some(()) => Ok(user),
      None => Err(Error::EmailTaken(user.email)),
    }
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    self
      .user_by_column(
        "SELECT user_id, email, password_hash, is_guest, created_at
         FROM users WHERE user_id = ?1",
        encode_uuid(id),
      )
      .await
  }

  async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
    self
      .user_by_column(
        "SELECT user_id, email, password_hash, is_guest, created_at
         FROM users WHERE email = ?1",
        email.to_string(),
      )
      .await
  }

  async fn promote_user(&self, id: Uuid, password_hash: String) -> Result<()> {
    let id_str = encode_uuid(id);

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE users SET password_hash = ?2, is_guest = 0 WHERE user_id = ?1",
          rusqlite::params![id_str, password_hash],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::UserNotFound(id));
    }
    Ok(())
  }

  // ── Sessions ──────────────────────────────────────────────────────────────

  async fn create_session(&self, session: Session) -> Result<()> {
    let user_id_str = encode_uuid(session.user_id);
    let at_str      = encode_dt(session.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO sessions (token_hash, user_id, created_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![session.token_hash, user_id_str, at_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn find_session(&self, token_hash: &str) -> Result<Option<User>> {
    self
      .user_by_column(
        "SELECT u.user_id, u.email, u.password_hash, u.is_guest, u.created_at
         FROM sessions s
         JOIN users u ON u.user_id = s.user_id
         WHERE s.token_hash = ?1",
        token_hash.to_string(),
      )
      .await
  }

  // ── Subscribers ───────────────────────────────────────────────────────────

  async fn upsert_subscriber(&self, subscriber: Subscriber) -> Result<()> {
    let email       = subscriber.email;
    let user_id_str = subscriber.user_id.map(encode_uuid);
    let customer_id = subscriber.stripe_customer_id;
    let subscribed  = subscriber.subscribed;
    let tier_str    = subscriber.subscription_tier.map(|p| p.as_str().to_owned());
    let end_str     = subscriber.subscription_end.map(encode_dt);
    let at_str      = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subscribers (
             email, user_id, stripe_customer_id, subscribed,
             subscription_tier, subscription_end, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
           ON CONFLICT(email) DO UPDATE SET
             user_id            = COALESCE(excluded.user_id, subscribers.user_id),
             stripe_customer_id = COALESCE(excluded.stripe_customer_id,
                                           subscribers.stripe_customer_id),
             subscribed         = excluded.subscribed,
             subscription_tier  = excluded.subscription_tier,
             subscription_end   = excluded.subscription_end,
             updated_at         = excluded.updated_at",
          rusqlite::params![
            email,
            user_id_str,
            customer_id,
            subscribed,
            tier_str,
            end_str,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn get_subscriber(&self, email: &str) -> Result<Option<Subscriber>> {
    let email = email.to_string();

    let raw: Option<RawSubscriber> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT email, user_id, stripe_customer_id, subscribed,
                      subscription_tier, subscription_end
               FROM subscribers WHERE email = ?1",
              rusqlite::params![email],
              |row| {
                Ok(RawSubscriber {
                  email:              row.get(0)?,
                  user_id:            row.get(1)?,
                  stripe_customer_id: row.get(2)?,
                  subscribed:         row.get(3)?,
                  subscription_tier:  row.get(4)?,
                  subscription_end:   row.get(5)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSubscriber::into_subscriber).transpose()
  }

  // ── Daily usage ───────────────────────────────────────────────────────────

  async fn reserve_usage(
    &self,
    user_id: Uuid,
    date: NaiveDate,
    limit: u32,
  ) -> Result<QuotaDecision> {
    if limit == 0 {
      return Ok(QuotaDecision::Exhausted);
    }

    let user_id_str = encode_uuid(user_id);
    let date_str    = encode_date(date);

    // A single conditional upsert: the increment and the limit check are one
    // statement, so concurrent callers can never push the count past the
    // limit. No returned row means the quota was already spent.
    let count: Option<u32> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "INSERT INTO message_usage (user_id, date, message_count)
               VALUES (?1, ?2, 1)
               ON CONFLICT(user_id, date) DO UPDATE
                 SET message_count = message_count + 1
                 WHERE message_usage.message_count < ?3
               RETURNING message_count",
              rusqlite::params![user_id_str, date_str, limit],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(match count {
      Some(count) => QuotaDecision::Granted {
        count,
        remaining: limit.saturating_sub(count),
      },
      None => QuotaDecision::Exhausted,
    })
  }

  async fn release_usage(&self, user_id: Uuid, date: NaiveDate) -> Result<()> {
    let user_id_str = encode_uuid(user_id);
    let date_str    = encode_date(date);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE message_usage SET message_count = message_count - 1
           WHERE user_id = ?1 AND date = ?2 AND message_count > 0",
          rusqlite::params![user_id_str, date_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn usage_count(&self, user_id: Uuid, date: NaiveDate) -> Result<u32> {
    let user_id_str = encode_uuid(user_id);
    let date_str    = encode_date(date);

    let count: Option<u32> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT message_count FROM message_usage
               WHERE user_id = ?1 AND date = ?2",
              rusqlite::params![user_id_str, date_str],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(count.unwrap_or(0))
  }
}
