//! SQL schema for the Apologia SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id       TEXT PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,     -- argon2 PHC string
    is_guest      INTEGER NOT NULL DEFAULT 0,
    created_at    TEXT NOT NULL      -- ISO 8601 UTC
);

-- Bearer-token sessions. Only the SHA-256 digest of a token is stored.
CREATE TABLE IF NOT EXISTS sessions (
    token_hash TEXT PRIMARY KEY,
    user_id    TEXT NOT NULL REFERENCES users(user_id),
    created_at TEXT NOT NULL
);

-- One row per email; upserted by the payment webhook.
CREATE TABLE IF NOT EXISTS subscribers (
    email              TEXT PRIMARY KEY,
    user_id            TEXT REFERENCES users(user_id),
    stripe_customer_id TEXT,
    subscribed         INTEGER NOT NULL DEFAULT 0,
    subscription_tier  TEXT,            -- 'weekly' | 'monthly'
    subscription_end   TEXT,            -- ISO 8601 UTC
    updated_at         TEXT NOT NULL
);

-- One row per user per UTC calendar day. message_count never exceeds the
-- daily limit: the reserve statement refuses the increment past it.
CREATE TABLE IF NOT EXISTS message_usage (
    user_id       TEXT NOT NULL REFERENCES users(user_id),
    date          TEXT NOT NULL,        -- ISO 8601 date, UTC
    message_count INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (user_id, date)
);

CREATE INDEX IF NOT EXISTS sessions_user_idx ON sessions(user_id);
CREATE INDEX IF NOT EXISTS subscribers_user_idx ON subscribers(user_id);

PRAGMA user_version = 1;
";
